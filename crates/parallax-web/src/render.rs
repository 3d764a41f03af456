use parallax_core::{cover_rect, BlendMode, Scene};
use web_sys as web;

/// Draw one frame: clear, apply the surface tilt, then composite each layer
/// at its current parallax offset, back to front.
pub fn draw_frame(
    ctx: &web::CanvasRenderingContext2d,
    canvas: &web::HtmlCanvasElement,
    scene: &Scene,
    images: &[web::HtmlImageElement],
) {
    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    ctx.clear_rect(0.0, 0.0, width, height);

    let rot = scene.surface_rotation();
    _ = canvas.style().set_property(
        "transform",
        &format!("rotateX({}deg) rotateY({}deg)", rot.x, rot.y),
    );

    for (layer, image) in scene.layers.iter().zip(images) {
        let op = layer.blend.map_or("source-over", BlendMode::composite_op);
        _ = ctx.set_global_composite_operation(op);
        ctx.set_global_alpha(layer.opacity as f64);

        let rect = cover_rect(
            image.natural_width() as f32,
            image.natural_height() as f32,
            canvas.width() as f32,
            canvas.height() as f32,
        );
        _ = ctx.draw_image_with_html_image_element_and_dw_and_dh(
            image,
            (rect.x + layer.offset.x) as f64,
            (rect.y + layer.offset.y) as f64,
            rect.w as f64,
            rect.h as f64,
        );
    }
}
