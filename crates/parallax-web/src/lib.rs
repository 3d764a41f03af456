#![cfg(target_arch = "wasm32")]

pub mod assets;
pub mod dom;
pub mod events;
pub mod frame;
pub mod motion;
pub mod overlay;
pub mod render;

use instant::Instant;
use parallax_core::{Scene, DEFAULT_LAYERS};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("parallax-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id("canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #canvas"))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let ctx: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    dom::sync_canvas_backing_size(&canvas);
    dom::wire_resize(&window, &canvas);

    overlay::show(&document);

    let scene = Rc::new(RefCell::new(Scene::new(DEFAULT_LAYERS)?));

    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        scene: scene.clone(),
    });

    let images =
        assets::create_images(DEFAULT_LAYERS).map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Rendering starts only once every configured image has settled.
    let on_ready = {
        let canvas = canvas.clone();
        let images = images.clone();
        move || {
            dom::sync_canvas_backing_size(&canvas);
            overlay::hide(&document);
            log::info!("all layers settled; starting frame loop");
            frame::start_loop(Rc::new(RefCell::new(frame::FrameContext {
                scene,
                canvas,
                ctx,
                images,
                last_instant: Instant::now(),
            })));
        }
    };
    assets::begin_load(&images, DEFAULT_LAYERS, on_ready);

    Ok(())
}
