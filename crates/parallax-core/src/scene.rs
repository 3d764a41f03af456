use crate::constants::{SURFACE_DRAG_ROTATION_DEG, SURFACE_TILT_ROTATION_DEG};
use crate::layer::{parallax_offset, LayerConfig, LayerState};
use crate::pointer::PointerState;
use crate::tilt::TiltState;
use glam::Vec2;
use smallvec::SmallVec;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("layer registry is empty")]
    EmptyRegistry,
    #[error("layer {index} opacity {opacity} is outside 0..=1")]
    OpacityOutOfRange { index: usize, opacity: f32 },
}

/// All mutable effect state: the layer list plus both input trackers.
///
/// Passed explicitly to the update and draw paths; event handlers and the
/// frame loop share it through a single handle instead of globals.
pub struct Scene {
    pub layers: SmallVec<[LayerState; 8]>,
    pub pointer: PointerState,
    pub tilt: TiltState,
}

impl Scene {
    /// Build a scene from a layer registry, validating it up front.
    pub fn new(configs: &[LayerConfig]) -> Result<Self, SceneError> {
        if configs.is_empty() {
            return Err(SceneError::EmptyRegistry);
        }
        for (index, config) in configs.iter().enumerate() {
            if !(0.0..=1.0).contains(&config.opacity) {
                return Err(SceneError::OpacityOutOfRange {
                    index,
                    opacity: config.opacity,
                });
            }
        }
        Ok(Self {
            layers: configs.iter().map(LayerState::from).collect(),
            pointer: PointerState::default(),
            tilt: TiltState::default(),
        })
    }

    /// One per-frame step: advance the release animation, then recompute every
    /// layer's draw offset from the current input state.
    pub fn advance(&mut self, dt: f32) {
        self.pointer.advance(dt);
        for layer in &mut self.layers {
            layer.offset = parallax_offset(layer.depth, self.pointer.delta, self.tilt.delta);
        }
    }

    /// Whole-surface rotation in degrees, `(rotate_x, rotate_y)`.
    pub fn surface_rotation(&self) -> Vec2 {
        let p = self.pointer.delta;
        let m = self.tilt.delta;
        Vec2::new(
            p.y * -SURFACE_DRAG_ROTATION_DEG + m.y * -SURFACE_TILT_ROTATION_DEG,
            p.x * SURFACE_DRAG_ROTATION_DEG + m.x * SURFACE_TILT_ROTATION_DEG,
        )
    }
}

/// Destination rectangle for drawing a layer image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// Rectangle that covers the surface while preserving the image aspect ratio,
/// centered on both axes.
pub fn cover_rect(image_w: f32, image_h: f32, surface_w: f32, surface_h: f32) -> DrawRect {
    let scale = (surface_w / image_w.max(1.0)).max(surface_h / image_h.max(1.0));
    let w = image_w * scale;
    let h = image_h * scale;
    DrawRect {
        x: (surface_w - w) * 0.5,
        y: (surface_h - h) * 0.5,
        w,
        h,
    }
}
