use crate::constants::{DRAG_OFFSET_MULTIPLIER, TILT_OFFSET_MULTIPLIER};
use glam::Vec2;

/// Compositing operation applied when a layer is drawn onto the surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlendMode {
    Normal,
    Lighten,
}

impl BlendMode {
    /// Canvas `globalCompositeOperation` name.
    #[inline]
    pub fn composite_op(self) -> &'static str {
        match self {
            BlendMode::Normal => "source-over",
            BlendMode::Lighten => "lighten",
        }
    }
}

/// Static per-layer configuration, fixed for the whole session.
#[derive(Clone, Copy, Debug)]
pub struct LayerConfig {
    pub src: &'static str,
    pub depth: f32,
    pub blend: Option<BlendMode>,
    pub opacity: f32,
}

/// Per-frame view of a layer; only `offset` changes after startup.
#[derive(Clone, Debug)]
pub struct LayerState {
    pub depth: f32,
    pub blend: Option<BlendMode>,
    pub opacity: f32,
    pub offset: Vec2,
}

impl From<&LayerConfig> for LayerState {
    fn from(config: &LayerConfig) -> Self {
        Self {
            depth: config.depth,
            blend: config.blend,
            opacity: config.opacity,
            offset: Vec2::ZERO,
        }
    }
}

/// Parallax draw offset for a layer of the given depth. Negative depths move
/// against the input (background), positive depths with it (foreground).
#[inline]
pub fn parallax_offset(depth: f32, pointer_delta: Vec2, tilt_delta: Vec2) -> Vec2 {
    pointer_delta * depth * DRAG_OFFSET_MULTIPLIER + tilt_delta * depth * TILT_OFFSET_MULTIPLIER
}
