use crate::layer::{BlendMode, LayerConfig};

// Shared input/render tuning constants for the parallax effect.

// Layer offset response
pub const DRAG_OFFSET_MULTIPLIER: f32 = 0.09; // px of offset per px of drag, per unit depth
pub const TILT_OFFSET_MULTIPLIER: f32 = 2.0; // px of offset per degree of tilt, per unit depth

// Whole-surface rotation
pub const SURFACE_DRAG_ROTATION_DEG: f32 = 0.15; // degrees per px of drag
pub const SURFACE_TILT_ROTATION_DEG: f32 = 1.2; // degrees per degree of tilt

// Drag release animation
pub const RELEASE_DURATION_SEC: f32 = 0.3;
pub const EASE_BACK_OVERSHOOT: f32 = 1.70158; // classic Back easing constant

// Default five-layer scene, back to front
pub const DEFAULT_LAYERS: &[LayerConfig] = &[
    LayerConfig {
        src: "layer1.png",
        depth: -5.0,
        blend: None,
        opacity: 1.0,
    },
    LayerConfig {
        src: "layer2.png",
        depth: -2.0,
        blend: None,
        opacity: 1.0,
    },
    LayerConfig {
        src: "layer3.png",
        depth: -1.0,
        blend: Some(BlendMode::Lighten),
        opacity: 1.0,
    },
    LayerConfig {
        src: "layer4.png",
        depth: -0.5,
        blend: Some(BlendMode::Normal),
        opacity: 1.0,
    },
    LayerConfig {
        src: "layer5.png",
        depth: 1.5,
        blend: Some(BlendMode::Normal),
        opacity: 1.0,
    },
];
