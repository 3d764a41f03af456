// Tests for scene validation, the per-frame step, and the load gate.

use glam::Vec2;
use parallax_core::{
    BlendMode, LayerConfig, LoadGate, Scene, SceneError, ScreenOrientation, DEFAULT_LAYERS,
};

const EPS: f32 = 1e-4;

#[test]
fn empty_registry_is_rejected() {
    assert!(matches!(Scene::new(&[]), Err(SceneError::EmptyRegistry)));
}

#[test]
fn out_of_range_opacity_is_rejected_with_its_index() {
    let configs = [
        LayerConfig {
            src: "a.png",
            depth: -1.0,
            blend: None,
            opacity: 1.0,
        },
        LayerConfig {
            src: "b.png",
            depth: 1.0,
            blend: Some(BlendMode::Lighten),
            opacity: 1.5,
        },
    ];
    let err = Scene::new(&configs)
        .err()
        .expect("opacity 1.5 must be rejected");
    match err {
        SceneError::OpacityOutOfRange { index, .. } => assert_eq!(index, 1),
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn default_registry_builds_a_scene() {
    let scene = Scene::new(DEFAULT_LAYERS).unwrap();
    assert_eq!(scene.layers.len(), DEFAULT_LAYERS.len());
    assert!(scene.layers.iter().all(|l| l.offset == Vec2::ZERO));
}

#[test]
fn advance_recomputes_every_layer_offset_from_the_inputs() {
    let mut scene = Scene::new(DEFAULT_LAYERS).unwrap();
    scene.pointer.begin(Vec2::ZERO);
    scene.pointer.move_to(Vec2::new(100.0, 0.0));
    scene.tilt.ingest(0.0, 0.0, ScreenOrientation::Portrait);
    scene.tilt.ingest(2.5, 4.0, ScreenOrientation::Portrait);

    scene.advance(1.0 / 60.0);

    // Layer 0 has depth -5: drag 100 * -5 * 0.09 = -45, tilt (4, 2.5) * -5 * 2
    assert!((scene.layers[0].offset.x - (-45.0 + 4.0 * -5.0 * 2.0)).abs() < EPS);
    assert!((scene.layers[0].offset.y - (2.5 * -5.0 * 2.0)).abs() < EPS);
    // Layer 4 has depth 1.5 and moves with the input
    assert!((scene.layers[4].offset.x - (100.0 * 1.5 * 0.09 + 4.0 * 1.5 * 2.0)).abs() < EPS);
}

#[test]
fn released_drag_settles_all_offsets_back_to_zero() {
    let mut scene = Scene::new(DEFAULT_LAYERS).unwrap();
    scene.pointer.begin(Vec2::ZERO);
    scene.pointer.move_to(Vec2::new(80.0, -40.0));
    scene.pointer.end();

    for _ in 0..8 {
        scene.advance(0.05);
    }
    assert!(scene.layers.iter().all(|l| l.offset == Vec2::ZERO));
}

#[test]
fn surface_rotation_combines_drag_and_tilt() {
    let mut scene = Scene::new(DEFAULT_LAYERS).unwrap();
    scene.pointer.begin(Vec2::ZERO);
    scene.pointer.move_to(Vec2::new(100.0, 40.0));
    scene.tilt.ingest(0.0, 0.0, ScreenOrientation::Portrait);
    scene.tilt.ingest(-2.0, 3.0, ScreenOrientation::Portrait);

    let rot = scene.surface_rotation();
    // rotate_x = 40 * -0.15 + -2 * -1.2, rotate_y = 100 * 0.15 + 3 * 1.2
    assert!((rot.x - (-6.0 + 2.4)).abs() < EPS);
    assert!((rot.y - (15.0 + 3.6)).abs() < EPS);
}

#[test]
fn load_gate_fires_exactly_once_when_the_last_image_settles() {
    let mut gate = LoadGate::new(3);
    assert!(!gate.is_ready());
    assert!(!gate.settle());
    assert!(!gate.settle());
    assert!(gate.settle());
    assert!(gate.is_ready());
    // Extra settles never re-fire
    assert!(!gate.settle());
}

#[test]
fn load_gate_with_nothing_to_load_is_ready_immediately() {
    let gate = LoadGate::new(0);
    assert!(gate.is_ready());
}
