// Tests for the pointer gesture lifecycle and the release animation.

use glam::Vec2;
use parallax_core::{ease_out_back, PointerState, Tween, RELEASE_DURATION_SEC};

const EPS: f32 = 1e-5;

#[test]
fn moves_while_idle_are_ignored() {
    let mut pointer = PointerState::default();
    assert!(!pointer.move_to(Vec2::new(50.0, 50.0)));
    assert_eq!(pointer.delta, Vec2::ZERO);
}

#[test]
fn drag_delta_is_displacement_from_origin() {
    let mut pointer = PointerState::default();
    pointer.begin(Vec2::new(10.0, 20.0));
    assert!(pointer.active);
    assert!(pointer.move_to(Vec2::new(110.0, 10.0)));
    assert!((pointer.delta.x - 100.0).abs() < EPS);
    assert!((pointer.delta.y - -10.0).abs() < EPS);
}

#[test]
fn second_press_resets_the_origin() {
    let mut pointer = PointerState::default();
    pointer.begin(Vec2::ZERO);
    pointer.move_to(Vec2::new(10.0, 0.0));
    pointer.begin(Vec2::new(100.0, 100.0));
    pointer.move_to(Vec2::new(110.0, 100.0));
    assert!((pointer.delta.x - 10.0).abs() < EPS);
    assert!(pointer.delta.y.abs() < EPS);
}

#[test]
fn release_returns_delta_to_exactly_zero_within_the_duration() {
    let mut pointer = PointerState::default();
    pointer.begin(Vec2::ZERO);
    pointer.move_to(Vec2::new(100.0, 40.0));
    pointer.end();
    assert!(!pointer.active);

    let mut elapsed = 0.0;
    while elapsed < RELEASE_DURATION_SEC {
        pointer.advance(0.05);
        elapsed += 0.05;
    }
    assert_eq!(pointer.delta, Vec2::ZERO);
}

#[test]
fn release_overshoots_past_zero_before_settling() {
    let mut pointer = PointerState::default();
    pointer.begin(Vec2::ZERO);
    pointer.move_to(Vec2::new(100.0, 0.0));
    pointer.end();

    // At 70% of the duration Back.Out has eased past 1, so the delta has
    // crossed zero.
    pointer.advance(RELEASE_DURATION_SEC * 0.7);
    assert!(pointer.delta.x < 0.0);

    pointer.advance(RELEASE_DURATION_SEC);
    assert_eq!(pointer.delta, Vec2::ZERO);
}

#[test]
fn new_press_cancels_an_in_flight_release() {
    let mut pointer = PointerState::default();
    pointer.begin(Vec2::ZERO);
    pointer.move_to(Vec2::new(60.0, 0.0));
    pointer.end();
    pointer.begin(Vec2::new(5.0, 5.0));

    pointer.advance(1.0);
    assert!((pointer.delta.x - 60.0).abs() < EPS);
}

#[test]
fn ease_out_back_hits_its_endpoints_exactly() {
    assert!(ease_out_back(0.0).abs() < EPS);
    assert!((ease_out_back(1.0) - 1.0).abs() < EPS);
    // The overshoot region sits past the halfway point
    assert!(ease_out_back(0.7) > 1.0);
}

#[test]
fn tween_reports_completion_after_one_big_step() {
    let mut tween = Tween::new(Vec2::new(30.0, -30.0), 0.3);
    let value = tween.advance(1.0);
    assert!(tween.finished());
    assert_eq!(value, Vec2::ZERO);
}
