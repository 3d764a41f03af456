use crate::constants::RELEASE_DURATION_SEC;
use crate::tween::Tween;
use glam::Vec2;

/// Pointer drag state, shared by mouse and touch input.
///
/// `delta` only changes through `move_to` while a drag is active, or through
/// `advance` while a release animation is in flight.
#[derive(Default)]
pub struct PointerState {
    origin: Vec2,
    pub delta: Vec2,
    pub active: bool,
    release: Option<Tween>,
}

impl PointerState {
    /// Pointer-down: capture the drag origin and cancel any in-flight release.
    /// A second press while already dragging just moves the origin.
    pub fn begin(&mut self, at: Vec2) {
        self.active = true;
        self.origin = at;
        self.release = None;
    }

    /// Pointer-move: update the drag delta. Ignored while no drag is active;
    /// returns whether the move was consumed.
    pub fn move_to(&mut self, at: Vec2) -> bool {
        if !self.active {
            return false;
        }
        self.delta = at - self.origin;
        true
    }

    /// Pointer-up: start easing the delta back to zero.
    pub fn end(&mut self) {
        self.active = false;
        self.release = Some(Tween::new(self.delta, RELEASE_DURATION_SEC));
    }

    /// Advance the release animation, if one is in flight.
    pub fn advance(&mut self, dt: f32) {
        if let Some(release) = self.release.as_mut() {
            self.delta = release.advance(dt);
            if release.finished() {
                self.release = None;
            }
        }
    }
}
