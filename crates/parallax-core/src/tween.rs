use crate::constants::EASE_BACK_OVERSHOOT;
use glam::Vec2;

/// Overshoot-then-settle easing curve (Back.Out).
#[inline]
pub fn ease_out_back(t: f32) -> f32 {
    let c1 = EASE_BACK_OVERSHOOT;
    let c3 = c1 + 1.0;
    let u = t - 1.0;
    1.0 + c3 * u * u * u + c1 * u * u
}

/// Animates a vector from a captured start value back to zero over a fixed
/// duration.
#[derive(Clone, Debug)]
pub struct Tween {
    from: Vec2,
    duration: f32,
    elapsed: f32,
}

impl Tween {
    pub fn new(from: Vec2, duration: f32) -> Self {
        Self {
            from,
            duration,
            elapsed: 0.0,
        }
    }

    /// Advance by `dt` seconds and return the current value. Lands on exactly
    /// zero once the duration has elapsed.
    pub fn advance(&mut self, dt: f32) -> Vec2 {
        self.elapsed = (self.elapsed + dt).min(self.duration);
        let t = if self.duration > 0.0 {
            self.elapsed / self.duration
        } else {
            1.0
        };
        self.from * (1.0 - ease_out_back(t))
    }

    #[inline]
    pub fn finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}
