use glam::Vec2;

/// Physical screen orientation, derived from the orientation angle reported
/// by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScreenOrientation {
    Portrait,
    LandscapeLeft,
    LandscapeRight,
    UpsideDown,
}

impl ScreenOrientation {
    /// Accepts both `window.orientation` style angles (-90) and
    /// `screen.orientation.angle` style angles (270).
    pub fn from_angle(angle: i32) -> Self {
        match angle {
            0 => Self::Portrait,
            90 => Self::LandscapeLeft,
            -90 | 270 => Self::LandscapeRight,
            _ => Self::UpsideDown,
        }
    }
}

/// Device tilt relative to a lazily captured reference orientation.
///
/// `delta` is only meaningful once a reference has been captured; the first
/// reading after a (re)calibration always yields a zero delta.
#[derive(Default)]
pub struct TiltState {
    reference: Option<(f32, f32)>,
    pub delta: Vec2,
}

impl TiltState {
    /// Feed one orientation reading (`beta`/`gamma` in degrees). Axes are
    /// remapped per screen orientation so the tilt direction stays visually
    /// consistent however the device is held.
    pub fn ingest(&mut self, beta: f32, gamma: f32, orientation: ScreenOrientation) {
        let (ref_beta, ref_gamma) = *self.reference.get_or_insert((beta, gamma));
        let d_beta = beta - ref_beta;
        let d_gamma = gamma - ref_gamma;
        self.delta = match orientation {
            ScreenOrientation::Portrait => Vec2::new(d_gamma, d_beta),
            ScreenOrientation::LandscapeLeft => Vec2::new(d_beta, -d_gamma),
            ScreenOrientation::LandscapeRight => Vec2::new(-d_beta, d_gamma),
            ScreenOrientation::UpsideDown => Vec2::new(-d_gamma, -d_beta),
        };
    }

    /// Drop the reference; the next reading recalibrates.
    pub fn recalibrate(&mut self) {
        self.reference = None;
    }
}
