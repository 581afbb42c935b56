/// Per-body orbital animation.
///
/// The animator owns the body's angle; speed and the paused flag are read
/// from the composer each frame and never stored here.

use std::f32::consts::TAU;

use glam::Vec3;

/// Self-rotation per running frame, radians.
pub const SPIN_STEP: f32 = 0.005;

#[derive(Debug, Clone, PartialEq)]
pub struct BodyAnimator {
    distance: f32,
    angle: f32,
    spin: f32,
}

impl BodyAnimator {
    /// Start at `initial_angle` (wrapped into [0, 2π)) on a circle of `distance`.
    pub fn new(distance: f32, initial_angle: f32) -> Self {
        Self {
            distance,
            angle: wrap(initial_angle),
            spin: 0.0,
        }
    }

    /// Advance one frame. A paused frame changes nothing.
    pub fn advance(&mut self, speed: f32, paused: bool) {
        if paused {
            return;
        }
        self.angle = wrap(self.angle + speed);
        self.spin = wrap(self.spin + SPIN_STEP);
    }

    /// Orbital angle in [0, 2π).
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Accumulated self-rotation around the body's Y axis.
    pub fn spin(&self) -> f32 {
        self.spin
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Position on the orbit: (d·cos θ, 0, d·sin θ).
    pub fn position(&self) -> Vec3 {
        Vec3::new(
            self.distance * self.angle.cos(),
            0.0,
            self.distance * self.angle.sin(),
        )
    }
}

/// Into [0, 2π). `rem_euclid` rounds tiny negatives up to exactly 2π.
fn wrap(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}
