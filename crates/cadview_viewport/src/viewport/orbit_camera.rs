//! Software camera for views without a native camera object.

use glam::DVec3;

use crate::error::ViewResult;
use crate::transform::{AxisRotation, WORLD_UP};
use crate::view::Camera;

/// Look-at camera described by eye, center and up.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitCamera {
    pub eye: DVec3,
    pub center: DVec3,
    pub up: DVec3,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            eye: DVec3::new(10.0, -10.0, 10.0),
            center: DVec3::ZERO,
            up: WORLD_UP,
        }
    }
}

impl OrbitCamera {
    pub fn new(eye: DVec3, center: DVec3, up: DVec3) -> Self {
        Self {
            eye,
            center,
            up: up.normalize_or_zero(),
        }
    }

    pub fn distance(&self) -> f64 {
        self.eye.distance(self.center)
    }

    pub fn set_up(&mut self, up: DVec3) {
        self.up = up.normalize_or_zero();
    }

    /// Move the eye along the view direction so that the distance is
    /// divided by `factor`.
    pub fn zoom(&mut self, factor: f64) {
        if factor > 0.0 {
            self.eye = self.center + (self.eye - self.center) / factor;
        }
    }
}

impl Camera for OrbitCamera {
    fn center(&self) -> DVec3 {
        self.center
    }

    fn transform(&mut self, rotation: &AxisRotation) -> ViewResult<()> {
        self.eye = rotation.apply_point(self.eye);
        self.center = rotation.apply_point(self.center);
        self.up = rotation.apply_vector(self.up);
        Ok(())
    }
}
