//! Rigid rotations applied to cameras.

use glam::{DQuat, DVec3};

/// World vertical axis used for turntable yaw and horizon resets.
pub const WORLD_UP: DVec3 = DVec3::Z;

/// Rotation by `angle` radians about the axis through `origin` along `axis`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisRotation {
    pub origin: DVec3,
    /// Unit direction of the rotation axis
    pub axis: DVec3,
    pub angle: f64,
}

impl AxisRotation {
    /// Create a rotation. A zero-length axis yields the identity.
    #[inline]
    pub fn new(origin: DVec3, axis: DVec3, angle: f64) -> Self {
        let axis = axis.normalize_or_zero();
        let angle = if axis == DVec3::ZERO { 0.0 } else { angle };
        Self { origin, axis, angle }
    }

    /// Rotation about the world vertical axis through `origin`
    #[inline]
    pub fn about_world_up(origin: DVec3, angle: f64) -> Self {
        Self::new(origin, WORLD_UP, angle)
    }

    #[inline]
    pub fn is_identity(&self) -> bool {
        self.angle == 0.0
    }

    /// Rotation part as a quaternion
    #[inline]
    pub fn quat(&self) -> DQuat {
        if self.is_identity() {
            DQuat::IDENTITY
        } else {
            DQuat::from_axis_angle(self.axis, self.angle)
        }
    }

    /// Transform a position
    #[inline]
    pub fn apply_point(&self, point: DVec3) -> DVec3 {
        self.origin + self.quat() * (point - self.origin)
    }

    /// Transform a direction (ignores the origin)
    #[inline]
    pub fn apply_vector(&self, vector: DVec3) -> DVec3 {
        self.quat() * vector
    }
}
