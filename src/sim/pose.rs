use super::frame::Frame;
use super::math::{Float3, Matrix4, Quaternion};
use serde::{Deserialize, Serialize};

/// Rigid-body pose: body frame plus world position.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub frame: Frame,
    pub position: Float3,
}

impl Pose {
    pub const fn new(frame: Frame, position: Float3) -> Self {
        Self { frame, position }
    }

    pub const IDENTITY: Self = Self::new(Frame::IDENTITY, Float3::ZERO);

    pub fn forward(&self) -> Float3 {
        self.frame.forward
    }

    pub fn up(&self) -> Float3 {
        self.frame.up
    }

    /// Yaws the body about its own up axis.
    ///
    /// The pivot lies `pivot_offset` units ahead of the body origin along the
    /// current forward axis. With a zero offset the origin stays put; with a
    /// positive offset the origin swings around the point ahead of it.
    pub fn yawed(self, angle: f32, pivot_offset: f32) -> Self {
        if angle == 0.0 {
            return self;
        }
        let axis = self.frame.up;
        let frame = self.frame.rotate_around(axis, angle);
        if pivot_offset == 0.0 {
            return Self::new(frame, self.position);
        }

        let pivot = self.position + self.frame.forward * pivot_offset;
        let q = Quaternion::from_axis_angle(axis, angle);
        Self::new(frame, pivot + q.mul_vec(self.position - pivot))
    }

    /// Moves the body by a world-space displacement.
    pub fn translated(self, delta: Float3) -> Self {
        Self::new(self.frame, self.position + delta)
    }

    /// World matrix for row-vector renderers: right, up, backward, translation.
    pub fn world_matrix(&self) -> Matrix4 {
        Matrix4::from_rows(
            self.frame.right,
            self.frame.up,
            -self.frame.forward,
            self.position,
        )
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::PI;

    const TOLERANCE: f32 = 1e-5;

    #[test]
    fn yaw_without_pivot_keeps_position() {
        let pose = Pose::new(Frame::IDENTITY, Float3::new(3.0, 0.0, 4.0));
        let turned = pose.yawed(0.4, 0.0);

        assert_eq!(turned.position, pose.position);
        assert_relative_eq!(turned.frame.yaw(), 0.4, epsilon = TOLERANCE);
    }

    #[test]
    fn yaw_about_forward_pivot_swings_origin() {
        let turned = Pose::IDENTITY.yawed(PI / 2.0, 2.0);

        // Pivot sits at (0, 0, -2); the origin swings from +Z of the pivot to +X.
        assert_relative_eq!(turned.position.x, 2.0, epsilon = TOLERANCE);
        assert_relative_eq!(turned.position.y, 0.0, epsilon = TOLERANCE);
        assert_relative_eq!(turned.position.z, -2.0, epsilon = TOLERANCE);
        assert_relative_eq!(turned.forward().x, -1.0, epsilon = TOLERANCE);
    }

    #[test]
    fn pivot_distance_is_preserved() {
        let pose = Pose::new(Frame::IDENTITY, Float3::new(1.0, 0.0, 1.0));
        let pivot = pose.position + pose.forward() * 2.0;
        let turned = pose.yawed(0.3, 2.0);

        assert_relative_eq!((turned.position - pivot).magnitude(), 2.0, epsilon = TOLERANCE);
    }

    #[test]
    fn zero_yaw_is_identity() {
        let pose = Pose::new(Frame::IDENTITY, Float3::new(1.0, 2.0, 3.0));
        assert_eq!(pose.yawed(0.0, 2.0), pose);
    }

    #[test]
    fn world_matrix_rows_match_frame_and_position() {
        let pose = Pose::IDENTITY
            .yawed(0.7, 0.0)
            .translated(Float3::new(5.0, 0.0, -1.0));
        let m = pose.world_matrix();

        assert_eq!(m.row(0), pose.frame.right);
        assert_eq!(m.row(1), pose.frame.up);
        assert_eq!(-m.row(2), pose.forward());
        assert_eq!(m.row(3), pose.position);
        assert_eq!(m.m[15], 1.0);

        let nose = m.transform_point(Float3::FORWARD);
        let expected = pose.position + pose.forward();
        assert_relative_eq!(nose.x, expected.x, epsilon = TOLERANCE);
        assert_relative_eq!(nose.z, expected.z, epsilon = TOLERANCE);
    }

    #[test]
    fn identity_world_matrix() {
        assert_eq!(Pose::IDENTITY.world_matrix(), Matrix4::IDENTITY);
    }
}
