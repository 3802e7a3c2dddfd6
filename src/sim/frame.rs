use super::math::{Float3, Quaternion};
use serde::{Deserialize, Serialize};

/// Orthonormal body frame of the vehicle.
///
/// Represents a right-handed coordinate system with three orthogonal unit vectors:
/// - `forward`: Direction the nose points (`-Z` at rest)
/// - `up`: Roof direction (`+Y` at rest)
/// - `right`: Passenger side (`forward x up`, `+X` at rest)
///
/// C-compatible layout for FFI.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub forward: Float3,
    pub up: Float3,
    pub right: Float3,
}

impl Frame {
    pub const fn new(forward: Float3, up: Float3, right: Float3) -> Self {
        Self { forward, up, right }
    }

    pub const IDENTITY: Self = Self::new(Float3::FORWARD, Float3::UP, Float3::RIGHT);

    /// Re-orthonormalizes the frame using the Gram-Schmidt process.
    ///
    /// Preserves forward exactly, orthogonalizes right to forward,
    /// then recomputes up as right x forward.
    /// This corrects accumulated floating-point drift in frame vectors.
    pub fn reorthonormalize(self) -> Self {
        let fwd = self.forward.normalize();
        let right = (self.right - fwd * fwd.dot(self.right)).normalize();
        let up = right.cross(fwd).normalize();
        Self::new(fwd, up, right)
    }

    /// Rotates the frame around an arbitrary axis by the given angle.
    ///
    /// # Arguments
    /// * `axis` - Rotation axis (will be normalized)
    /// * `angle` - Rotation angle in radians, right-handed
    pub fn rotate_around(self, axis: Float3, angle: f32) -> Self {
        let q = Quaternion::from_axis_angle(axis, angle);
        Self {
            forward: q.mul_vec(self.forward).normalize(),
            up: q.mul_vec(self.up).normalize(),
            right: q.mul_vec(self.right).normalize(),
        }
        .reorthonormalize()
    }

    /// Heading around world up, zero when facing `-Z`, positive to the left.
    pub fn yaw(self) -> f32 {
        (-self.forward.x).atan2(-self.forward.z)
    }

    /// Largest deviation from an orthonormal basis (unit lengths, zero dot products).
    pub fn orthonormal_error(self) -> f32 {
        let lengths = [
            (self.forward.magnitude() - 1.0).abs(),
            (self.up.magnitude() - 1.0).abs(),
            (self.right.magnitude() - 1.0).abs(),
        ];
        let dots = [
            self.forward.dot(self.up).abs(),
            self.forward.dot(self.right).abs(),
            self.up.dot(self.right).abs(),
        ];
        lengths.into_iter().chain(dots).fold(0.0, f32::max)
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::IDENTITY
    }
}
