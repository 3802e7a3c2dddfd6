use crate::sim::{Float3, Pose};
use serde::{Deserialize, Serialize};

/// How the vehicle's motion is stored.
///
/// Force-based models integrate a free 3D velocity; the accumulator model only
/// tracks a signed speed along the body's forward axis.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Velocity {
    Linear(Float3),
    Forward(f32),
}

impl Velocity {
    /// Magnitude of motion, `|v|` or `|speed|`.
    pub fn speed(&self) -> f32 {
        match *self {
            Velocity::Linear(v) => v.magnitude(),
            Velocity::Forward(s) => s.abs(),
        }
    }

    /// World-space velocity given the body's current forward axis.
    pub fn world(&self, forward: Float3) -> Float3 {
        match *self {
            Velocity::Linear(v) => v,
            Velocity::Forward(s) => forward * s,
        }
    }

    /// Scalar form, keeping only the component along `forward`.
    pub fn to_forward(self, forward: Float3) -> f32 {
        match self {
            Velocity::Linear(v) => v.dot(forward),
            Velocity::Forward(s) => s,
        }
    }
}

/// Everything that changes from one tick to the next.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct KinematicState {
    pub pose: Pose,
    pub velocity: Velocity,
    /// Commanded wheel angle in radians, positive to the left.
    pub steering_angle: f32,
}

impl KinematicState {
    /// Identity pose, no motion, centered wheel.
    pub const fn at_rest(velocity: Velocity) -> Self {
        Self {
            pose: Pose::IDENTITY,
            velocity,
            steering_angle: 0.0,
        }
    }

    pub fn speed(&self) -> f32 {
        self.velocity.speed()
    }

    /// Signed speed along the body's forward axis.
    pub fn forward_speed(&self) -> f32 {
        self.velocity.to_forward(self.pose.forward())
    }

    pub fn world_velocity(&self) -> Float3 {
        self.velocity.world(self.pose.forward())
    }
}
