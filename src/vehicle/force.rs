//! Longitudinal and lateral force models.
//!
//! Two families exist:
//! - `Traction`: wheel force along the heading, linear drag and a tire-slip
//!   term, integrated into a free 3D velocity with forward Euler.
//! - `Accumulator`: a signed forward speed bumped by a fixed amount per tick
//!   and decayed by friction, with no top speed.

use super::input::ControlInput;
use super::rate::RateMode;
use super::state::Velocity;
use crate::sim::{physics, Float3};
use serde::{Deserialize, Serialize};

/// Lateral grip correction applied by the traction model.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlipModel {
    /// `slip * (v x (f x v)) / |v| * sign(f . v)`
    DoubleCross,
    /// `-slip * |f x v| / |v| * v`
    ProjectedMagnitude,
}

impl SlipModel {
    /// Slip acceleration for velocity `v` and heading `forward`.
    ///
    /// Returns zero below `physics::EPSILON` speed.
    pub fn acceleration(self, coefficient: f32, forward: Float3, v: Float3) -> Float3 {
        let speed = v.magnitude();
        if speed < physics::EPSILON {
            return Float3::ZERO;
        }
        match self {
            SlipModel::DoubleCross => {
                coefficient * v.cross(forward.cross(v)) / speed
                    * physics::sign(forward.dot(v))
            }
            SlipModel::ProjectedMagnitude => {
                -coefficient * forward.cross(v).magnitude() / speed * v
            }
        }
    }
}

/// Parameters of the force + drag + slip model.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct TractionParams {
    pub mass: f32,
    pub wheel_force: f32,
    pub drag_coefficient: f32,
    pub slip_coefficient: f32,
    pub slip: SlipModel,
}

impl TractionParams {
    pub fn step(&self, v: Float3, forward: Float3, input: ControlInput, dt: f32) -> Float3 {
        let total_force = self.wheel_force * input.drive_sign();

        let drive = forward * total_force / self.mass;
        let drag = -self.drag_coefficient * v / self.mass;
        let slip = self.slip.acceleration(self.slip_coefficient, forward, v);

        v + (drive + drag + slip) * dt
    }

    /// Speed at which drive force and drag cancel.
    pub fn terminal_speed(&self) -> f32 {
        self.wheel_force / self.drag_coefficient
    }
}

/// Parameters of the accumulated speed + friction model.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccumulatorParams {
    /// Speed added per tick while a drive intent is held.
    pub acceleration: f32,
    /// Fraction of speed removed per tick.
    pub friction: f32,
}

impl AccumulatorParams {
    pub fn step(&self, speed: f32, input: ControlInput, dt: f32, mode: RateMode) -> f32 {
        let speed = speed + self.acceleration * input.drive_sign() * mode.tick_scale(dt);
        mode.decay(speed, self.friction, dt)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum ForceModel {
    Traction(TractionParams),
    Accumulator(AccumulatorParams),
}

impl ForceModel {
    /// Motion of a car standing still, in this model's representation.
    pub fn at_rest(&self) -> Velocity {
        match self {
            ForceModel::Traction(_) => Velocity::Linear(Float3::ZERO),
            ForceModel::Accumulator(_) => Velocity::Forward(0.0),
        }
    }

    /// Next velocity.
    ///
    /// A velocity stored in the other model's representation is converted
    /// first: a forward speed becomes a vector along `forward`, a vector is
    /// projected onto `forward`.
    pub fn update(
        &self,
        velocity: Velocity,
        forward: Float3,
        input: ControlInput,
        dt: f32,
        mode: RateMode,
    ) -> Velocity {
        match self {
            ForceModel::Traction(p) => {
                Velocity::Linear(p.step(velocity.world(forward), forward, input, dt))
            }
            ForceModel::Accumulator(p) => {
                Velocity::Forward(p.step(velocity.to_forward(forward), input, dt, mode))
            }
        }
    }
}
