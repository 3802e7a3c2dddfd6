//! Per-tick vehicle dynamics.
//!
//! A tick threads the [`KinematicState`] through three stages in a fixed order:
//!
//! 1. [`SteeringModel`]: wheel angle from the steer intents
//! 2. [`ForceModel`]: velocity from the drive intents
//! 3. [`PoseIntegrator`]: yaw from wheel angle and speed, then translation
//!
//! [`Vehicle::step`] is the pure transition; [`Simulation`] owns the state of a
//! running session and is what hosts call once per frame.

mod force;
mod input;
mod integrator;
mod rate;
mod simulation;
mod state;
mod steering;

pub use force::{AccumulatorParams, ForceModel, SlipModel, TractionParams};
pub use input::ControlInput;
pub use integrator::{PoseIntegrator, RotationPolicy};
pub use rate::RateMode;
pub use simulation::{Simulation, TickOutcome, Vehicle};
pub use state::{KinematicState, Velocity};
pub use steering::SteeringModel;
