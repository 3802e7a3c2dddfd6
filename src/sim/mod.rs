//! Pure math primitives for the vehicle core.
//!
//! This module contains the vector, rotation and pose types the dynamics are
//! expressed in. No vehicle behaviour lives here.

mod frame;
mod math;
mod pose;

pub mod physics;

pub use frame::Frame;
pub use math::{Float3, Matrix4, Quaternion};
pub use physics::{sign, DT, EPSILON, HZ};
pub use pose::Pose;
