//! arcade-drive - per-tick vehicle dynamics for a small driving game.
//!
//! # Architecture
//!
//! Layered modules, math at the bottom:
//!
//! - **sim**: Math primitives (Float3, Quaternion, Frame, Pose, Matrix4)
//! - **vehicle**: Steering, force models, pose integration, the tick loop
//! - **config**: Validated vehicle constants, presets, JSON loading
//! - **host**: Scripted input timelines for headless hosts
//! - **ffi**: C FFI bindings
//!
//! # Usage
//!
//! ```
//! use arcade_drive::{ControlInput, Preset, Simulation};
//!
//! let mut sim = Simulation::from_preset(Preset::DragSlip);
//! let input = ControlInput { accelerate: true, ..ControlInput::NONE };
//! for _ in 0..60 {
//!     sim.tick(input, 1.0 / 60.0);
//! }
//! assert!(sim.state().speed() > 0.0);
//! ```
//!
//! For C/C#/engine hosts, build with the `ffi` feature, link the cdylib and
//! use the `drive_*` functions.

pub mod config;
pub mod host;
pub mod sim;
pub mod vehicle;

#[cfg(feature = "ffi")]
pub mod ffi;

// Re-export commonly used types at crate root
pub use config::{ConfigError, Preset, VehicleConfig};
pub use sim::{Float3, Frame, Matrix4, Pose};
pub use vehicle::{ControlInput, KinematicState, Simulation, TickOutcome, Vehicle, Velocity};
