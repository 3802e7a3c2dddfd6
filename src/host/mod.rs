//! Helpers for hosts that drive a [`Simulation`](crate::vehicle::Simulation)
//! without a keyboard.

mod script;

pub use script::{InputScript, ScriptSegment};
