use super::input::ControlInput;
use super::rate::RateMode;
use serde::{Deserialize, Serialize};

/// Wheel angle response to the steer intents.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct SteeringModel {
    /// Radians added per tick while a single steer intent is held.
    pub rate: f32,
    /// Bound on the wheel angle, radians.
    pub max_angle: f32,
    /// Fraction of the angle removed per tick when no single direction is held.
    #[serde(default = "default_relax_fraction")]
    pub relax_fraction: f32,
}

fn default_relax_fraction() -> f32 {
    0.5
}

impl SteeringModel {
    pub fn new(rate: f32, max_angle: f32) -> Self {
        Self {
            rate,
            max_angle,
            relax_fraction: default_relax_fraction(),
        }
    }

    /// Next wheel angle.
    ///
    /// Left alone pushes toward `+max_angle`, right alone toward `-max_angle`.
    /// Neither or both decays the angle toward center by `relax_fraction`.
    pub fn update(&self, angle: f32, input: ControlInput, dt: f32, mode: RateMode) -> f32 {
        let step = self.rate * mode.tick_scale(dt);
        match (input.steer_left, input.steer_right) {
            (true, false) => self.max_angle.min(angle + step),
            (false, true) => (-self.max_angle).max(angle - step),
            _ => mode.decay(angle, self.relax_fraction, dt),
        }
    }
}
