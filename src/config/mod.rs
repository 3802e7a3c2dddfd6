//! Vehicle configuration: validated constants fixed at construction.
//!
//! Configs come from a [`Preset`] or from JSON. Angles are radians, rates are
//! per tick unless the field says otherwise.

mod error;
mod preset;

pub use error::ConfigError;
pub use preset::Preset;

use crate::vehicle::{ForceModel, PoseIntegrator, RateMode, RotationPolicy, SteeringModel};
use error::{finite, fraction, non_negative, positive};
use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleConfig {
    pub steering: SteeringModel,
    pub force: ForceModel,
    pub integrator: PoseIntegrator,
    #[serde(default)]
    pub rate_mode: RateMode,
}

impl VehicleConfig {
    /// Parses and validates a JSON config.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Rejects constants the per-tick math cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("steering.rate", self.steering.rate)?;
        non_negative("steering.max_angle", self.steering.max_angle)?;
        fraction("steering.relax_fraction", self.steering.relax_fraction)?;

        match self.force {
            ForceModel::Traction(p) => {
                positive("force.mass", p.mass)?;
                non_negative("force.wheel_force", p.wheel_force)?;
                non_negative("force.drag_coefficient", p.drag_coefficient)?;
                non_negative("force.slip_coefficient", p.slip_coefficient)?;
            }
            ForceModel::Accumulator(p) => {
                non_negative("force.acceleration", p.acceleration)?;
                fraction("force.friction", p.friction)?;
            }
        }

        match self.integrator.policy {
            RotationPolicy::Clamped {
                coefficient,
                max_rate,
                speed_exponent,
            } => {
                finite("integrator.coefficient", coefficient)?;
                positive("integrator.max_rate", max_rate)?;
                positive("integrator.speed_exponent", speed_exponent)?;
            }
            RotationPolicy::Linear { coefficient } => {
                finite("integrator.coefficient", coefficient)?;
            }
        }
        finite("integrator.pivot_offset", self.integrator.pivot_offset)?;

        if let RateMode::FrameIndependent { reference_hz } = self.rate_mode {
            positive("rate_mode.reference_hz", reference_hz)?;
        }
        Ok(())
    }
}

impl From<Preset> for VehicleConfig {
    fn from(preset: Preset) -> Self {
        preset.config()
    }
}
