use super::{ConfigError, VehicleConfig};
use crate::vehicle::{
    AccumulatorParams, ForceModel, PoseIntegrator, RateMode, RotationPolicy, SlipModel,
    SteeringModel, TractionParams,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The three tuned handling models.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    /// Wheel force, drag, double-cross slip, speed-capped yaw rate.
    DragSlip,
    /// Wheel force, drag, projected slip, uncapped yaw around a point ahead.
    ProjectedSlip,
    /// Accumulated speed with per-tick friction, uncapped yaw.
    Accumulator,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Preset::DragSlip, Preset::ProjectedSlip, Preset::Accumulator];

    pub fn name(self) -> &'static str {
        match self {
            Preset::DragSlip => "drag_slip",
            Preset::ProjectedSlip => "projected_slip",
            Preset::Accumulator => "accumulator",
        }
    }

    pub fn config(self) -> VehicleConfig {
        match self {
            Preset::DragSlip => VehicleConfig {
                steering: SteeringModel::new(1f32.to_radians(), 40f32.to_radians()),
                force: ForceModel::Traction(TractionParams {
                    mass: 20.0,
                    wheel_force: 6000.0,
                    drag_coefficient: 5.0,
                    slip_coefficient: 5.0,
                    slip: SlipModel::DoubleCross,
                }),
                integrator: PoseIntegrator::new(
                    RotationPolicy::Clamped {
                        coefficient: 0.015,
                        max_rate: 100f32.to_radians(),
                        speed_exponent: 1.5,
                    },
                    0.0,
                ),
                rate_mode: RateMode::PerTick,
            },
            Preset::ProjectedSlip => VehicleConfig {
                steering: SteeringModel::new(1f32.to_radians(), 35f32.to_radians()),
                force: ForceModel::Traction(TractionParams {
                    mass: 20.0,
                    wheel_force: 6000.0,
                    drag_coefficient: 5.0,
                    slip_coefficient: 5.0,
                    slip: SlipModel::ProjectedMagnitude,
                }),
                integrator: PoseIntegrator::new(RotationPolicy::Linear { coefficient: 0.005 }, 2.0),
                rate_mode: RateMode::PerTick,
            },
            Preset::Accumulator => VehicleConfig {
                steering: SteeringModel::new(1f32.to_radians(), 30f32.to_radians()),
                force: ForceModel::Accumulator(AccumulatorParams {
                    acceleration: 0.1,
                    friction: 0.005,
                }),
                integrator: PoseIntegrator::new(RotationPolicy::Linear { coefficient: 0.1 }, 0.0),
                rate_mode: RateMode::PerTick,
            },
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigError::UnknownPreset(s.to_string()))
    }
}
