use serde::{Deserialize, Serialize};

/// How per-tick terms relate to elapsed time.
///
/// The tuned presets apply the steering relaxation, the accumulator friction
/// and the per-tick increments once per tick regardless of `dt`, so the car
/// handles differently at different frame rates. `FrameIndependent` rescales
/// those terms by `dt * reference_hz`; at `dt = 1 / reference_hz` both modes
/// produce the same numbers.
#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum RateMode {
    #[default]
    PerTick,
    FrameIndependent {
        reference_hz: f32,
    },
}

impl RateMode {
    /// Multiplier for a quantity tuned as "per tick".
    pub fn tick_scale(self, dt: f32) -> f32 {
        match self {
            RateMode::PerTick => 1.0,
            RateMode::FrameIndependent { reference_hz } => dt * reference_hz,
        }
    }

    /// Removes `fraction` of `value` for this tick.
    ///
    /// Per-tick mode evaluates `value - value * fraction` literally.
    pub fn decay(self, value: f32, fraction: f32, dt: f32) -> f32 {
        match self {
            RateMode::PerTick => value - value * fraction,
            RateMode::FrameIndependent { reference_hz } => {
                value * (1.0 - fraction).powf(dt * reference_hz)
            }
        }
    }
}
