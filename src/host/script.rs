use crate::vehicle::ControlInput;
use serde::{Deserialize, Serialize};

/// Intents held for a number of consecutive ticks.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptSegment {
    pub ticks: u32,
    #[serde(flatten)]
    pub input: ControlInput,
}

impl ScriptSegment {
    pub const fn new(ticks: u32, input: ControlInput) -> Self {
        Self { ticks, input }
    }
}

/// Timeline of control intents, replayed one tick at a time.
///
/// JSON form is a plain array:
/// `[{"ticks": 120, "accelerate": true}, {"ticks": 30, "quit": true}]`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InputScript {
    segments: Vec<ScriptSegment>,
}

impl InputScript {
    pub fn new(segments: Vec<ScriptSegment>) -> Self {
        Self { segments }
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Accelerate, hold a left turn, then coast: two seconds each at 60 Hz.
    pub fn demo() -> Self {
        let accelerate = ControlInput {
            accelerate: true,
            ..ControlInput::NONE
        };
        let turn = ControlInput {
            steer_left: true,
            ..accelerate
        };
        Self::new(vec![
            ScriptSegment::new(120, accelerate),
            ScriptSegment::new(120, turn),
            ScriptSegment::new(120, ControlInput::NONE),
        ])
    }

    pub fn segments(&self) -> &[ScriptSegment] {
        &self.segments
    }

    pub fn total_ticks(&self) -> u64 {
        self.segments.iter().map(|s| u64::from(s.ticks)).sum()
    }

    /// One input per tick, in order.
    pub fn inputs(&self) -> impl Iterator<Item = ControlInput> + '_ {
        self.segments
            .iter()
            .flat_map(|s| std::iter::repeat(s.input).take(s.ticks as usize))
    }
}
