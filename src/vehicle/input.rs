use serde::{Deserialize, Serialize};

/// Control intents for a single tick, already decoded from raw input.
///
/// Every combination is valid. Conflicts resolve as follows:
/// - accelerate + decelerate: decelerate wins
/// - steer left + steer right: no steering, the wheel relaxes
///
/// `quit` never touches the vehicle; it is reported back to the host.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlInput {
    pub accelerate: bool,
    pub decelerate: bool,
    pub steer_left: bool,
    pub steer_right: bool,
    pub quit: bool,
}

impl ControlInput {
    pub const ACCELERATE: u32 = 1 << 0;
    pub const DECELERATE: u32 = 1 << 1;
    pub const STEER_LEFT: u32 = 1 << 2;
    pub const STEER_RIGHT: u32 = 1 << 3;
    pub const QUIT: u32 = 1 << 4;

    pub const NONE: Self = Self {
        accelerate: false,
        decelerate: false,
        steer_left: false,
        steer_right: false,
        quit: false,
    };

    /// Decodes a host bit mask. Unknown bits are ignored.
    pub const fn from_bits(bits: u32) -> Self {
        Self {
            accelerate: bits & Self::ACCELERATE != 0,
            decelerate: bits & Self::DECELERATE != 0,
            steer_left: bits & Self::STEER_LEFT != 0,
            steer_right: bits & Self::STEER_RIGHT != 0,
            quit: bits & Self::QUIT != 0,
        }
    }

    pub const fn bits(self) -> u32 {
        let mut bits = 0;
        if self.accelerate {
            bits |= Self::ACCELERATE;
        }
        if self.decelerate {
            bits |= Self::DECELERATE;
        }
        if self.steer_left {
            bits |= Self::STEER_LEFT;
        }
        if self.steer_right {
            bits |= Self::STEER_RIGHT;
        }
        if self.quit {
            bits |= Self::QUIT;
        }
        bits
    }

    /// Longitudinal drive direction: `1`, `-1` or `0`.
    ///
    /// Accelerate is applied first and decelerate overwrites it, so holding
    /// both behaves exactly like holding decelerate alone.
    pub fn drive_sign(self) -> f32 {
        let mut drive = 0.0;
        if self.accelerate {
            drive = 1.0;
        }
        if self.decelerate {
            drive = -1.0;
        }
        drive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decelerate_overrides_accelerate() {
        let both = ControlInput {
            accelerate: true,
            decelerate: true,
            ..ControlInput::NONE
        };
        let brake = ControlInput {
            decelerate: true,
            ..ControlInput::NONE
        };
        assert_eq!(both.drive_sign(), brake.drive_sign());
        assert_eq!(both.drive_sign(), -1.0);
    }

    #[test]
    fn drive_sign_idle_and_accelerate() {
        assert_eq!(ControlInput::NONE.drive_sign(), 0.0);
        assert_eq!(
            ControlInput::from_bits(ControlInput::ACCELERATE).drive_sign(),
            1.0
        );
    }

    #[test]
    fn bits_round_trip_and_ignore_unknown() {
        let input = ControlInput::from_bits(0b1_0101 | 0x100);
        assert!(input.accelerate);
        assert!(!input.decelerate);
        assert!(input.steer_left);
        assert!(!input.steer_right);
        assert!(input.quit);
        assert_eq!(input.bits(), 0b1_0101);
    }

    #[test]
    fn deserializes_with_missing_fields() {
        let input: ControlInput = serde_json::from_str(r#"{"steer_right": true}"#).unwrap();
        assert_eq!(
            input,
            ControlInput {
                steer_right: true,
                ..ControlInput::NONE
            }
        );
    }
}
