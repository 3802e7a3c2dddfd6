/// Reference tick rate the presets were tuned at.
pub const HZ: f32 = 60.0;
pub const DT: f32 = 1.0 / HZ;
/// Machine epsilon; speeds below it are treated as standing still.
pub const EPSILON: f32 = f32::EPSILON;

/// Three-way sign: `-1`, `0` or `1`.
///
/// Unlike `f32::signum`, zero (of either sign) maps to zero so that a car at
/// rest or a centered wheel contributes nothing. NaN also maps to zero.
pub fn sign(value: f32) -> f32 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const TOLERANCE: f32 = 1e-6;

    #[test]
    fn dt_equals_one_over_hz() {
        assert_relative_eq!(DT, 1.0 / 60.0, epsilon = TOLERANCE);
    }

    #[test]
    fn sign_of_zero_is_zero() {
        assert_eq!(sign(0.0), 0.0);
        assert_eq!(sign(-0.0), 0.0);
        assert_eq!(sign(f32::NAN), 0.0);
    }

    #[test]
    fn sign_of_nonzero_is_unit() {
        assert_eq!(sign(3.5), 1.0);
        assert_eq!(sign(-1e-30), -1.0);
    }
}
