use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be finite, got {value}")]
    NotFinite { field: &'static str, value: f32 },

    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f32 },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f32 },

    #[error("{field} must lie in [0, 1], got {value}")]
    NotAFraction { field: &'static str, value: f32 },

    #[error("unknown preset `{0}` (expected drag_slip, projected_slip or accumulator)")]
    UnknownPreset(String),

    #[error("invalid vehicle config JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

pub(crate) fn finite(field: &'static str, value: f32) -> Result<f32, ConfigError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConfigError::NotFinite { field, value })
    }
}

pub(crate) fn positive(field: &'static str, value: f32) -> Result<f32, ConfigError> {
    if finite(field, value)? > 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

pub(crate) fn non_negative(field: &'static str, value: f32) -> Result<f32, ConfigError> {
    if finite(field, value)? >= 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::Negative { field, value })
    }
}

pub(crate) fn fraction(field: &'static str, value: f32) -> Result<f32, ConfigError> {
    if (0.0..=1.0).contains(&finite(field, value)?) {
        Ok(value)
    } else {
        Err(ConfigError::NotAFraction { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checks_accept_valid_values() {
        assert_eq!(finite("x", -3.0).unwrap(), -3.0);
        assert_eq!(positive("x", 0.5).unwrap(), 0.5);
        assert_eq!(non_negative("x", 0.0).unwrap(), 0.0);
        assert_eq!(fraction("x", 1.0).unwrap(), 1.0);
    }

    #[test]
    fn checks_reject_invalid_values() {
        assert!(matches!(
            finite("mass", f32::NAN),
            Err(ConfigError::NotFinite { field: "mass", .. })
        ));
        assert!(matches!(
            positive("mass", 0.0),
            Err(ConfigError::NotPositive { field: "mass", .. })
        ));
        assert!(matches!(
            positive("mass", f32::INFINITY),
            Err(ConfigError::NotFinite { .. })
        ));
        assert!(matches!(
            non_negative("drag", -1.0),
            Err(ConfigError::Negative { .. })
        ));
        assert!(matches!(
            fraction("friction", 1.5),
            Err(ConfigError::NotAFraction { .. })
        ));
    }

    #[test]
    fn display_names_the_field() {
        let err = positive("traction.mass", 0.0).unwrap_err();
        assert_eq!(err.to_string(), "traction.mass must be positive, got 0");
    }
}
