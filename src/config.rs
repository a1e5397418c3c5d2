//! Character attribute loading and validation.
//!
//! Attributes live in a JSON tuning file; missing fields fall back to the
//! built-in defaults. Validation rejects configurations the regulator
//! cannot run on (non-positive pools or rates, an unreachable jump cost).

use std::path::Path;

use thiserror::Error;

use crate::components::CharacterAttributes;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid attributes: {0}")]
    Invalid(String),
}

/// Load and validate attributes from a JSON file.
pub fn load_attributes(path: &Path) -> Result<CharacterAttributes, ConfigError> {
    let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let attrs: CharacterAttributes =
        serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;
    validate(&attrs)?;
    Ok(attrs)
}

/// Check that a set of attributes is usable.
pub fn validate(attrs: &CharacterAttributes) -> Result<(), ConfigError> {
    if attrs.base_speed <= 0.0 {
        return Err(ConfigError::Invalid(format!(
            "base_speed must be positive, got {}",
            attrs.base_speed
        )));
    }
    if attrs.sprint_speed_additive < 0.0 {
        return Err(ConfigError::Invalid(format!(
            "sprint_speed_additive must not be negative, got {}",
            attrs.sprint_speed_additive
        )));
    }
    if attrs.base_stamina <= 0.0 {
        return Err(ConfigError::Invalid(format!(
            "base_stamina must be positive, got {}",
            attrs.base_stamina
        )));
    }
    if attrs.stamina_drain_rate <= 0.0 || attrs.stamina_regen_rate <= 0.0 {
        return Err(ConfigError::Invalid(format!(
            "stamina rates must be positive, got drain {} / regen {}",
            attrs.stamina_drain_rate, attrs.stamina_regen_rate
        )));
    }
    if attrs.min_stamina_to_jump < 0.0 || attrs.min_stamina_to_jump > attrs.base_stamina {
        return Err(ConfigError::Invalid(format!(
            "min_stamina_to_jump must be within [0, {}], got {}",
            attrs.base_stamina, attrs.min_stamina_to_jump
        )));
    }
    if attrs.base_health <= 0 {
        return Err(ConfigError::Invalid(format!(
            "base_health must be positive, got {}",
            attrs.base_health
        )));
    }
    if attrs.starting_money < 0 {
        return Err(ConfigError::Invalid(format!(
            "starting_money must not be negative, got {}",
            attrs.starting_money
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(validate(&CharacterAttributes::default()).is_ok());
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let attrs: CharacterAttributes =
            serde_json::from_str(r#"{"base_speed": 600.0}"#).unwrap();
        assert_eq!(attrs.base_speed, 600.0);
        assert_eq!(attrs.base_stamina, 100.0);
        assert_eq!(attrs.starting_money, 350);
    }

    #[test]
    fn test_jump_cost_above_pool_rejected() {
        let attrs = CharacterAttributes {
            min_stamina_to_jump: 150.0,
            ..Default::default()
        };
        assert!(matches!(validate(&attrs), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_non_positive_rates_rejected() {
        let attrs = CharacterAttributes {
            stamina_regen_rate: 0.0,
            ..Default::default()
        };
        assert!(validate(&attrs).is_err());
    }

    #[test]
    fn test_missing_file_reports_io_error() {
        let err = load_attributes(Path::new("/nonexistent/attrs.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
