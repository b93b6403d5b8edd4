//! Validation thresholds.

use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};

/// Numeric thresholds applied to every screened photo.
///
/// All fields are public; unspecified fields fall back to the documented
/// defaults when deserializing (e.g. from a partial YAML file), and
/// struct-update syntax works for programmatic overrides:
///
/// ```rust
/// use photo_gate::core::ValidationConfig;
///
/// let config = ValidationConfig {
///     min_width: 640,
///     ..ValidationConfig::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
///
/// A config with an inverted min/max pair or a zero threshold is rejected by
/// [`validate`](ValidationConfig::validate), which every consumer calls at
/// construction time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Minimum acceptable width in pixels.
    pub min_width: u32,
    /// Minimum acceptable height in pixels.
    pub min_height: u32,
    /// Width above which a warning (not an error) is raised.
    pub max_width: u32,
    /// Height above which a warning (not an error) is raised.
    pub max_height: u32,
    /// Minimum acceptable file size in bytes.
    pub min_file_size: u64,
    /// Maximum acceptable file size in bytes.
    pub max_file_size: u64,
    /// Lower bound of the unremarkable width/height ratio range.
    pub min_aspect_ratio: f64,
    /// Upper bound of the unremarkable width/height ratio range.
    pub max_aspect_ratio: f64,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_width: 400,
            min_height: 300,
            max_width: 10_000,
            max_height: 10_000,
            min_file_size: 10_000,
            max_file_size: 10_485_760,
            min_aspect_ratio: 0.5,
            max_aspect_ratio: 3.0,
        }
    }
}

impl ValidationConfig {
    /// Check that the thresholds are internally consistent.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidThreshold`] if any dimension or size
    /// threshold is zero, any min exceeds its max, or an aspect-ratio bound
    /// is non-finite or non-positive.
    pub fn validate(&self) -> Result<()> {
        if self.min_width == 0 {
            return Err(ConfigError::invalid_threshold(
                "min_width",
                "must be greater than 0",
            ));
        }
        if self.min_height == 0 {
            return Err(ConfigError::invalid_threshold(
                "min_height",
                "must be greater than 0",
            ));
        }
        if self.min_width > self.max_width {
            return Err(ConfigError::invalid_threshold(
                "min_width",
                format!("{} exceeds max_width {}", self.min_width, self.max_width),
            ));
        }
        if self.min_height > self.max_height {
            return Err(ConfigError::invalid_threshold(
                "min_height",
                format!("{} exceeds max_height {}", self.min_height, self.max_height),
            ));
        }
        if self.min_file_size == 0 {
            return Err(ConfigError::invalid_threshold(
                "min_file_size",
                "must be greater than 0",
            ));
        }
        if self.min_file_size > self.max_file_size {
            return Err(ConfigError::invalid_threshold(
                "min_file_size",
                format!(
                    "{} exceeds max_file_size {}",
                    self.min_file_size, self.max_file_size
                ),
            ));
        }
        if !self.min_aspect_ratio.is_finite() || self.min_aspect_ratio <= 0.0 {
            return Err(ConfigError::invalid_threshold(
                "min_aspect_ratio",
                "must be a positive finite number",
            ));
        }
        if !self.max_aspect_ratio.is_finite() || self.max_aspect_ratio <= 0.0 {
            return Err(ConfigError::invalid_threshold(
                "max_aspect_ratio",
                "must be a positive finite number",
            ));
        }
        if self.min_aspect_ratio > self.max_aspect_ratio {
            return Err(ConfigError::invalid_threshold(
                "min_aspect_ratio",
                format!(
                    "{} exceeds max_aspect_ratio {}",
                    self.min_aspect_ratio, self.max_aspect_ratio
                ),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(ValidationConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_min_width_rejected() {
        let config = ValidationConfig {
            min_width: 0,
            ..ValidationConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidThreshold { field: "min_width", .. })
        ));
    }

    #[test]
    fn inverted_dimension_pair_rejected() {
        let config = ValidationConfig {
            min_width: 20_000,
            ..ValidationConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn inverted_file_size_pair_rejected() {
        let config = ValidationConfig {
            min_file_size: 20_000_000,
            ..ValidationConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidThreshold { field: "min_file_size", .. })
        ));
    }

    #[test]
    fn non_finite_aspect_ratio_rejected() {
        let config = ValidationConfig {
            min_aspect_ratio: f64::NAN,
            ..ValidationConfig::default()
        };
        assert!(config.validate().is_err());

        let config = ValidationConfig {
            max_aspect_ratio: f64::INFINITY,
            ..ValidationConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn inverted_aspect_ratio_pair_rejected() {
        let config = ValidationConfig {
            min_aspect_ratio: 4.0,
            max_aspect_ratio: 2.0,
            ..ValidationConfig::default()
        };
        assert!(config.validate().is_err());
    }

}
