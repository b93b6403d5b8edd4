//! Threshold loading from files and environment variables.

use crate::core::ValidationConfig;
use crate::error::{ConfigError, Result};
use std::path::{Path, PathBuf};

/// Loads [`ValidationConfig`] with standard precedence: built-in defaults,
/// then an optional file, then optional environment overrides.
///
/// Supported file formats: YAML (.yaml, .yml), TOML (.toml), JSON (.json) —
/// detected by extension. Files may be partial; unspecified thresholds keep
/// their defaults. The merged result is threshold-validated before it is
/// returned.
///
/// # Examples
///
/// ```rust,no_run
/// use photo_gate::core::ConfigLoader;
///
/// # fn example() -> photo_gate::error::Result<()> {
/// // PHOTO_GATE_MIN_WIDTH=800 overrides the file, which overrides defaults.
/// let _config = ConfigLoader::new()
///     .with_file("config/screening.yaml")
///     .with_env_overrides("PHOTO_GATE")
///     .load()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    file: Option<PathBuf>,
    env_prefix: Option<String>,
}

impl ConfigLoader {
    /// Create a loader with no sources; [`load`](Self::load) then yields the
    /// defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a threshold file with automatic format detection.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        self.file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Add environment variable overrides with the given prefix.
    ///
    /// `PREFIX_MIN_WIDTH=800` overrides `min_width`. Environment variables
    /// have the highest priority.
    pub fn with_env_overrides(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self
    }

    /// Merge all sources and validate the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, a field fails
    /// to deserialize, or the merged thresholds are internally inconsistent.
    pub fn load(&self) -> Result<ValidationConfig> {
        let defaults = config::Config::try_from(&ValidationConfig::default())
            .map_err(|e| ConfigError::LoadError(format!("Failed to seed defaults: {}", e)))?;

        let mut builder = config::Config::builder().add_source(defaults);

        if let Some(path) = &self.file {
            builder = builder.add_source(config::File::from(path.as_path()));
        }

        if let Some(prefix) = &self.env_prefix {
            builder = builder.add_source(
                config::Environment::with_prefix(prefix)
                    .separator("__")
                    .try_parsing(true),
            );
        }

        let merged = builder
            .build()
            .map_err(|e| ConfigError::LoadError(e.to_string()))?;

        let config: ValidationConfig = merged
            .try_deserialize()
            .map_err(|e| ConfigError::DeserializationError(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }
}
