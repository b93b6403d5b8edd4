//! Hot-swappable thresholds for long-running services.

use crate::core::{ImageQualityValidator, ValidationConfig};
use crate::error::Result;
use arc_swap::ArcSwap;
use std::sync::Arc;

/// Lock-free handle to the current validation thresholds.
///
/// A moderation service can tighten or relax thresholds at runtime without
/// redeploying: readers snapshot the current config atomically, writers swap
/// in a validated replacement. Invalid replacements are rejected and the old
/// thresholds stay in effect.
///
/// # Examples
///
/// ```rust
/// use photo_gate::prelude::*;
///
/// # fn example() -> Result<()> {
/// let live = LiveConfig::new(ValidationConfig::default())?;
///
/// live.update(ValidationConfig {
///     min_width: 640,
///     ..ValidationConfig::default()
/// })?;
/// assert_eq!(live.get().min_width, 640);
///
/// let validator = live.validator();
/// assert_eq!(validator.config().min_width, 640);
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
pub struct LiveConfig {
    current: ArcSwap<ValidationConfig>,
}

impl LiveConfig {
    /// Create a handle with an initial set of thresholds.
    ///
    /// # Errors
    ///
    /// Returns an error if the thresholds are internally inconsistent.
    pub fn new(config: ValidationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            current: ArcSwap::from_pointee(config),
        })
    }

    /// Get a reference-counted snapshot of the current thresholds.
    ///
    /// Lock-free; readers never block writers or other readers.
    pub fn get(&self) -> Arc<ValidationConfig> {
        self.current.load_full()
    }

    /// Atomically replace the thresholds.
    ///
    /// # Errors
    ///
    /// Returns an error if the replacement is internally inconsistent; the
    /// previous thresholds remain in effect in that case.
    pub fn update(&self, config: ValidationConfig) -> Result<()> {
        config.validate()?;
        #[cfg(feature = "tracing")]
        tracing::debug!("swapping validation thresholds");
        self.current.store(Arc::new(config));
        Ok(())
    }

    /// Build an item validator from the current thresholds.
    ///
    /// The validator holds its own copy; a later [`update`](Self::update)
    /// does not retroactively change it. Snapshot per request (construction
    /// is cheap) to pick up tuning promptly.
    pub fn validator(&self) -> ImageQualityValidator {
        ImageQualityValidator::from_validated(self.get().as_ref().clone())
    }
}
