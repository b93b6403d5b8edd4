//! Error types for photo-gate.

/// Result type alias for photo-gate operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur when constructing or loading validation thresholds.
///
/// Note that [`validate`](crate::core::ImageQualityValidator::validate) itself
/// never returns an error: malformed image content is reported as data inside
/// the [`ValidationResult`](crate::core::ValidationResult). These errors cover
/// the configuration boundary only.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A threshold value is out of range or a min/max pair is inverted.
    #[error("Invalid threshold '{field}': {reason}")]
    InvalidThreshold {
        /// The threshold field name
        field: &'static str,
        /// The reason why it's invalid
        reason: String,
    },

    /// Failed to load thresholds from a file or the environment.
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    /// Failed to deserialize thresholds.
    #[error("Failed to deserialize configuration: {0}")]
    DeserializationError(String),
}

impl ConfigError {
    /// Create an invalid threshold error.
    pub fn invalid_threshold(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidThreshold {
            field,
            reason: reason.into(),
        }
    }
}

/// Errors raised by a [`MetadataProbe`](crate::probe::MetadataProbe)
/// implementation.
///
/// The validator swallows these: a failed probe demotes the call to the
/// signature-sniffing path instead of surfacing an error to the caller.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    /// The probe could not parse the buffer as an image header.
    #[error("Could not read image header: {0}")]
    Unreadable(String),

    /// No decoding capability is available in this build or deployment.
    #[error("No decoding capability available")]
    Unavailable,
}
