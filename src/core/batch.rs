//! Batch aggregation over ordered photo sequences.

use crate::core::report::BatchValidationResult;
use crate::core::{ImageQualityValidator, ValidationConfig};
use crate::error::Result;

/// Runs the item validator over an ordered sequence of buffers and folds the
/// per-item verdicts into one report.
///
/// Items are validated independently — each call is pure, so callers needing
/// throughput can shard a batch across threads and reassemble in input
/// order. `validate_all` itself iterates sequentially; input order is
/// preserved in `results` either way.
///
/// # Examples
///
/// ```rust
/// use photo_gate::prelude::*;
///
/// # fn example() -> Result<()> {
/// let batch = BatchValidator::new(ValidationConfig::default())?;
/// let outcome = batch.validate_all(Vec::<Vec<u8>>::new());
/// assert!(outcome.valid);
/// assert!(outcome.results.is_empty());
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
#[derive(Clone)]
pub struct BatchValidator {
    inner: ImageQualityValidator,
}

impl BatchValidator {
    /// Create a batch validator with the default decoding capability.
    ///
    /// # Errors
    ///
    /// Returns an error if the thresholds are internally inconsistent.
    pub fn new(config: ValidationConfig) -> Result<Self> {
        Ok(Self {
            inner: ImageQualityValidator::new(config)?,
        })
    }

    /// Wrap an existing item validator (custom probe, no decoder, etc.).
    pub fn with_validator(validator: ImageQualityValidator) -> Self {
        Self { inner: validator }
    }

    /// The item validator used for each buffer.
    pub fn validator(&self) -> &ImageQualityValidator {
        &self.inner
    }

    /// Validate every buffer and aggregate the verdicts.
    ///
    /// Flattened `errors`/`warnings` entries are prefixed with the item's
    /// 1-based position, with the item's own messages joined by `", "`. An
    /// empty input yields a valid, empty report.
    pub fn validate_all<I, B>(&self, buffers: I) -> BatchValidationResult
    where
        I: IntoIterator<Item = B>,
        B: AsRef<[u8]>,
    {
        let results: Vec<_> = buffers
            .into_iter()
            .map(|buffer| self.inner.validate(buffer.as_ref()))
            .collect();

        let mut errors = Vec::new();
        let mut warnings = Vec::new();
        for (index, result) in results.iter().enumerate() {
            if !result.errors.is_empty() {
                errors.push(format!("Image {}: {}", index + 1, result.errors.join(", ")));
            }
            if !result.warnings.is_empty() {
                warnings.push(format!(
                    "Image {}: {}",
                    index + 1,
                    result.warnings.join(", ")
                ));
            }
        }

        BatchValidationResult {
            valid: results.iter().all(|result| result.valid),
            errors,
            warnings,
            results,
        }
    }
}
