//! The item validator: metadata path plus signature-sniffing fallback.

use crate::core::report::{ImageMetadata, PhotoFormat, ValidationResult};
use crate::core::ValidationConfig;
use crate::error::Result;
use crate::probe::{signature, MetadataProbe, ProbedImage};
use std::sync::Arc;

#[cfg(feature = "decoder")]
use crate::probe::DecoderProbe;

/// Width/height ratios within this distance of 1.0 count as square.
const SQUARE_RATIO_TOLERANCE: f64 = 0.1;
/// Square images narrower than this get the consider-landscape warning.
const SQUARE_SMALL_WIDTH: u32 = 800;
/// Below this many bytes per pixel the compression heuristic fires. A coarse
/// proxy, not a real quality metric.
const LOW_DENSITY_BYTES_PER_PIXEL: f64 = 0.5;

/// Formats accepted for listing photos, by detected name.
const ACCEPTED_FORMAT_NAMES: [&str; 4] = ["jpeg", "jpg", "png", "webp"];

/// Screens a single photo buffer against the configured thresholds.
///
/// The validator holds an optional [`MetadataProbe`]. When the probe is
/// present and can parse a buffer, screening runs the full metadata checks;
/// when it is absent or fails on a given buffer, screening degrades to
/// file-size and binary-signature checks. Probe trouble is never surfaced as
/// a validation error — absence of the decoder is a reduced-fidelity mode.
///
/// Each call is a pure computation over its inputs; the validator is `Clone`
/// and safe to share across threads.
///
/// # Examples
///
/// ```rust
/// use photo_gate::prelude::*;
///
/// # fn example() -> Result<()> {
/// let validator = ImageQualityValidator::new(ValidationConfig::default())?;
/// let report = validator.validate(&[0u8; 32]);
/// assert!(!report.valid);
/// assert_eq!(report.metadata.size, 32);
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
#[derive(Clone)]
pub struct ImageQualityValidator {
    config: ValidationConfig,
    probe: Option<Arc<dyn MetadataProbe>>,
}

impl ImageQualityValidator {
    /// Create a validator with the default decoding capability.
    ///
    /// With the `decoder` feature enabled this installs the `image`-crate
    /// probe; without it, the validator starts in fallback mode, identical
    /// to [`without_decoder`](Self::without_decoder).
    ///
    /// # Errors
    ///
    /// Returns an error if the thresholds are internally inconsistent.
    pub fn new(config: ValidationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_validated(config))
    }

    /// Create a validator with no decoding capability.
    ///
    /// Every call runs the size and signature checks only.
    ///
    /// # Errors
    ///
    /// Returns an error if the thresholds are internally inconsistent.
    pub fn without_decoder(config: ValidationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            probe: None,
        })
    }

    /// Create a validator with an injected decoding capability.
    ///
    /// # Errors
    ///
    /// Returns an error if the thresholds are internally inconsistent.
    pub fn with_probe(config: ValidationConfig, probe: Arc<dyn MetadataProbe>) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            probe: Some(probe),
        })
    }

    /// Internal constructor for pre-validated configs.
    pub(crate) fn from_validated(config: ValidationConfig) -> Self {
        #[cfg(feature = "decoder")]
        let probe: Option<Arc<dyn MetadataProbe>> = Some(Arc::new(DecoderProbe::new()));
        #[cfg(not(feature = "decoder"))]
        let probe: Option<Arc<dyn MetadataProbe>> = None;

        Self { config, probe }
    }

    /// The thresholds this validator screens against.
    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Screen a photo buffer.
    ///
    /// Always returns a report; malformed, truncated, or empty buffers
    /// produce error entries, never a panic or an `Err`.
    pub fn validate(&self, buffer: &[u8]) -> ValidationResult {
        if let Some(probe) = &self.probe {
            match probe.probe(buffer) {
                Ok(probed) => return self.metadata_verdict(buffer, probed),
                Err(_err) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(
                        probe = probe.name(),
                        error = %_err,
                        "metadata probe failed, falling back to signature checks"
                    );
                }
            }
        }
        self.basic_verdict(buffer)
    }

    /// Full checks over probed metadata.
    fn metadata_verdict(&self, buffer: &[u8], probed: ProbedImage) -> ValidationResult {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();
        let size = buffer.len() as u64;

        self.check_file_size(size, &mut errors);

        let dimensions = match (probed.width, probed.height) {
            (Some(w), Some(h)) if w > 0 && h > 0 => Some((w, h)),
            _ => None,
        };

        match dimensions {
            Some((width, height)) => {
                if width < self.config.min_width || height < self.config.min_height {
                    errors.push(format!(
                        "Image dimensions too small: {}x{} (minimum {}x{})",
                        width, height, self.config.min_width, self.config.min_height
                    ));
                }
                if width > self.config.max_width || height > self.config.max_height {
                    warnings.push(format!("Image dimensions very large: {}x{}", width, height));
                }

                let ratio = f64::from(width) / f64::from(height);
                if ratio < self.config.min_aspect_ratio || ratio > self.config.max_aspect_ratio {
                    warnings.push(format!(
                        "Unusual aspect ratio: {:.2} (expected {:.2} to {:.2})",
                        ratio, self.config.min_aspect_ratio, self.config.max_aspect_ratio
                    ));
                }
                if (ratio - 1.0).abs() < SQUARE_RATIO_TOLERANCE && width < SQUARE_SMALL_WIDTH {
                    warnings.push(
                        "Image appears square and small, consider landscape orientation"
                            .to_string(),
                    );
                }
            }
            None => {
                warnings.push(
                    "Could not determine image dimensions, file may be corrupted".to_string(),
                );
            }
        }

        let format_name = probed.format.as_deref().unwrap_or("unknown");
        if !ACCEPTED_FORMAT_NAMES
            .iter()
            .any(|accepted| accepted.eq_ignore_ascii_case(format_name))
        {
            errors.push(format!("Unsupported format: {}", format_name));
        }

        if let Some((width, height)) = dimensions {
            let pixels = u64::from(width) * u64::from(height);
            let bytes_per_pixel = size as f64 / pixels as f64;
            if bytes_per_pixel < LOW_DENSITY_BYTES_PER_PIXEL {
                warnings.push("Image may be low quality or heavily compressed".to_string());
            }
        }

        let metadata = ImageMetadata {
            width: probed.width,
            height: probed.height,
            format: PhotoFormat::from_name(format_name),
            size,
            aspect_ratio: dimensions
                .map(|(width, height)| round2(f64::from(width) / f64::from(height))),
        };

        ValidationResult::new(errors, warnings, metadata)
    }

    /// Size and signature checks only; no warnings in this path.
    fn basic_verdict(&self, buffer: &[u8]) -> ValidationResult {
        let mut errors = Vec::new();
        let size = buffer.len() as u64;

        self.check_file_size(size, &mut errors);

        let format = signature::sniff_format(buffer);
        if format == PhotoFormat::Unknown {
            errors.push("Invalid image format".to_string());
        }

        let metadata = ImageMetadata {
            width: None,
            height: None,
            format,
            size,
            aspect_ratio: None,
        };

        ValidationResult::new(errors, Vec::new(), metadata)
    }

    fn check_file_size(&self, size: u64, errors: &mut Vec<String>) {
        if size < self.config.min_file_size {
            errors.push(format!(
                "File too small: {} (minimum {})",
                format_kb(size),
                format_kb(self.config.min_file_size)
            ));
        } else if size > self.config.max_file_size {
            errors.push(format!(
                "File too large: {} (maximum {})",
                format_mb(size),
                format_mb(self.config.max_file_size)
            ));
        }
    }
}

fn format_kb(bytes: u64) -> String {
    format!("{:.1}KB", bytes as f64 / 1024.0)
}

fn format_mb(bytes: u64) -> String {
    format!("{:.1}MB", bytes as f64 / (1024.0 * 1024.0))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProbeError;

    /// Probe that reports fixed metadata, regardless of input.
    struct StubProbe {
        width: Option<u32>,
        height: Option<u32>,
        format: Option<&'static str>,
    }

    impl MetadataProbe for StubProbe {
        fn probe(&self, _buffer: &[u8]) -> std::result::Result<ProbedImage, ProbeError> {
            Ok(ProbedImage {
                width: self.width,
                height: self.height,
                format: self.format.map(String::from),
            })
        }

        fn name(&self) -> &'static str {
            "stub"
        }
    }

    /// Probe that always fails.
    struct FailingProbe;

    impl MetadataProbe for FailingProbe {
        fn probe(&self, _buffer: &[u8]) -> std::result::Result<ProbedImage, ProbeError> {
            Err(ProbeError::Unavailable)
        }

        fn name(&self) -> &'static str {
            "failing"
        }
    }

    fn stub_validator(
        width: Option<u32>,
        height: Option<u32>,
        format: Option<&'static str>,
    ) -> ImageQualityValidator {
        ImageQualityValidator::with_probe(
            ValidationConfig::default(),
            Arc::new(StubProbe {
                width,
                height,
                format,
            }),
        )
        .unwrap()
    }

    #[test]
    fn invalid_config_rejected_at_construction() {
        let config = ValidationConfig {
            min_file_size: 100,
            max_file_size: 50,
            ..ValidationConfig::default()
        };
        assert!(ImageQualityValidator::new(config.clone()).is_err());
        assert!(ImageQualityValidator::without_decoder(config).is_err());
    }

    #[test]
    fn undersized_dimensions_are_an_error() {
        let validator = stub_validator(Some(200), Some(150), Some("jpeg"));
        let report = validator.validate(&[0u8; 15_000]);

        assert!(!report.valid);
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("200x150"));
        assert!(report.errors[0].contains("400x300"));
        assert_eq!(report.metadata.width, Some(200));
        assert_eq!(report.metadata.aspect_ratio, Some(1.33));
    }

    #[test]
    fn oversized_dimensions_are_a_warning_not_an_error() {
        let validator = stub_validator(Some(12_000), Some(9_000), Some("jpeg"));
        // 12000x9000 = 108M pixels; stay above 0.5 B/px is impossible here,
        // so assert on the large-dimension warning specifically.
        let report = validator.validate(&[0u8; 15_000]);

        assert!(report.valid);
        assert!(report
            .warnings
            .iter()
            .any(|w| w.contains("very large") && w.contains("12000x9000")));
    }

    #[test]
    fn aspect_ratio_outside_bounds_warns_with_two_decimals() {
        let validator = stub_validator(Some(3_500), Some(1_000), Some("jpeg"));
        let report = validator.validate(&vec![0u8; 2_000_000]);

        assert!(report.valid);
        assert!(report.warnings.iter().any(|w| w.contains("3.50")));
        assert_eq!(report.metadata.aspect_ratio, Some(3.5));
    }

    #[test]
    fn square_and_small_triggers_landscape_hint() {
        let validator = stub_validator(Some(500), Some(520), Some("jpeg"));
        let report = validator.validate(&vec![0u8; 200_000]);

        assert!(report.valid);
        assert!(report
            .warnings
            .iter()
            .any(|w| w.contains("consider landscape")));
    }

    #[test]
    fn square_but_wide_enough_does_not_trigger_hint() {
        let validator = stub_validator(Some(1_000), Some(1_000), Some("png"));
        let report = validator.validate(&vec![0u8; 600_000]);

        assert!(report.valid);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn low_byte_density_warns() {
        // 20000 bytes over a megapixel is 0.02 bytes per pixel.
        let validator = stub_validator(Some(1_000), Some(1_000), Some("png"));
        let report = validator.validate(&[0u8; 20_000]);

        assert!(report.valid);
        assert_eq!(
            report.warnings,
            vec!["Image may be low quality or heavily compressed".to_string()]
        );
    }

    #[test]
    fn unresolved_dimensions_warn_about_corruption() {
        let validator = stub_validator(None, None, Some("jpeg"));
        let report = validator.validate(&[0u8; 15_000]);

        assert!(report.valid);
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("may be corrupted"));
        assert_eq!(report.metadata.aspect_ratio, None);
    }

    #[test]
    fn unsupported_format_names_the_detected_format() {
        let validator = stub_validator(Some(1_000), Some(800), Some("gif"));
        let report = validator.validate(&vec![0u8; 600_000]);

        assert!(!report.valid);
        assert_eq!(report.errors, vec!["Unsupported format: gif".to_string()]);
        assert_eq!(report.metadata.format, PhotoFormat::Unknown);
    }

    #[test]
    fn missing_format_reports_unknown() {
        let validator = stub_validator(Some(1_000), Some(800), None);
        let report = validator.validate(&vec![0u8; 600_000]);

        assert_eq!(report.errors, vec!["Unsupported format: unknown".to_string()]);
    }

    #[test]
    fn format_name_matching_is_case_insensitive() {
        let validator = stub_validator(Some(1_000), Some(800), Some("JPEG"));
        let report = validator.validate(&vec![0u8; 600_000]);
        assert!(report.valid);
    }

    #[test]
    fn probe_failure_falls_back_to_signature_checks() {
        let validator =
            ImageQualityValidator::with_probe(ValidationConfig::default(), Arc::new(FailingProbe))
                .unwrap();

        let mut buffer = vec![0xFF, 0xD8, 0xFF, 0xE0];
        buffer.resize(15_000, 0);
        let report = validator.validate(&buffer);

        assert!(report.valid);
        assert_eq!(report.metadata.format, PhotoFormat::Jpeg);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn basic_path_flags_size_and_signature() {
        let validator =
            ImageQualityValidator::without_decoder(ValidationConfig::default()).unwrap();
        let report = validator.validate(&[0x01, 0x02, 0x03, 0x04, 0x05]);

        assert!(!report.valid);
        assert_eq!(report.errors.len(), 2);
        assert!(report.errors[0].contains("too small"));
        assert_eq!(report.errors[1], "Invalid image format");
        assert_eq!(report.metadata.size, 5);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn basic_path_accepts_recognized_signature_of_valid_size() {
        let validator =
            ImageQualityValidator::without_decoder(ValidationConfig::default()).unwrap();
        let mut buffer = vec![0xFF, 0xD8, 0xFF, 0xE0];
        buffer.resize(15_000, 0);
        let report = validator.validate(&buffer);

        assert!(report.valid);
        assert!(report.errors.is_empty());
        assert_eq!(report.metadata.format, PhotoFormat::Jpeg);
        assert_eq!(report.metadata.size, 15_000);
        assert_eq!(report.metadata.width, None);
    }

    #[test]
    fn empty_buffer_is_too_small_and_unrecognized() {
        let validator =
            ImageQualityValidator::without_decoder(ValidationConfig::default()).unwrap();
        let report = validator.validate(&[]);

        assert!(!report.valid);
        assert_eq!(report.errors.len(), 2);
        assert_eq!(report.metadata.size, 0);
    }

    #[test]
    fn oversized_file_is_an_error() {
        let config = ValidationConfig {
            max_file_size: 1_000,
            min_file_size: 10,
            ..ValidationConfig::default()
        };
        let validator = ImageQualityValidator::without_decoder(config).unwrap();
        let mut buffer = vec![0xFF, 0xD8];
        buffer.resize(2_048, 0);
        let report = validator.validate(&buffer);

        assert!(!report.valid);
        assert!(report.errors[0].contains("too large"));
        assert!(report.errors[0].contains("0.0MB")); // 2048 bytes, one decimal
    }

    #[test]
    fn size_messages_carry_one_decimal_kb_and_mb() {
        assert_eq!(format_kb(5), "0.0KB");
        assert_eq!(format_kb(10_000), "9.8KB");
        assert_eq!(format_mb(10_485_760), "10.0MB");
        assert_eq!(format_mb(13_107_200), "12.5MB");
    }

    #[test]
    fn ratio_rounding_is_two_decimals() {
        assert_eq!(round2(200.0 / 150.0), 1.33);
        assert_eq!(round2(1.0), 1.0);
        assert_eq!(round2(3.456), 3.46);
    }
}
