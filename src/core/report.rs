//! Validation reports and extracted metadata.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Image formats accepted for listing photos.
///
/// Anything the pipeline cannot positively identify as one of the accepted
/// formats is carried as [`Unknown`](PhotoFormat::Unknown); the detected
/// name (e.g. `gif`) still appears verbatim in the unsupported-format error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhotoFormat {
    /// JPEG / JFIF.
    Jpeg,
    /// PNG.
    Png,
    /// WebP (RIFF container with a `WEBP` subtype).
    WebP,
    /// Unrecognized or unsupported format.
    Unknown,
}

impl PhotoFormat {
    /// Map a detected format name onto the accepted set, case-insensitively.
    /// `jpg` and `jpeg` both map to [`PhotoFormat::Jpeg`].
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "jpeg" | "jpg" => Self::Jpeg,
            "png" => Self::Png,
            "webp" => Self::WebP,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for PhotoFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Jpeg => "jpeg",
            Self::Png => "png",
            Self::WebP => "webp",
            Self::Unknown => "unknown",
        };
        write!(f, "{}", name)
    }
}

/// Metadata extracted from a screened buffer.
///
/// `size` is always the exact buffer length, whichever path produced the
/// report. Dimensions and the derived aspect ratio are present only when a
/// probe resolved them; the signature-sniffing path never fills them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageMetadata {
    /// Width in pixels, if resolved.
    pub width: Option<u32>,
    /// Height in pixels, if resolved.
    pub height: Option<u32>,
    /// Detected format, mapped onto the accepted set.
    pub format: PhotoFormat,
    /// Exact buffer length in bytes.
    pub size: u64,
    /// Width divided by height, rounded to two decimals. Present only when
    /// both dimensions are known and the height is non-zero.
    pub aspect_ratio: Option<f64>,
}

/// Verdict for a single screened buffer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// True iff `errors` is empty. Warnings do not affect validity.
    pub valid: bool,
    /// Blocking issues, in check order.
    pub errors: Vec<String>,
    /// Advisory issues, in check order.
    pub warnings: Vec<String>,
    /// Metadata extracted during screening.
    pub metadata: ImageMetadata,
}

impl ValidationResult {
    /// Assemble a report. `valid` is derived, never passed in, so the
    /// `valid == errors.is_empty()` invariant holds by construction.
    pub(crate) fn new(
        errors: Vec<String>,
        warnings: Vec<String>,
        metadata: ImageMetadata,
    ) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
            warnings,
            metadata,
        }
    }
}

/// Aggregated verdict for an ordered sequence of buffers.
///
/// `results` is index-aligned with the input; the flattened `errors` and
/// `warnings` prefix each item's messages with its 1-based position, e.g.
/// `"Image 2: File too small: 0.0KB (minimum 9.8KB)"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchValidationResult {
    /// True iff every per-item result is valid.
    pub valid: bool,
    /// One entry per item with errors, prefixed with the item's position.
    pub errors: Vec<String>,
    /// One entry per item with warnings, prefixed with the item's position.
    pub warnings: Vec<String>,
    /// Per-item reports, in input order.
    pub results: Vec<ValidationResult>,
}
