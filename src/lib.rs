//! # photo-gate
//!
//! Upload-time quality screening for marketplace listing photos with graceful
//! decoder fallback.
//!
//! ## Overview
//!
//! `photo-gate` answers one question for an upload pipeline: is this byte
//! buffer an acceptable listing photo? It combines:
//! - Threshold-driven checks (file size, dimensions, aspect ratio) against a
//!   [`ValidationConfig`](core::ValidationConfig)
//! - A swappable decoding capability ([`probe::MetadataProbe`]) for metadata
//!   extraction, with a binary-signature fallback when decoding is
//!   unavailable or fails
//! - Verdicts returned as data: blocking `errors`, advisory `warnings`, and
//!   extracted [`ImageMetadata`](core::ImageMetadata) — never a panic or an
//!   `Err` for malformed content
//!
//! ## Quick Start
//!
//! ```rust
//! use photo_gate::prelude::*;
//!
//! # fn example() -> photo_gate::error::Result<()> {
//! let validator = ImageQualityValidator::new(ValidationConfig::default())?;
//!
//! // Garbage bytes: rejected, but never an Err.
//! let report = validator.validate(&[0x00, 0x01, 0x02, 0x03, 0x04]);
//! assert!(!report.valid);
//! assert_eq!(report.metadata.size, 5);
//!
//! // Batches aggregate per-item verdicts with 1-based indexes.
//! let batch = BatchValidator::new(ValidationConfig::default())?;
//! let outcome = batch.validate_all([&[0u8; 4][..], &[1u8; 4][..]]);
//! assert!(!outcome.valid);
//! assert_eq!(outcome.results.len(), 2);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Features
//!
//! - **Decoder fallback**: absence or failure of the decoder is a
//!   reduced-fidelity mode, not a validation error
//! - **Threshold loading**: file and environment overrides via
//!   [`ConfigLoader`](core::ConfigLoader)
//! - **Live tuning**: lock-free hot-swap of thresholds via
//!   [`LiveConfig`](core::LiveConfig)
//! - **Pure calls**: no shared mutable state; batches can be sharded across
//!   threads freely
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! photo-gate = { version = "0.1", features = ["tracing"] }
//! ```
//!
//! - `decoder` (default): metadata extraction through the `image` crate.
//!   Disable for signature-sniffing-only builds.
//! - `tracing`: debug events on probe fallback and threshold swaps.

#![warn(missing_docs, rust_2024_compatibility)]
#![deny(unsafe_code)]

pub mod core;
pub mod error;
pub mod probe;

/// Convenient re-exports for common usage patterns.
pub mod prelude {
    pub use crate::core::{
        BatchValidationResult, BatchValidator, ConfigLoader, ImageMetadata, ImageQualityValidator,
        LiveConfig, PhotoFormat, ValidationConfig, ValidationResult,
    };
    pub use crate::error::{ConfigError, ProbeError, Result};
    pub use crate::probe::{MetadataProbe, ProbedImage};
}
