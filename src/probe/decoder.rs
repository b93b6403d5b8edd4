//! Decoder-backed probe using the `image` crate.

use crate::error::ProbeError;
use crate::probe::{MetadataProbe, ProbedImage};
use image::ImageReader;
use std::io::Cursor;

/// Probe that extracts dimensions and format through the `image` crate.
///
/// Only the header is read; no pixel data is decoded. Truncated or
/// unrecognized buffers fail the probe, which the validator demotes to the
/// signature-sniffing path.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecoderProbe;

impl DecoderProbe {
    /// Create a new decoder probe.
    pub fn new() -> Self {
        Self
    }
}

impl MetadataProbe for DecoderProbe {
    fn probe(&self, buffer: &[u8]) -> Result<ProbedImage, ProbeError> {
        let reader = ImageReader::new(Cursor::new(buffer))
            .with_guessed_format()
            .map_err(|e| ProbeError::Unreadable(e.to_string()))?;

        let format = reader.format().map(format_name);

        let (width, height) = reader
            .into_dimensions()
            .map_err(|e| ProbeError::Unreadable(e.to_string()))?;

        Ok(ProbedImage {
            width: Some(width),
            height: Some(height),
            format,
        })
    }

    fn name(&self) -> &'static str {
        "image-crate"
    }
}

fn format_name(format: image::ImageFormat) -> String {
    // "image/jpeg" -> "jpeg"; keeps unsupported names (gif, bmp) intact for
    // the error message.
    format
        .to_mime_type()
        .trim_start_matches("image/")
        .to_string()
}
