//! Screening a single upload and a batch.
//!
//! Run with: cargo run --example screen_upload

use photo_gate::prelude::*;

fn main() -> Result<()> {
    let validator = ImageQualityValidator::new(ValidationConfig::default())?;

    // A buffer that only carries a JPEG signature: the decoder cannot parse
    // it, so screening degrades to size and signature checks.
    let mut sparse_jpeg = vec![0xFF, 0xD8, 0xFF, 0xE0];
    sparse_jpeg.resize(15_000, 0);

    let report = validator.validate(&sparse_jpeg);
    println!("single upload: valid={}", report.valid);
    println!("  format: {}", report.metadata.format);
    println!("  size:   {} bytes", report.metadata.size);

    // Garbage bytes are rejected as data, never as an Err.
    let report = validator.validate(&[0x01, 0x02, 0x03]);
    println!("garbage upload: valid={}", report.valid);
    for error in &report.errors {
        println!("  error: {}", error);
    }

    // Batches aggregate per-item verdicts with 1-based indexes.
    let batch = BatchValidator::new(ValidationConfig::default())?;
    let tiny = vec![0xFF, 0xD8, 0x00];
    let outcome = batch.validate_all([sparse_jpeg.as_slice(), tiny.as_slice()]);
    println!("batch: valid={}", outcome.valid);
    for error in &outcome.errors {
        println!("  {}", error);
    }

    Ok(())
}
