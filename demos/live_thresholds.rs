//! Tuning thresholds at runtime without restarting the service.
//!
//! Run with: cargo run --example live_thresholds

use photo_gate::prelude::*;

fn main() -> Result<()> {
    let live = LiveConfig::new(ValidationConfig::default())?;

    let mut upload = vec![0xFF, 0xD8, 0xFF, 0xE0];
    upload.resize(6_000, 0);

    // 6000 bytes is under the default 10000-byte floor.
    let report = live.validator().validate(&upload);
    println!("before tuning: valid={}", report.valid);
    for error in &report.errors {
        println!("  error: {}", error);
    }

    // Relax the floor; the next snapshot accepts the same upload.
    live.update(ValidationConfig {
        min_file_size: 5_000,
        ..ValidationConfig::default()
    })?;

    let report = live.validator().validate(&upload);
    println!("after tuning: valid={}", report.valid);

    // Inconsistent thresholds are rejected; the current ones stay in effect.
    let rejected = live.update(ValidationConfig {
        min_file_size: 9_000,
        max_file_size: 1_000,
        ..ValidationConfig::default()
    });
    println!("bad update rejected: {}", rejected.is_err());
    println!("floor still: {} bytes", live.get().min_file_size);

    Ok(())
}
