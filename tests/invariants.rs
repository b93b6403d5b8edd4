//! Property tests for the screening contract.

use photo_gate::prelude::*;
use proptest::prelude::*;
use std::sync::Arc;

/// Probe that reports fixed metadata, regardless of input.
struct StubProbe {
    width: u32,
    height: u32,
}

impl MetadataProbe for StubProbe {
    fn probe(&self, _buffer: &[u8]) -> std::result::Result<ProbedImage, ProbeError> {
        Ok(ProbedImage {
            width: Some(self.width),
            height: Some(self.height),
            format: Some("jpeg".to_string()),
        })
    }

    fn name(&self) -> &'static str {
        "stub"
    }
}

proptest! {
    #[test]
    fn metadata_size_always_equals_buffer_length(
        buffer in proptest::collection::vec(any::<u8>(), 0..4096)
    ) {
        let validator =
            ImageQualityValidator::new(ValidationConfig::default()).unwrap();
        let report = validator.validate(&buffer);
        prop_assert_eq!(report.metadata.size, buffer.len() as u64);
    }

    #[test]
    fn validity_always_mirrors_error_list(
        buffer in proptest::collection::vec(any::<u8>(), 0..4096)
    ) {
        let validator =
            ImageQualityValidator::new(ValidationConfig::default()).unwrap();
        let report = validator.validate(&buffer);
        prop_assert_eq!(report.valid, report.errors.is_empty());
    }

    #[test]
    fn repeated_validation_is_idempotent(
        buffer in proptest::collection::vec(any::<u8>(), 0..4096)
    ) {
        let validator =
            ImageQualityValidator::new(ValidationConfig::default()).unwrap();
        let first = validator.validate(&buffer);
        let second = validator.validate(&buffer);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn undersized_buffers_fail_identically_on_both_paths(
        len in 0usize..9_000
    ) {
        let buffer = vec![0u8; len];

        let sniffing =
            ImageQualityValidator::without_decoder(ValidationConfig::default())
                .unwrap()
                .validate(&buffer);
        let probed = ImageQualityValidator::with_probe(
            ValidationConfig::default(),
            Arc::new(StubProbe { width: 2_000, height: 1_000 }),
        )
        .unwrap()
        .validate(&buffer);

        prop_assert!(!sniffing.valid);
        prop_assert!(!probed.valid);
        // Same size-derived text regardless of path.
        prop_assert_eq!(&sniffing.errors[0], &probed.errors[0]);
        prop_assert!(sniffing.errors[0].contains("too small"));
    }

    #[test]
    fn batch_results_align_with_input(
        lengths in proptest::collection::vec(0usize..2_000, 0..8)
    ) {
        let batch = BatchValidator::with_validator(
            ImageQualityValidator::without_decoder(ValidationConfig::default())
                .unwrap(),
        );
        let buffers: Vec<Vec<u8>> =
            lengths.iter().map(|len| vec![0u8; *len]).collect();
        let outcome = batch.validate_all(&buffers);

        prop_assert_eq!(outcome.results.len(), buffers.len());
        for (result, buffer) in outcome.results.iter().zip(&buffers) {
            prop_assert_eq!(result.metadata.size, buffer.len() as u64);
        }
        prop_assert_eq!(
            outcome.valid,
            outcome.results.iter().all(|result| result.valid)
        );
    }
}
