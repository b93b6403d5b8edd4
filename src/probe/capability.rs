//! Metadata probe trait.

use crate::error::ProbeError;

/// Raw metadata reported by a probe, before any threshold checks.
///
/// Every field is optional: a probe reports what it could resolve and no
/// more. A probe that knows the format but not the dimensions is still
/// useful — the validator downgrades the dimension checks to a corruption
/// warning in that case.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProbedImage {
    /// Width in pixels, if resolved.
    pub width: Option<u32>,
    /// Height in pixels, if resolved.
    pub height: Option<u32>,
    /// Detected format name (e.g. `jpeg`, `png`, `gif`), if resolved.
    pub format: Option<String>,
}

/// Trait for image-decoding capabilities.
///
/// Implement this to plug a decoding technology into the validator (e.g. a
/// native codec binding, a remote probing service, or a test stub). The
/// contract is "given bytes, return what you could parse from the header, or
/// fail" — the validator treats any failure identically to the capability
/// being absent.
pub trait MetadataProbe: Send + Sync {
    /// Parse the buffer's header into structured metadata.
    ///
    /// Implementations should read headers only; screening must not pay for
    /// a full pixel decode.
    ///
    /// # Errors
    ///
    /// Returns a [`ProbeError`] if the buffer cannot be parsed. The caller
    /// swallows it and falls back to signature sniffing.
    fn probe(&self, buffer: &[u8]) -> Result<ProbedImage, ProbeError>;

    /// Get a human-readable name for this probe (for logging/debugging).
    fn name(&self) -> &'static str;
}
