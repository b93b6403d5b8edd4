//! Metadata probes: the swappable image-decoding capability.
//!
//! The validator core never depends on a concrete decoding technology. It
//! talks to a [`MetadataProbe`], and any failure or absence of the probe
//! demotes a validation call to the signature-sniffing path.

mod capability;
#[cfg(feature = "decoder")]
mod decoder;
pub(crate) mod signature;

pub use capability::{MetadataProbe, ProbedImage};
#[cfg(feature = "decoder")]
pub use decoder::DecoderProbe;
