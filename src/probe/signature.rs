//! Binary-signature format sniffing for the fallback path.

use crate::core::PhotoFormat;

const PNG_MAGIC: [u8; 4] = [0x89, 0x50, 0x4E, 0x47];
const JPEG_MAGIC: [u8; 2] = [0xFF, 0xD8];
const RIFF_MAGIC: [u8; 4] = [0x52, 0x49, 0x46, 0x46];
const WEBP_SUBTYPE: [u8; 4] = [0x57, 0x45, 0x42, 0x50];

/// Sniff the format from the buffer's leading bytes.
///
/// WebP requires both the `RIFF` container magic and the `WEBP` subtype at
/// offset 8, so other RIFF files (WAV, AVI) do not match. Buffers shorter
/// than a signature never match it.
pub(crate) fn sniff_format(buffer: &[u8]) -> PhotoFormat {
    if buffer.starts_with(&JPEG_MAGIC) {
        return PhotoFormat::Jpeg;
    }
    if buffer.starts_with(&PNG_MAGIC) {
        return PhotoFormat::Png;
    }
    if buffer.starts_with(&RIFF_MAGIC) && buffer.len() >= 12 && buffer[8..12] == WEBP_SUBTYPE {
        return PhotoFormat::WebP;
    }
    PhotoFormat::Unknown
}
