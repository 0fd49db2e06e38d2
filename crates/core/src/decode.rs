//! Byte decoding with a Latin-1 fallback.
//!
//! Input is tried as UTF-8 first. Anything that is not valid UTF-8 is read
//! as ISO-8859-1, where every byte value is a code point, so decoding as a
//! whole cannot fail.

use crate::types::SourceEncoding;
use std::borrow::Cow;

/// Text decoded from raw bytes, with the encoding that was used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText<'a> {
    /// The decoded text. Borrowed when the input was already valid UTF-8.
    pub text: Cow<'a, str>,

    /// Which decoding step produced `text`.
    pub encoding: SourceEncoding,
}

/// Decode bytes as UTF-8, falling back to Latin-1 on any invalid sequence.
pub fn decode_bytes(bytes: &[u8]) -> DecodedText<'_> {
    match std::str::from_utf8(bytes) {
        Ok(text) => DecodedText {
            text: Cow::Borrowed(text),
            encoding: SourceEncoding::Utf8,
        },
        Err(e) => {
            log::debug!(
                "Input is not valid UTF-8 (first invalid byte at offset {}), decoding as Latin-1",
                e.valid_up_to()
            );
            DecodedText {
                text: Cow::Owned(decode_latin1(bytes)),
                encoding: SourceEncoding::Latin1,
            }
        }
    }
}

/// Decode bytes as ISO-8859-1.
///
/// Bytes 0x00-0xFF map to U+0000-U+00FF, so no byte is ever dropped.
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}
