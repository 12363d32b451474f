//! UTF-8 decoding helper.

use crate::TranscodeError;

/// Decodes a UTF-8 byte sequence back to Unicode text.
///
/// Exact inverse of [`utf8_encode`] on its image: for any text `t`,
/// `utf8_decode(&utf8_encode(t)) == Ok(t)`.
///
/// [`utf8_encode`]: crate::utf8_encode
///
/// # Errors
///
/// Returns [`TranscodeError::InvalidUtf8`] if the bytes are not valid
/// UTF-8.
pub fn utf8_decode(bytes: &[u8]) -> Result<String, TranscodeError> {
    String::from_utf8(bytes.to_vec()).map_err(|_| TranscodeError::InvalidUtf8)
}
