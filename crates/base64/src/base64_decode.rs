//! Text-level base64 decoding.

use crate::{from_base64, utf8_decode, TranscodeError};

/// Decodes a standard base64 string back to Unicode text.
///
/// The base64 symbols are decoded to bytes through [`from_base64`]
/// (inheriting its leniency toward out-of-alphabet characters), then the
/// bytes are UTF-8 decoded into text.
///
/// # Errors
///
/// Returns [`TranscodeError::InvalidUtf8`] if the decoded bytes are not
/// valid UTF-8 text.
///
/// # Example
///
/// ```
/// use undermore_base64::base64_decode;
///
/// assert_eq!(base64_decode("aGVsbG8gd29ybGQ=").unwrap(), "hello world");
/// ```
pub fn base64_decode(encoded: &str) -> Result<String, TranscodeError> {
    utf8_decode(&from_base64(encoded))
}
