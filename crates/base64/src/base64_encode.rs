//! Text-level base64 encoding.

use crate::{to_base64, utf8_encode};

/// Encodes Unicode text to a standard base64 string.
///
/// The text is UTF-8 encoded first, then the resulting bytes are passed
/// through [`to_base64`], so multi-byte characters survive the trip.
///
/// # Example
///
/// ```
/// use undermore_base64::base64_encode;
///
/// assert_eq!(base64_encode("hello world"), "aGVsbG8gd29ybGQ=");
/// assert_eq!(base64_encode("héllo"), "aMOpbGxv");
/// ```
pub fn base64_encode(text: &str) -> String {
    to_base64(&utf8_encode(text))
}
