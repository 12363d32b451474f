//! Base64 encoding and decoding utilities.
//!
//! This crate provides the standard base64 codec (RFC 4648 alphabet with
//! `=` padding) together with a UTF-8 transcoding pair, so that Unicode
//! text round-trips correctly through an encoding that operates on bytes:
//!
//! - [`to_base64`] / [`from_base64`] work on byte sequences.
//! - [`base64_encode`] / [`base64_decode`] work on text, transcoding
//!   through UTF-8 on the way in and out.
//!
//! Decoding is lenient: bytes outside the base64 alphabet are skipped
//! rather than rejected, so [`from_base64`] is total. See the function
//! docs for the full contract.
//!
//! # Example
//!
//! ```
//! use undermore_base64::{base64_encode, base64_decode};
//!
//! let encoded = base64_encode("héllo");
//! assert_eq!(encoded, "aMOpbGxv");
//! assert_eq!(base64_decode(&encoded).unwrap(), "héllo");
//! ```

mod base64_decode;
mod base64_encode;
mod constants;
mod from_base64;
mod to_base64;
mod utf8_decode;
mod utf8_encode;

pub use base64_decode::base64_decode;
pub use base64_encode::base64_encode;
pub use constants::{ALPHABET, ALPHABET_BYTES, PAD};
pub use from_base64::from_base64;
pub use to_base64::to_base64;
pub use utf8_decode::utf8_decode;
pub use utf8_encode::utf8_encode;

/// Error type for text transcoding operations.
///
/// Base64 decoding itself never fails; the only failure mode in this crate
/// is decoded bytes that do not form valid UTF-8 text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscodeError {
    /// The decoded byte sequence is not valid UTF-8.
    InvalidUtf8,
}

impl std::fmt::Display for TranscodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TranscodeError::InvalidUtf8 => write!(f, "INVALID_UTF8"),
        }
    }
}

impl std::error::Error for TranscodeError {}
