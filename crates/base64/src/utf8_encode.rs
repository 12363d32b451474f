//! UTF-8 encoding helper.

/// Encodes Unicode text to its UTF-8 byte representation.
///
/// Base64 operates on bytes, not characters; encoding text through this
/// helper first keeps code points above U+007F intact, where a codec
/// operating on a text type directly would truncate them to single
/// bytes. Delegates to the host UTF-8 facility (`str` is UTF-8 by
/// definition in Rust).
///
/// # Example
///
/// ```
/// use undermore_base64::utf8_encode;
///
/// assert_eq!(utf8_encode("é"), vec![0xC3, 0xA9]);
/// ```
pub fn utf8_encode(text: &str) -> Vec<u8> {
    text.as_bytes().to_vec()
}
