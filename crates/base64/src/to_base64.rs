//! Standard base64 encoding function.

use crate::constants::{ALPHABET_BYTES, PAD};

/// Encodes a byte slice to a standard base64 string.
///
/// The input is consumed 3 bytes at a time; every 24-bit group is split
/// into four 6-bit fields, each mapped through the standard alphabet. A
/// final group of 2 bytes produces one `=` of padding, a final group of
/// 1 byte produces two.
///
/// # Arguments
///
/// * `uint8` - The bytes to encode.
///
/// # Returns
///
/// A base64-encoded string with standard padding.
///
/// # Example
///
/// ```
/// use undermore_base64::to_base64;
///
/// let encoded = to_base64(b"hello world");
/// assert_eq!(encoded, "aGVsbG8gd29ybGQ=");
/// ```
pub fn to_base64(uint8: &[u8]) -> String {
    let length = uint8.len();
    let mut out = String::with_capacity((length * 4 / 3) + 4);

    let extra_length = length % 3;
    let base_length = length - extra_length;

    let mut i = 0;
    while i < base_length {
        let group = ((uint8[i] as u32) << 16) | ((uint8[i + 1] as u32) << 8) | (uint8[i + 2] as u32);
        out.push(ALPHABET_BYTES[(group >> 18) as usize & 63] as char);
        out.push(ALPHABET_BYTES[(group >> 12) as usize & 63] as char);
        out.push(ALPHABET_BYTES[(group >> 6) as usize & 63] as char);
        out.push(ALPHABET_BYTES[(group as usize) & 63] as char);
        i += 3;
    }

    if extra_length == 1 {
        let o1 = uint8[base_length];
        out.push(ALPHABET_BYTES[(o1 >> 2) as usize] as char);
        out.push(ALPHABET_BYTES[((o1 & 0b11) << 4) as usize] as char);
        out.push(PAD);
        out.push(PAD);
    } else if extra_length == 2 {
        let o1 = uint8[base_length];
        let o2 = uint8[base_length + 1];
        out.push(ALPHABET_BYTES[(o1 >> 2) as usize] as char);
        out.push(ALPHABET_BYTES[(((o1 & 0b11) << 4) | (o2 >> 4)) as usize] as char);
        out.push(ALPHABET_BYTES[((o2 & 0b1111) << 2) as usize] as char);
        out.push(PAD);
    }

    out
}
