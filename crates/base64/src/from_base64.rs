//! Lenient base64 decoding function.

use crate::constants::{ALPHABET_BYTES, PAD};

/// Inverse alphabet lookup: maps an input byte to its 6-bit value, or -1
/// for bytes outside the base64 alphabet.
static DECODE_TABLE: [i8; 256] = {
    let mut table = [-1i8; 256];
    let mut i = 0;
    while i < 64 {
        table[ALPHABET_BYTES[i] as usize] = i as i8;
        i += 1;
    }
    table
};

/// Decodes a base64 string to its original byte sequence.
///
/// Trailing `=` padding is stripped first; the remaining characters are
/// mapped through the inverse alphabet and reassembled 4 sextets at a
/// time into 3 bytes. A byte is emitted only once 8 full bits have
/// accumulated, so a partial tail of 2 sextets yields 1 byte and a tail
/// of 3 sextets yields 2.
///
/// Characters outside the base64 alphabet are skipped, not rejected,
/// which makes this decoder total. This leniency is inherited from the
/// original implementation and is part of the contract: whitespace or
/// stray punctuation inside an otherwise valid string does not affect
/// the decoded bytes.
///
/// # Arguments
///
/// * `encoded` - The base64 string to decode.
///
/// # Returns
///
/// The decoded bytes. Decoding is the left inverse of [`to_base64`]:
/// `from_base64(&to_base64(x)) == x` for every byte sequence `x`.
///
/// [`to_base64`]: crate::to_base64
///
/// # Example
///
/// ```
/// use undermore_base64::from_base64;
///
/// assert_eq!(from_base64("aGVsbG8gd29ybGQ="), b"hello world");
/// ```
pub fn from_base64(encoded: &str) -> Vec<u8> {
    let bytes = encoded.trim_end_matches(PAD).as_bytes();
    let mut out = Vec::with_capacity((bytes.len() / 4) * 3 + 2);

    let mut group = [0u8; 4];
    let mut filled = 0;

    for &b in bytes {
        let sextet = DECODE_TABLE[b as usize];
        if sextet < 0 {
            // out-of-alphabet byte, skipped
            continue;
        }
        group[filled] = sextet as u8;
        filled += 1;
        if filled == 4 {
            out.push((group[0] << 2) | (group[1] >> 4));
            out.push((group[1] << 4) | (group[2] >> 2));
            out.push((group[2] << 6) | group[3]);
            filled = 0;
        }
    }

    // Partial tail: a single sextet carries fewer than 8 bits and
    // produces nothing.
    if filled >= 2 {
        out.push((group[0] << 2) | (group[1] >> 4));
    }
    if filled == 3 {
        out.push((group[1] << 4) | (group[2] >> 2));
    }

    out
}
