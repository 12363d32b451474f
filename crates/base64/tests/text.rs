//! Tests for the text-level API (base64_encode / base64_decode) and the
//! UTF-8 transcoding pair.

use proptest::prelude::*;
use undermore_base64::{
    base64_decode, base64_encode, from_base64, to_base64, utf8_decode, utf8_encode, TranscodeError,
};

#[test]
fn ascii_round_trip() {
    assert_eq!(base64_encode("hello world"), "aGVsbG8gd29ybGQ=");
    assert_eq!(base64_decode("aGVsbG8gd29ybGQ=").unwrap(), "hello world");
}

#[test]
fn multi_byte_round_trip() {
    for t in ["héllo", "Grüße", "日本語のテキスト", "emoji 🦀🎉", "mixed ascii + ünïcodé"] {
        let encoded = base64_encode(t);
        assert_eq!(base64_decode(&encoded).unwrap(), t, "Failed for {:?}", t);
    }
}

#[test]
fn wrapper_composes_utf8_and_base64() {
    let t = "héllo";
    assert_eq!(base64_encode(t), to_base64(&utf8_encode(t)));
    assert_eq!(
        utf8_decode(&from_base64(&base64_encode(t))).unwrap(),
        t
    );
}

#[test]
fn empty_text() {
    assert_eq!(base64_encode(""), "");
    assert_eq!(base64_decode("").unwrap(), "");
}

#[test]
fn decode_rejects_non_utf8_payload() {
    // 0xFF is never valid UTF-8; "/w==" decodes to exactly that byte.
    assert_eq!(base64_decode("/w=="), Err(TranscodeError::InvalidUtf8));
}

proptest! {
    #[test]
    fn prop_byte_round_trip(blob in proptest::collection::vec(any::<u8>(), 0..512)) {
        prop_assert_eq!(from_base64(&to_base64(&blob)), blob);
    }

    #[test]
    fn prop_text_round_trip(t in "\\PC*") {
        prop_assert_eq!(base64_decode(&base64_encode(&t)).unwrap(), t);
    }

    #[test]
    fn prop_utf8_inverse(t in "\\PC*") {
        prop_assert_eq!(utf8_decode(&utf8_encode(&t)).unwrap(), t);
    }
}
