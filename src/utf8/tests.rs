use super::*;

use pretty_assertions::assert_eq;

#[test]
fn well_formed() {
    assert_eq!(decode(b"a"), (Decoded::Scalar(0x61), 1));
    assert_eq!(decode(b"abc"), (Decoded::Scalar(0x61), 1));
    assert_eq!(decode(b"\0"), (Decoded::Scalar(0), 1));
    assert_eq!(decode("é".as_bytes()), (Decoded::Scalar(0xE9), 2));
    assert_eq!(decode("€".as_bytes()), (Decoded::Scalar(0x20AC), 3));
    assert_eq!(decode("😀".as_bytes()), (Decoded::Scalar(0x1F600), 4));
    // the highest scalar value round-trips
    assert_eq!(
        decode("\u{10FFFF}".as_bytes()),
        (Decoded::Scalar(0x10FFFF), 4)
    );
}

#[test]
fn empty() {
    assert_eq!(decode(b""), (Decoded::Malformed, 0));
}

#[test]
fn stray_continuation_and_invalid_leads() {
    assert_eq!(decode(b"\x80"), (Decoded::Malformed, 1));
    assert_eq!(decode(b"\xBFabc"), (Decoded::Malformed, 1));
    assert_eq!(decode(b"\xF8\x80\x80\x80\x80"), (Decoded::Malformed, 1));
    assert_eq!(decode(b"\xFF"), (Decoded::Malformed, 1));
}

#[test]
fn truncated_sequences() {
    // truncated by end of input: everything seen is consumed
    assert_eq!(decode(b"\xC3"), (Decoded::Malformed, 1));
    assert_eq!(decode(b"\xE2\x82"), (Decoded::Malformed, 2));
    assert_eq!(decode(b"\xF0\x9F\x98"), (Decoded::Malformed, 3));
}

#[test]
fn interrupted_sequences_leave_the_interrupter() {
    // The byte that broke the sequence is not consumed, so it decodes
    // as its own fresh sequence on the next call. This is what lets a
    // scan rely on a terminator after arbitrary garbage.
    assert_eq!(decode(b"\xE2a"), (Decoded::Malformed, 1));
    assert_eq!(decode(b"a"), (Decoded::Scalar(0x61), 1));
    assert_eq!(decode(b"\xF0\x9F\x98\0"), (Decoded::Malformed, 3));
    assert_eq!(decode(b"\0"), (Decoded::Scalar(0), 1));
    assert_eq!(decode(b"\xC3\xC3\xA9"), (Decoded::Malformed, 1));
    assert_eq!(decode(b"\xC3\xA9"), (Decoded::Scalar(0xE9), 2));
}

#[test]
fn overlong_surrogate_and_out_of_range() {
    // overlong encodings consume their whole sequence
    assert_eq!(decode(b"\xC0\x80"), (Decoded::Malformed, 2));
    assert_eq!(decode(b"\xC1\xBF"), (Decoded::Malformed, 2));
    assert_eq!(decode(b"\xE0\x80\x80"), (Decoded::Malformed, 3));
    assert_eq!(decode(b"\xF0\x80\x80\x80"), (Decoded::Malformed, 4));
    // surrogates are not scalar values
    assert_eq!(decode(b"\xED\xA0\x80"), (Decoded::Malformed, 3));
    assert_eq!(decode(b"\xED\xBF\xBF"), (Decoded::Malformed, 3));
    // beyond U+10FFFF
    assert_eq!(decode(b"\xF4\x90\x80\x80"), (Decoded::Malformed, 4));
    assert_eq!(decode(b"\xF7\xBF\xBF\xBF"), (Decoded::Malformed, 4));
}
