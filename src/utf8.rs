/// The result of decoding one UTF-8 sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoded {
    /// A well-formed Unicode scalar value.
    Scalar(u32),
    /// The bytes did not encode a scalar value: a stray continuation
    /// byte, an invalid or truncated sequence, an overlong encoding, a
    /// surrogate, or a value beyond U+10FFFF.
    Malformed,
}

/// Decodes the first UTF-8 sequence of `bytes`, returning the result
/// and the number of bytes consumed.
///
/// Malformed input still consumes at least one byte, so a scan that
/// advances by the returned count always makes forward progress; the
/// only zero-length result is the empty slice, which callers screen out
/// before decoding. A byte that cannot continue the sequence in
/// progress is left unconsumed and starts a fresh sequence on the next
/// call, so a terminator following a truncated sequence is never
/// swallowed by the failure before it.
pub fn decode(bytes: &[u8]) -> (Decoded, usize) {
    let Some(&b0) = bytes.first() else {
        return (Decoded::Malformed, 0);
    };
    if b0 < 0x80 {
        return (Decoded::Scalar(b0 as u32), 1);
    }
    let (len, min, init) = match b0 {
        0xC0..=0xDF => (2, 0x80u32, (b0 & 0x1F) as u32),
        0xE0..=0xEF => (3, 0x800, (b0 & 0x0F) as u32),
        0xF0..=0xF7 => (4, 0x10000, (b0 & 0x07) as u32),
        // stray continuation byte or invalid lead
        _ => return (Decoded::Malformed, 1),
    };
    let mut cp = init;
    for i in 1..len {
        match bytes.get(i) {
            Some(&b) if b & 0xC0 == 0x80 => cp = cp << 6 | (b & 0x3F) as u32,
            // not a continuation byte: leave it for the next attempt
            _ => return (Decoded::Malformed, i),
        }
    }
    if cp < min || (0xD800..=0xDFFF).contains(&cp) || cp > 0x10FFFF {
        return (Decoded::Malformed, len);
    }
    (Decoded::Scalar(cp), len)
}

#[cfg(test)]
mod tests;
