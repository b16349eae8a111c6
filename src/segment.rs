use crate::boundary::{BreakState, is_boundary};
use crate::utf8::{self, Decoded};

/// Returns the byte length of the first grapheme cluster in `bytes`.
///
/// The input may be arbitrary bytes, including ill-formed UTF-8. The
/// scan stops at the first cluster boundary, at the first malformed
/// sequence after the initial code point, at a NUL code point (so that
/// null-terminated buffers are handled even when their nominal length
/// overshoots), or at the end of the slice, whichever comes first. The
/// result never exceeds `bytes.len()`.
///
/// Empty input has no cluster and yields 0. When the input *begins*
/// with a malformed sequence the result is the length of that sequence,
/// treating it as its own cluster so that a caller advancing by the
/// returned length makes progress through corrupt input.
///
/// Boundary state is private to one call. A caller splitting an entire
/// string can do so by calling this in a loop, or keep the property
/// caches warm across the whole text by driving
/// [`is_boundary`] itself with a long-lived [`BreakState`], which is
/// what [`clusters`] does.
pub fn next_cluster_len(bytes: &[u8]) -> usize {
    if bytes.is_empty() {
        return 0;
    }
    let (first, mut len) = utf8::decode(bytes);
    let Decoded::Scalar(mut current) = first else {
        return len;
    };
    let mut state = BreakState::new();
    while current != 0 && len < bytes.len() {
        let (next, n) = utf8::decode(&bytes[len..]);
        let Decoded::Scalar(next) = next else {
            break;
        };
        if is_boundary(current, next, Some(&mut state)) {
            break;
        }
        len += n;
        current = next;
    }
    len
}

/// Returns an iterator over the grapheme clusters of `text`, as
/// subslices of it.
pub fn clusters(text: &str) -> Clusters<'_> {
    Clusters {
        remain: text,
        state: BreakState::new(),
    }
}

/// Iterator over the grapheme clusters of a string, created by
/// [`clusters`].
///
/// Yields each cluster as a subslice of the original string, without
/// allocating. One [`BreakState`] serves the whole iteration: every
/// adjacent code point pair is evaluated exactly once, so the property
/// caches stay in step with the window even across cluster boundaries.
#[derive(Debug, Clone)]
pub struct Clusters<'a> {
    remain: &'a str,
    state: BreakState,
}

impl<'a> Iterator for Clusters<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let mut chars = self.remain.chars();
        let first = chars.next()?;
        let mut prev = first as u32;
        let mut len = first.len_utf8();
        for c in chars {
            if is_boundary(prev, c as u32, Some(&mut self.state)) {
                break;
            }
            len += c.len_utf8();
            prev = c as u32;
        }
        let (cluster, rest) = self.remain.split_at(len);
        self.remain = rest;
        Some(cluster)
    }
}

#[cfg(test)]
mod tests;
