use crate::properties::{Property, PropertyCache, PropertySet};

/// An odd number of regional indicators sits immediately left of the
/// current seam.
const FLAG_RI_ODD: u8 = 1 << 0;
/// The current seam is inside an emoji modifier or ZWJ sequence, i.e.
/// everything since the last boundary matches
/// `\p{Extended_Pictographic} (Extend | ZWJ)*`.
const FLAG_EMOJI: u8 = 1 << 1;

/// Carried state for a sliding-window scan over adjacent code point
/// pairs.
///
/// When [`is_boundary`] is called over a window (X, Y), (Y, Z), (Z, W),
/// ... the code point that was the right-hand side of one call becomes
/// the left-hand side of the next. A `BreakState` keeps the property
/// classification of both window positions so that no code point is
/// classified twice, and carries the two rule flags (regional indicator
/// parity for GB12/GB13, emoji sequence tracking for GB11) that span
/// more than one pair.
///
/// The state is owned by the caller: zero-initialize one with
/// [`BreakState::new`] at the start of a scan, pass it to every query
/// of that scan, and drop it when the scan ends. Feeding it pairs that
/// are not window-adjacent does not corrupt results (the caches notice
/// and recompute) but forfeits both the caching and the cross-pair
/// rule context.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BreakState {
    cache_a: PropertyCache,
    cache_b: PropertyCache,
    flags: u8,
}

impl BreakState {
    /// Constructs the state for the start of a scan: empty caches, no
    /// regional indicators seen, not inside an emoji sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the cross-pair rule flags for the seam between two code
    /// points with the given properties. Runs before rule evaluation so
    /// that GB11 and GB12/GB13 see the flags as of this seam.
    fn update_flags(&mut self, a: PropertySet, b: PropertySet) {
        use Property::*;
        if b.has(RegionalIndicator) {
            if a.has(RegionalIndicator) {
                // one more RI on the left side of the seam
                self.flags ^= FLAG_RI_ODD;
            } else {
                // an RI begins right of a non-RI: zero on the left,
                // which is even
                self.flags &= !FLAG_RI_ODD;
            }
        }
        if self.flags & FLAG_EMOJI == 0 {
            if a.has(ExtendedPictographic) && (b.has(ZWJ) || b.has(Extend)) {
                self.flags |= FLAG_EMOJI;
            }
        } else if (a.has(ZWJ) && b.has(ExtendedPictographic))
            || (a.has(Extend) && (b.has(Extend) || b.has(ZWJ)))
            || (a.has(ExtendedPictographic) && (b.has(ZWJ) || b.has(Extend)))
        {
            // still inside the sequence
        } else {
            self.flags &= !FLAG_EMOJI;
        }
    }
}

/// Reports whether a grapheme cluster boundary lies between `a` and
/// `b`, per the
/// [Grapheme Cluster Boundary Rules](https://www.unicode.org/reports/tr29/#Grapheme_Cluster_Boundary_Rules)
/// of UAX #29.
///
/// `a` is the code point immediately left of the seam and `b` the one
/// immediately right. Both must be Unicode scalar values; this function
/// does not screen for surrogates or out-of-range values, so callers
/// decoding untrusted bytes must reject malformed sequences first (as
/// [`next_cluster_len`](crate::next_cluster_len) does).
///
/// With `Some(state)`, successive calls over a sliding window reuse the
/// property classification of the shared code point and carry the
/// cross-pair context needed by rules GB11 and GB12/GB13. After a call
/// that reports a boundary the carried flags are cleared, so rule
/// context never leaks from one cluster into the next.
///
/// With `None` the answer is computed from the two code points alone.
/// This is a deliberate degraded mode for one-shot queries: rules that
/// need context from earlier pairs see only this pair, so a lone
/// regional indicator pair reads as a flag (parity starts even), and a
/// ZWJ-to-pictographic seam reads as a break because there is no
/// recorded emoji sequence for GB11 to extend.
pub fn is_boundary(a: u32, b: u32, state: Option<&mut BreakState>) -> bool {
    let mut scratch = BreakState::new();
    let state = match state {
        Some(state) => state,
        None => &mut scratch,
    };

    let boundary = if is_ascii_printable(a) && is_ascii_printable(b) {
        // No rule ever suppresses a break between two printable ASCII
        // characters, so plain text skips the property lookups.
        true
    } else {
        let a = state.cache_a.properties(a);
        let b = state.cache_b.properties(b);
        state.update_flags(a, b);
        rule_boundary(a, b, state.flags)
    };

    // Shared epilogue on every path: the window slides one code point
    // to the right, and flag context never crosses a boundary.
    state.cache_a = state.cache_b;
    state.cache_b = PropertyCache::EMPTY;
    if boundary {
        state.flags = 0;
    }
    boundary
}

const fn is_ascii_printable(cp: u32) -> bool {
    cp >= 0x20 && cp <= 0x7E
}

/// The boundary rules, evaluated in priority order. The first matching
/// rule decides; a control character forces a break (GB4/GB5) even when
/// a later rule would have joined the pair, so the order here is load
/// bearing.
fn rule_boundary(a: PropertySet, b: PropertySet, flags: u8) -> bool {
    use Property::*;

    // GB1 and GB2 concern the ends of the text and never apply to an
    // interior seam.

    // GB3: do not break between a CR and LF.
    if a.has(CR) && b.has(LF) {
        return false;
    }
    // GB4: otherwise, break after controls.
    if a.has(Control) || a.has(CR) || a.has(LF) {
        return true;
    }
    // GB5: ... and before controls.
    if b.has(Control) || b.has(CR) || b.has(LF) {
        return true;
    }
    // GB6: do not break Hangul syllable sequences: L may be followed by
    // any leading jamo or syllable.
    if a.has(L) && (b.has(L) || b.has(V) || b.has(LV) || b.has(LVT)) {
        return false;
    }
    // GB7: vowel jamo continue an LV syllable or a vowel run.
    if (a.has(LV) || a.has(V)) && (b.has(V) || b.has(T)) {
        return false;
    }
    // GB8: trailing jamo continue an LVT syllable or a trailing run.
    if (a.has(LVT) || a.has(T)) && b.has(T) {
        return false;
    }
    // GB9: do not break before extending characters or ZWJ.
    if b.has(Extend) || b.has(ZWJ) {
        return false;
    }
    // GB9a: do not break before SpacingMarks...
    if b.has(SpacingMark) {
        return false;
    }
    // GB9b: ...or after Prepend characters.
    if a.has(Prepend) {
        return false;
    }
    // GB11: do not break within emoji modifier or ZWJ sequences.
    if flags & FLAG_EMOJI != 0 && a.has(ZWJ) && b.has(ExtendedPictographic) {
        return false;
    }
    // GB12/GB13: pair up regional indicators two by two.
    if a.has(RegionalIndicator) && b.has(RegionalIndicator) && flags & FLAG_RI_ODD != 0 {
        return false;
    }
    // GB999: otherwise, break everywhere.
    true
}
