mod table;

/// Enumeration of the Unicode character properties consulted by the
/// grapheme cluster boundary rules, from
/// [UAX#29 Section 3.1](https://www.unicode.org/reports/tr29/#Grapheme_Cluster_Break_Property_Values).
///
/// ExtendedPictographic is actually derived from the Emoji standard's
/// character tables rather than GraphemeBreakProperty.txt, but rule
/// GB11 and the emoji-sequence tracking treat it as a peer of the
/// others, so it lives in the same enumeration here.
///
/// The discriminants are bit positions within [`PropertySet`].
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Property {
    CR = 0,
    LF = 1,
    Control = 2,
    Extend = 3,
    ZWJ = 4,
    SpacingMark = 5,
    Prepend = 6,
    RegionalIndicator = 7,
    ExtendedPictographic = 8,
    /// Hangul leading consonant jamo.
    L = 9,
    /// Hangul vowel jamo.
    V = 10,
    /// Hangul trailing consonant jamo.
    T = 11,
    /// Precomposed Hangul syllable without a trailing consonant.
    LV = 12,
    /// Precomposed Hangul syllable with a trailing consonant.
    LVT = 13,
}

/// The set of boundary-relevant properties carried by one code point,
/// as a compact bitset over [`Property`].
///
/// The boundary rules query properties individually (a rule may care
/// about Extend on one side and ZWJ on the other), so the lookup
/// resolves all of them in one pass and the rules test bits from there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertySet {
    raw: u16,
}

impl PropertySet {
    /// The classification of a code point that carries none of the
    /// boundary-relevant properties.
    pub const EMPTY: Self = Self { raw: 0 };

    /// Looks up the properties of the given code point.
    ///
    /// This is a binary search over a generated range table, except for
    /// the precomposed Hangul syllable block where LV/LVT membership
    /// follows from the syllable arithmetic of the encoding.
    pub fn of(cp: u32) -> Self {
        if (0xAC00..=0xD7A3).contains(&cp) {
            // Syllables come in runs of 28: one LV form followed by 27
            // LVT forms, one per trailing consonant.
            return if (cp - 0xAC00) % 28 == 0 {
                Self::only(Property::LV)
            } else {
                Self::only(Property::LVT)
            };
        }
        match table::BREAK_PROPS.binary_search_by(|&(first, last, _)| {
            if last < cp {
                core::cmp::Ordering::Less
            } else if first > cp {
                core::cmp::Ordering::Greater
            } else {
                core::cmp::Ordering::Equal
            }
        }) {
            Ok(i) => Self {
                raw: table::BREAK_PROPS[i].2,
            },
            Err(_) => Self::EMPTY,
        }
    }

    /// Returns `true` if the code point this set was computed from
    /// carries the given property.
    pub const fn has(self, p: Property) -> bool {
        self.raw & (1 << p as u16) != 0
    }

    const fn only(p: Property) -> Self {
        Self { raw: 1 << p as u16 }
    }
}

/// A cache slot for the property classification of a single code point.
///
/// Once populated, a slot answers every property query for the code
/// point it was computed from without touching the table again. A slot
/// is authoritative only for that exact code point: it remembers which
/// one it was filled from, so a query for a different code point
/// repopulates it instead of returning a stale classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PropertyCache(Option<(u32, PropertySet)>);

impl PropertyCache {
    /// A slot that has not been populated for any code point.
    pub const EMPTY: Self = Self(None);

    /// Returns the properties of `cp`, from the cache when it already
    /// holds them and from the table otherwise.
    pub fn properties(&mut self, cp: u32) -> PropertySet {
        match self.0 {
            Some((cached, props)) if cached == cp => props,
            _ => {
                let props = PropertySet::of(cp);
                self.0 = Some((cp, props));
                props
            }
        }
    }
}
