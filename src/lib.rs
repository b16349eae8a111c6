//! Grapheme cluster boundary detection per the grapheme cluster portion
//! of [UAX #29: Unicode Text Segmentation](https://www.unicode.org/reports/tr29/),
//! built around a pairwise classifier rather than a whole-string
//! iterator.
//!
//! The core operation is [`is_boundary`]: given two adjacent code
//! points, it reports whether a user-perceived character boundary lies
//! between them. Two of the boundary rules (emoji ZWJ sequences and
//! regional indicator pairs) depend on context from before the pair, so
//! the classifier accepts an optional caller-owned [`BreakState`] that
//! carries that context — plus the property classification of the
//! shared code point — from one call to the next as a window slides
//! over a longer text. Passing `None` instead answers from the two code
//! points alone, a documented degraded mode for one-shot queries.
//!
//! Layered on top of the classifier:
//!
//! - [`next_cluster_len`] scans a byte slice (possibly ill-formed
//!   UTF-8) and returns the byte length of its first grapheme cluster,
//!   treating malformed sequences as implicit boundaries so that a
//!   caller chopping a corrupt buffer into clusters always makes
//!   forward progress.
//! - [`clusters`] iterates over the grapheme clusters of a `&str` as
//!   subslices.
//! - [`ClusterMachine`] is a push-style state machine for streaming
//!   input such as characters arriving over a socket: feed it one
//!   character at a time and it answers whether that character begins a
//!   new cluster or extends the current one. No buffering is required
//!   of the caller beyond whatever it wants to do with the clusters
//!   themselves.
//!
//! Character property data is compiled in as a generated range table
//! (see `gen/gen_tables.py`) from the Unicode 14.0.0 character
//! database. The crate is `no_std`, allocates nothing, and performs no
//! I/O; scans with independent [`BreakState`] values are free to run on
//! separate threads.
#![cfg_attr(not(test), no_std)]

mod boundary;
mod properties;
mod segment;
mod utf8;

pub use boundary::{BreakState, is_boundary};
pub use properties::{Property, PropertyCache, PropertySet};
pub use segment::{Clusters, clusters, next_cluster_len};
pub use utf8::{Decoded, decode};

use u8char::u8char;

/// A push-style state machine for detecting grapheme cluster boundaries
/// in streaming input.
///
/// Feed characters in sequentially with [`Self::next_char`],
/// [`Self::next_u8char`], or [`Self::next_scalar`]; each call returns
/// whether the new character begins a new grapheme cluster
/// ([`ClusterAction::Split`]) or extends the one in progress
/// ([`ClusterAction::Continue`]). The machine holds only the previous
/// code point and a [`BreakState`]; it keeps no text of its own.
#[derive(Debug)]
pub struct ClusterMachine {
    prev: Option<u32>,
    state: BreakState,
}

impl ClusterMachine {
    /// Constructs a machine in the "start of input" state.
    pub fn new() -> Self {
        ClusterMachine {
            prev: None,
            state: BreakState::new(),
        }
    }

    /// Advances the machine by one code point.
    ///
    /// `cp` must be a Unicode scalar value; surrogates and values
    /// beyond U+10FFFF are a caller error with unspecified (but memory
    /// safe) results. At the start of input the action is always
    /// [`ClusterAction::Split`], because there is no cluster yet to
    /// extend.
    pub fn next_scalar(&mut self, cp: u32) -> ClusterAction {
        let action = match self.prev {
            None => ClusterAction::Split,
            Some(prev) => {
                if is_boundary(prev, cp, Some(&mut self.state)) {
                    ClusterAction::Split
                } else {
                    ClusterAction::Continue
                }
            }
        };
        self.prev = Some(cp);
        action
    }

    /// Advances the machine by one character.
    ///
    /// See [`Self::next_scalar`] for the meaning of the result.
    pub fn next_char(&mut self, c: char) -> ClusterAction {
        self.next_scalar(c as u32)
    }

    /// Advances the machine by one character in its UTF-8 encoded
    /// representation.
    ///
    /// See [`Self::next_scalar`] for the meaning of the result.
    pub fn next_u8char(&mut self, c: u8char) -> ClusterAction {
        match c.as_str().chars().next() {
            Some(c) => self.next_char(c),
            // unreachable: a u8char holds exactly one character
            None => ClusterAction::Split,
        }
    }

    /// Tells the machine that the input stream has ended, resetting it
    /// to the "start of input" state so that nothing submitted later
    /// can extend the final cluster of the earlier stream.
    ///
    /// This also suits non-textual interruptions mid-stream, such as a
    /// markup tag between two literal characters: whatever follows the
    /// interruption begins a new cluster regardless of what came
    /// before. For consistency with the advancing methods this returns
    /// an action, and at the end of input that action is always
    /// [`ClusterAction::Split`].
    pub fn end_of_input(&mut self) -> ClusterAction {
        self.prev = None;
        self.state = BreakState::new();
        ClusterAction::Split
    }
}

/// What to do with a new character after presenting it to a
/// [`ClusterMachine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClusterAction {
    /// Treat the new character as an extension of the current grapheme
    /// cluster.
    Continue,
    /// Treat the current grapheme cluster as complete and begin a new
    /// one that initially consists only of the new character.
    Split,
}

#[cfg(test)]
mod tests;
