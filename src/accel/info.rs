//! Stop-byte statistics for one automaton state.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::bytes::{ByteSet, BytePairSet};

/// Which bytes stop a fast-forward skip from a state, at one or two positions.
///
/// Computed upstream from the automaton graph; this crate only reads it.
///
/// The single-position description says: a skip must stop when any byte in
/// `single_stops` appears `single_offset` bytes ahead of the cursor. An empty
/// `single_stops` means nothing can stop the skip there.
///
/// The double-position description says: a skip must stop when, at
/// `double_offset` bytes ahead, a byte in `double_stop1` appears, or a
/// two-byte sequence from `double_stop2` begins. Every pair's first byte is
/// expected to be consistent with `double_stop1`; that is not re-checked here.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AccelInfo {
    /// Bytes that stop the skip at `single_offset`.
    pub single_stops: ByteSet,
    /// Lookahead distance for the single-position check.
    pub single_offset: u32,
    /// One-byte stops for the double-position check.
    pub double_stop1: ByteSet,
    /// Two-byte stop sequences for the double-position check.
    pub double_stop2: BytePairSet,
    /// Lookahead distance for the double-position check. Must fit in a `u8`.
    pub double_offset: u32,
}

impl AccelInfo {
    /// Create an info with no stops at either position.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the single-position stop set and offset.
    pub fn with_single(mut self, stops: ByteSet, offset: u32) -> Self {
        self.single_stops = stops;
        self.single_offset = offset;
        self
    }

    /// Set the double-position stops and offset.
    pub fn with_double(mut self, stop1: ByteSet, stop2: BytePairSet, offset: u32) -> Self {
        self.double_stop1 = stop1;
        self.double_stop2 = stop2;
        self.double_offset = offset;
        self
    }
}
