//! 256-bit set over byte values.

use core::fmt;
use core::ops::RangeInclusive;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::case::is_case_pair;

/// A set of byte values, stored as four 64-bit words.
///
/// Bit `b % 64` of word `b / 64` is set when byte `b` is a member. This is the
/// "reach" of an automaton transition: the bytes that can be consumed (or, for
/// acceleration, the bytes that stop a skip).
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ByteSet {
    words: [u64; 4],
}

impl ByteSet {
    /// Create an empty set.
    #[inline]
    pub const fn new() -> Self {
        Self { words: [0; 4] }
    }

    /// Create a set containing all 256 byte values.
    #[inline]
    pub const fn full() -> Self {
        Self {
            words: [u64::MAX; 4],
        }
    }

    /// Create a set containing every byte in `range`.
    pub fn from_range(range: RangeInclusive<u8>) -> Self {
        range.collect()
    }

    /// Insert a byte. Returns true if it was not already present.
    #[inline]
    pub fn insert(&mut self, byte: u8) -> bool {
        let (word, bit) = Self::locate(byte);
        let was_set = self.words[word] & bit != 0;
        self.words[word] |= bit;
        !was_set
    }

    /// Remove a byte. Returns true if it was present.
    #[inline]
    pub fn remove(&mut self, byte: u8) -> bool {
        let (word, bit) = Self::locate(byte);
        let was_set = self.words[word] & bit != 0;
        self.words[word] &= !bit;
        was_set
    }

    #[inline]
    pub fn contains(&self, byte: u8) -> bool {
        let (word, bit) = Self::locate(byte);
        self.words[word] & bit != 0
    }

    /// Number of bytes in the set (0..=256).
    #[inline]
    pub fn count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words == [0; 4]
    }

    /// Returns true if every byte value is a member.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.words == [u64::MAX; 4]
    }

    /// Smallest byte in the set.
    #[inline]
    pub fn first(&self) -> Option<u8> {
        self.next_from(0)
    }

    /// Returns true if the set is exactly the two case forms of one ASCII
    /// letter, e.g. `{'A', 'a'}`.
    pub fn is_caseless_char(&self) -> bool {
        if self.count() != 2 {
            return false;
        }
        let mut iter = self.iter();
        match (iter.next(), iter.next()) {
            (Some(a), Some(b)) => is_case_pair(a, b),
            _ => false,
        }
    }

    /// Set union.
    #[inline]
    pub fn union(&self, other: &ByteSet) -> ByteSet {
        let mut words = self.words;
        for (w, o) in words.iter_mut().zip(other.words.iter()) {
            *w |= *o;
        }
        ByteSet { words }
    }

    /// Set complement over the 256 byte values.
    #[inline]
    pub fn complement(&self) -> ByteSet {
        ByteSet {
            words: self.words.map(|w| !w),
        }
    }

    /// Iterate over members in ascending order.
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            set: self,
            next: Some(0),
        }
    }

    /// Raw words, least significant byte value first.
    #[inline]
    pub fn as_words(&self) -> &[u64; 4] {
        &self.words
    }

    #[inline]
    fn locate(byte: u8) -> (usize, u64) {
        ((byte >> 6) as usize, 1u64 << (byte & 63))
    }

    /// Smallest member `>= from`.
    fn next_from(&self, from: u8) -> Option<u8> {
        let mut word = (from >> 6) as usize;
        let mut bits = self.words[word] & (u64::MAX << (from & 63));
        loop {
            if bits != 0 {
                return Some((word * 64 + bits.trailing_zeros() as usize) as u8);
            }
            word += 1;
            if word == 4 {
                return None;
            }
            bits = self.words[word];
        }
    }
}

impl FromIterator<u8> for ByteSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = ByteSet::new();
        for byte in iter {
            set.insert(byte);
        }
        set
    }
}

impl<'a> IntoIterator for &'a ByteSet {
    type Item = u8;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl fmt::Debug for ByteSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_full() {
            return write!(f, "ByteSet(all)");
        }
        f.debug_set().entries(self.iter().map(DebugByte)).finish()
    }
}

struct DebugByte(u8);

impl fmt::Debug for DebugByte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:02x}", self.0)
    }
}

/// Ascending iterator over the members of a [`ByteSet`].
pub struct Iter<'a> {
    set: &'a ByteSet,
    /// Next candidate byte, `None` once 0xFF has been passed.
    next: Option<u8>,
}

impl Iterator for Iter<'_> {
    type Item = u8;

    #[inline]
    fn next(&mut self) -> Option<u8> {
        let found = self.set.next_from(self.next?)?;
        self.next = found.checked_add(1);
        Some(found)
    }
}
