//! Ordered set of two-byte sequences.

use alloc::collections::btree_set::{self, BTreeSet};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::set::ByteSet;

/// A set of ordered byte pairs `(first, second)`.
///
/// Each member is a two-byte sequence that stops a double-byte skip. Pairs are
/// kept sorted, so [`first`](Self::first) and iteration order are stable
/// across runs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BytePairSet {
    pairs: BTreeSet<(u8, u8)>,
}

impl BytePairSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a pair. Returns true if it was not already present.
    pub fn insert(&mut self, first: u8, second: u8) -> bool {
        self.pairs.insert((first, second))
    }

    pub fn contains(&self, first: u8, second: u8) -> bool {
        self.pairs.contains(&(first, second))
    }

    /// Number of distinct pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Smallest pair in lexicographic order.
    pub fn first(&self) -> Option<(u8, u8)> {
        self.pairs.iter().next().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        self.pairs.iter().copied()
    }

    /// The set of bytes that begin at least one pair.
    pub fn first_bytes(&self) -> ByteSet {
        self.iter().map(|(first, _)| first).collect()
    }
}

impl FromIterator<(u8, u8)> for BytePairSet {
    fn from_iter<I: IntoIterator<Item = (u8, u8)>>(iter: I) -> Self {
        Self {
            pairs: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a BytePairSet {
    type Item = &'a (u8, u8);
    type IntoIter = btree_set::Iter<'a, (u8, u8)>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn test_insert_dedup() {
        let mut pairs = BytePairSet::new();
        assert!(pairs.is_empty());
        assert!(pairs.insert(b'a', b'b'));
        assert!(!pairs.insert(b'a', b'b'));
        assert!(pairs.insert(b'b', b'a'));
        assert_eq!(pairs.len(), 2);
        assert!(pairs.contains(b'b', b'a'));
        assert!(!pairs.contains(b'a', b'a'));
    }

    #[test]
    fn test_first_is_lexicographic_minimum() {
        let pairs: BytePairSet = [(0x61, 0x42), (0x41, 0x62), (0x41, 0x42)]
            .into_iter()
            .collect();
        assert_eq!(pairs.first(), Some((0x41, 0x42)));
        assert_eq!(
            pairs.iter().collect::<Vec<_>>(),
            [(0x41, 0x42), (0x41, 0x62), (0x61, 0x42)]
        );
    }

    #[test]
    fn test_first_bytes() {
        let pairs: BytePairSet = [(1, 2), (1, 3), (7, 0)].into_iter().collect();
        let firsts = pairs.first_bytes();
        assert_eq!(firsts.count(), 2);
        assert!(firsts.contains(1));
        assert!(firsts.contains(7));
    }
}
