//! Classification masks and the builder capability that produces them.
//!
//! Mask construction belongs to the runtime scanner that consumes the masks:
//! the bucket layout of a shufti mask and the bit layout of a truffle mask
//! must match the scan loop exactly. The acceleration compiler therefore only
//! depends on the [`MaskBuilder`] trait and treats the builders as black boxes.
//!
//! All mask types are `#[repr(C)]` plain byte arrays implementing
//! [`bytemuck::Pod`], so they can be copied verbatim into a compiled
//! automaton's read-only data.

use bytemuck::{Pod, Zeroable};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::bytes::{ByteSet, BytePairSet};

/// One 128-bit vector mask.
pub type Mask128 = [u8; 16];

/// Nibble-bucket masks for single-position shufti.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ShuftiMasks {
    /// Bucket bits indexed by the low nibble.
    pub lo: Mask128,
    /// Bucket bits indexed by the high nibble.
    pub hi: Mask128,
}

/// Nibble-bucket masks for double-position shufti, one pair per position.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DoubleShuftiMasks {
    pub lo1: Mask128,
    pub hi1: Mask128,
    pub lo2: Mask128,
    pub hi2: Mask128,
}

/// Masks for truffle classification.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TruffleMasks {
    pub mask1: Mask128,
    pub mask2: Mask128,
}

macro_rules! impl_as_bytes {
    ($($ty:ty),*) => {
        $(
            impl $ty {
                /// Raw bytes in the layout expected by the runtime scanner.
                #[inline]
                pub fn as_bytes(&self) -> &[u8] {
                    bytemuck::bytes_of(self)
                }
            }
        )*
    };
}

impl_as_bytes!(ShuftiMasks, DoubleShuftiMasks, TruffleMasks);

/// Produces classification masks for a stop set.
///
/// Implementations are supplied by the runtime scanner. The acceleration
/// compiler relies on the following contract:
///
/// - [`shufti_masks`](Self::shufti_masks) may fail: a set whose bytes cannot
///   be distributed over the fixed nibble buckets yields `None`. This is an
///   expected outcome and triggers a fallback, never an error.
/// - [`double_shufti_masks`](Self::double_shufti_masks) is only called with
///   at most [`DSHUFTI_MAX_STOPS`](crate::DSHUFTI_MAX_STOPS) combined
///   prefixes and pairs and must succeed.
/// - [`truffle_masks`](Self::truffle_masks) is only called with at most
///   [`TRUFFLE_MAX_STOP_CHARS`](crate::TRUFFLE_MAX_STOP_CHARS) bytes (or the
///   configured equivalent) and must succeed.
pub trait MaskBuilder {
    /// Build single-position shufti masks, or `None` on bucket collision.
    fn shufti_masks(&self, stops: &ByteSet) -> Option<ShuftiMasks>;

    /// Build double-position shufti masks from the one-byte prefix stops and
    /// the two-byte pair stops.
    fn double_shufti_masks(&self, prefixes: &ByteSet, pairs: &BytePairSet) -> DoubleShuftiMasks;

    /// Build truffle masks.
    fn truffle_masks(&self, stops: &ByteSet) -> TruffleMasks;
}


#[cfg(test)]
pub(crate) mod testing;
