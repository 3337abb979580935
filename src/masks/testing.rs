//! Deterministic mask builder for unit tests.

use super::{DoubleShuftiMasks, MaskBuilder, ShuftiMasks, TruffleMasks};
use crate::bytes::{ByteSet, BytePairSet};

/// Fills masks with the set sizes so tests can tell which inputs were used.
pub(crate) struct FakeBuilder {
    pub shufti_ok: bool,
}

impl FakeBuilder {
    pub fn new() -> Self {
        Self { shufti_ok: true }
    }

    pub fn failing_shufti() -> Self {
        Self { shufti_ok: false }
    }
}

impl MaskBuilder for FakeBuilder {
    fn shufti_masks(&self, stops: &ByteSet) -> Option<ShuftiMasks> {
        self.shufti_ok.then(|| ShuftiMasks {
            lo: [stops.count() as u8; 16],
            hi: [0xAA; 16],
        })
    }

    fn double_shufti_masks(&self, prefixes: &ByteSet, pairs: &BytePairSet) -> DoubleShuftiMasks {
        DoubleShuftiMasks {
            lo1: [prefixes.count() as u8; 16],
            hi1: [pairs.len() as u8; 16],
            lo2: [0xBB; 16],
            hi2: [0xCC; 16],
        }
    }

    fn truffle_masks(&self, stops: &ByteSet) -> TruffleMasks {
        TruffleMasks {
            mask1: [stops.count() as u8; 16],
            mask2: [0xDD; 16],
        }
    }
}
