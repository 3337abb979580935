//! Acceleration strategy selection.
//!
//! Given the stop-byte statistics of one automaton state ([`AccelInfo`]),
//! [`build_accel`] picks the cheapest vectorized skip the runtime scanner can
//! perform from that state and returns it as an [`AccelAux`].
//!
//! # Priority
//!
//! Strategies are tried in a fixed order and the first one to decide wins:
//!
//! 1. **Red tape** - nothing can stop the skip at the single offset.
//! 2. **Double-byte** - vermicelli, caseless vermicelli or shufti over byte
//!    pairs. Declines when no pairs exist or the pair set is a poor fit.
//! 3. **Single-byte** - vermicelli, caseless vermicelli, shufti or truffle.
//!
//! If nothing decides, the result is [`AccelAux::None`] and the scanner
//! falls back to byte-at-a-time matching.
//!
//! # Example
//!
//! ```
//! use stopscan::accel::{build_accel, AccelAux, AccelInfo};
//! use stopscan::bytes::{ByteSet, BytePairSet};
//! use stopscan::masks::{DoubleShuftiMasks, MaskBuilder, ShuftiMasks, TruffleMasks};
//!
//! struct NoMasks;
//!
//! impl MaskBuilder for NoMasks {
//!     fn shufti_masks(&self, _: &ByteSet) -> Option<ShuftiMasks> {
//!         None
//!     }
//!     fn double_shufti_masks(&self, _: &ByteSet, _: &BytePairSet) -> DoubleShuftiMasks {
//!         DoubleShuftiMasks::default()
//!     }
//!     fn truffle_masks(&self, _: &ByteSet) -> TruffleMasks {
//!         TruffleMasks::default()
//!     }
//! }
//!
//! let stops: ByteSet = [b'A', b'a'].into_iter().collect();
//! let info = AccelInfo::new().with_single(stops, 0);
//! assert_eq!(build_accel(&info, &NoMasks), AccelAux::VermNocase { offset: 0, c: b'A' });
//! ```

mod config;
mod descriptor;
pub mod double;
mod error;
mod info;
pub mod single;

pub use config::{AccelConfig, DSHUFTI_MAX_PREFIXES, DSHUFTI_MAX_STOPS, TRUFFLE_MAX_STOP_CHARS};
pub use descriptor::{AccelAux, AccelType};
pub use double::build_accel_double;
pub use error::AccelError;
pub use info::AccelInfo;
pub use single::build_accel_single;

use crate::masks::MaskBuilder;

/// One step of the selection order: a decision, or `None` to let the next
/// strategy try.
type Strategy =
    fn(&AccelInfo, &dyn MaskBuilder, &AccelConfig) -> Result<Option<AccelAux>, AccelError>;

/// Selection order. The double-byte strategy must run before the single-byte
/// one.
const STRATEGIES: [(&str, Strategy); 3] = [
    ("red_tape", try_red_tape as Strategy),
    ("double", try_double as Strategy),
    ("single", try_single as Strategy),
];

fn try_red_tape(
    info: &AccelInfo,
    _: &dyn MaskBuilder,
    _: &AccelConfig,
) -> Result<Option<AccelAux>, AccelError> {
    Ok(info.single_stops.is_empty().then_some(AccelAux::RedTape {
        offset: info.single_offset,
    }))
}

fn try_double(
    info: &AccelInfo,
    builder: &dyn MaskBuilder,
    _: &AccelConfig,
) -> Result<Option<AccelAux>, AccelError> {
    build_accel_double(info, builder)
}

fn try_single(
    info: &AccelInfo,
    builder: &dyn MaskBuilder,
    config: &AccelConfig,
) -> Result<Option<AccelAux>, AccelError> {
    let aux = build_accel_single(&info.single_stops, info.single_offset, builder, config);
    Ok(aux.is_accelerated().then_some(aux))
}

/// Build the acceleration descriptor for `info` with the default thresholds.
///
/// # Panics
///
/// Panics if `info.double_offset` does not fit in a `u8`, or if the built
/// descriptor's offset traces back to neither offset of `info`. Both are
/// programming errors; see [`try_build_accel`] to handle them instead.
pub fn build_accel(info: &AccelInfo, builder: &dyn MaskBuilder) -> AccelAux {
    build_accel_with(info, builder, &AccelConfig::default())
}

/// Like [`build_accel`], with explicit thresholds.
pub fn build_accel_with(
    info: &AccelInfo,
    builder: &dyn MaskBuilder,
    config: &AccelConfig,
) -> AccelAux {
    match try_build_accel_with(info, builder, config) {
        Ok(aux) => aux,
        Err(err) => panic!("acceleration build failed: {}", err),
    }
}

/// Build the acceleration descriptor for `info`, reporting internal
/// consistency violations as errors.
pub fn try_build_accel(info: &AccelInfo, builder: &dyn MaskBuilder) -> Result<AccelAux, AccelError> {
    try_build_accel_with(info, builder, &AccelConfig::default())
}

/// Like [`try_build_accel`], with explicit thresholds.
pub fn try_build_accel_with(
    info: &AccelInfo,
    builder: &dyn MaskBuilder,
    config: &AccelConfig,
) -> Result<AccelAux, AccelError> {
    let mut aux = AccelAux::None;
    for (name, strategy) in STRATEGIES {
        if let Some(found) = strategy(info, builder, config)? {
            tracing::debug!(strategy = name, accel = %found, "picked acceleration");
            aux = found;
            break;
        }
    }

    check_offset(info, &aux)?;
    Ok(aux)
}

/// A descriptor's offset must come from the info it was built from.
fn check_offset(info: &AccelInfo, aux: &AccelAux) -> Result<(), AccelError> {
    match aux.offset() {
        Some(offset) if offset != info.single_offset && offset != info.double_offset => {
            Err(AccelError::OffsetMismatch {
                offset,
                single_offset: info.single_offset,
                double_offset: info.double_offset,
            })
        }
        _ => Ok(()),
    }
}
