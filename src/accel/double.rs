//! Double-position acceleration.

use super::config::{DSHUFTI_MAX_PREFIXES, DSHUFTI_MAX_STOPS};
use super::descriptor::AccelAux;
use super::error::AccelError;
use super::info::AccelInfo;
use crate::bytes::{case_fold, BytePairSet};
use crate::masks::MaskBuilder;

/// Returns true if `pairs` is exactly `{(A,B), (A,b), (a,B), (a,b)}` for some
/// bytes `A` and `B`, where lower case denotes the case-bit-set form.
///
/// Four distinct pairs that all fold to the same folded pair can only be the
/// four case combinations, so checking the fold of every member suffices.
pub fn is_caseless_double(pairs: &BytePairSet) -> bool {
    if pairs.len() != 4 {
        return false;
    }
    let Some((first, second)) = pairs.first() else {
        return false;
    };
    let (a, b) = (case_fold(first), case_fold(second));
    pairs
        .iter()
        .all(|(c1, c2)| case_fold(c1) == a && case_fold(c2) == b)
}

/// Choose a double-byte acceleration for `info`, or decline with `Ok(None)`.
///
/// Declining means double-byte acceleration is unavailable or not worth it
/// here; the caller falls back to single-byte acceleration.
///
/// # Errors
///
/// [`AccelError::DoubleOffsetOutOfRange`] if `info.double_offset` does not
/// fit in a `u8`.
pub fn build_accel_double(
    info: &AccelInfo,
    builder: &dyn MaskBuilder,
) -> Result<Option<AccelAux>, AccelError> {
    let outs1 = info.double_stop1.count();
    let outs2 = info.double_stop2.len();
    let offset = u8::try_from(info.double_offset).map_err(|_| {
        AccelError::DoubleOffsetOutOfRange {
            offset: info.double_offset,
        }
    })?;
    tracing::trace!(outs1, outs2, "double-byte stops");

    let Some((first, second)) = info.double_stop2.first() else {
        // no double byte accel available
        return Ok(None);
    };

    if outs1 == 0 && outs2 == 1 {
        tracing::debug!(
            "building double-vermicelli caseful for 0x{:02x}{:02x}",
            first,
            second
        );
        return Ok(Some(AccelAux::Dverm {
            offset,
            c1: first,
            c2: second,
        }));
    }

    if outs1 == 0 && is_caseless_double(&info.double_stop2) {
        let (c1, c2) = (case_fold(first), case_fold(second));
        tracing::debug!(
            "building double-vermicelli caseless for 0x{:02x}{:02x}",
            c1,
            c2
        );
        return Ok(Some(AccelAux::DvermNocase { offset, c1, c2 }));
    }

    // Double shufti only pays off when the one-byte prefix set is small and
    // the pair set is comparatively rich.
    if outs1 + outs2 <= DSHUFTI_MAX_STOPS && outs1 < outs2 && outs1 <= DSHUFTI_MAX_PREFIXES {
        tracing::debug!(
            "building double-shufti for {} one-byte and {} two-byte literals",
            outs1,
            outs2
        );
        let masks = builder.double_shufti_masks(&info.double_stop1, &info.double_stop2);
        return Ok(Some(AccelAux::Dshufti { offset, masks }));
    }

    tracing::debug!("dropping back to single-byte acceleration");
    Ok(None)
}
