//! The acceleration descriptor produced for one automaton state.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::masks::{DoubleShuftiMasks, ShuftiMasks, TruffleMasks};

/// Discriminant of an [`AccelAux`], used by the runtime scanner to dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum AccelType {
    None,
    RedTape,
    Verm,
    VermNocase,
    Dverm,
    DvermNocase,
    Shufti,
    Dshufti,
    Truffle,
}

impl AccelType {
    /// Short lowercase name used in debug dumps.
    pub const fn name(self) -> &'static str {
        match self {
            AccelType::None => "none",
            AccelType::RedTape => "red_tape",
            AccelType::Verm => "verm",
            AccelType::VermNocase => "verm_nocase",
            AccelType::Dverm => "dverm",
            AccelType::DvermNocase => "dverm_nocase",
            AccelType::Shufti => "shufti",
            AccelType::Dshufti => "dshufti",
            AccelType::Truffle => "truffle",
        }
    }
}

impl fmt::Display for AccelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How the runtime scanner may skip ahead from a state.
///
/// Each variant carries exactly the payload its scan loop needs. `offset` is
/// the lookahead distance, in bytes from the scan cursor, at which the stop
/// condition is evaluated. Double-byte variants store it as a `u8`, matching
/// the width the runtime reserves for it.
///
/// Caseless variants hold case-folded bytes (see [`crate::bytes::case_fold`]).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AccelAux {
    /// No accelerated skip; scan byte-at-a-time.
    #[default]
    None,
    /// No byte at `offset` can stop the skip; advance unconditionally.
    RedTape { offset: u32 },
    /// Search for the single byte `c`.
    Verm { offset: u32, c: u8 },
    /// Search for either case form of the letter `c`.
    VermNocase { offset: u32, c: u8 },
    /// Search for the two-byte sequence `c1 c2`.
    Dverm { offset: u8, c1: u8, c2: u8 },
    /// Search for `c1 c2` with each byte matched caselessly.
    DvermNocase { offset: u8, c1: u8, c2: u8 },
    /// Classify bytes with single-position shufti.
    Shufti { offset: u32, masks: ShuftiMasks },
    /// Classify byte pairs with double-position shufti.
    Dshufti { offset: u8, masks: DoubleShuftiMasks },
    /// Classify bytes with truffle.
    Truffle { offset: u32, masks: TruffleMasks },
}

impl AccelAux {
    /// Discriminant the runtime scanner dispatches on.
    pub fn accel_type(&self) -> AccelType {
        match self {
            AccelAux::None => AccelType::None,
            AccelAux::RedTape { .. } => AccelType::RedTape,
            AccelAux::Verm { .. } => AccelType::Verm,
            AccelAux::VermNocase { .. } => AccelType::VermNocase,
            AccelAux::Dverm { .. } => AccelType::Dverm,
            AccelAux::DvermNocase { .. } => AccelType::DvermNocase,
            AccelAux::Shufti { .. } => AccelType::Shufti,
            AccelAux::Dshufti { .. } => AccelType::Dshufti,
            AccelAux::Truffle { .. } => AccelType::Truffle,
        }
    }

    /// Lookahead offset, or `None` for [`AccelAux::None`].
    pub fn offset(&self) -> Option<u32> {
        match *self {
            AccelAux::None => None,
            AccelAux::RedTape { offset }
            | AccelAux::Verm { offset, .. }
            | AccelAux::VermNocase { offset, .. }
            | AccelAux::Shufti { offset, .. }
            | AccelAux::Truffle { offset, .. } => Some(offset),
            AccelAux::Dverm { offset, .. }
            | AccelAux::DvermNocase { offset, .. }
            | AccelAux::Dshufti { offset, .. } => Some(u32::from(offset)),
        }
    }

    /// Returns true for every variant except [`AccelAux::None`].
    #[inline]
    pub fn is_accelerated(&self) -> bool {
        !matches!(self, AccelAux::None)
    }
}

impl fmt::Display for AccelAux {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = self.accel_type();
        match *self {
            AccelAux::None => write!(f, "{}", kind),
            AccelAux::RedTape { offset }
            | AccelAux::Shufti { offset, .. }
            | AccelAux::Truffle { offset, .. } => write!(f, "{} +{}", kind, offset),
            AccelAux::Dshufti { offset, .. } => write!(f, "{} +{}", kind, offset),
            AccelAux::Verm { offset, c } | AccelAux::VermNocase { offset, c } => {
                write!(f, "{} 0x{:02x} +{}", kind, c, offset)
            }
            AccelAux::Dverm { offset, c1, c2 } | AccelAux::DvermNocase { offset, c1, c2 } => {
                write!(f, "{} 0x{:02x}{:02x} +{}", kind, c1, c2, offset)
            }
        }
    }
}
