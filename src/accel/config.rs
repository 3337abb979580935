//! Capacity thresholds for strategy selection.
//!
//! These must agree with the runtime scanner the descriptors are built for.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest stop set for which truffle is used.
///
/// Truffle can represent any set, but past this size its scan is no faster
/// than byte-at-a-time matching.
pub const TRUFFLE_MAX_STOP_CHARS: usize = 160;

/// Largest combined count of one-byte prefixes and two-byte pairs handled by
/// double shufti. Fixed: the double shufti mask builder only guarantees
/// success within this budget.
pub const DSHUFTI_MAX_STOPS: usize = 8;

/// Largest one-byte prefix set for which double shufti is preferred. Tuned
/// against the runtime's relative scan costs; not configurable.
pub const DSHUFTI_MAX_PREFIXES: usize = 2;

/// Configuration for descriptor construction.
///
/// Only the truffle capacity is tunable. The double shufti thresholds are
/// the constants [`DSHUFTI_MAX_STOPS`] and [`DSHUFTI_MAX_PREFIXES`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AccelConfig {
    /// Truffle capacity (default: [`TRUFFLE_MAX_STOP_CHARS`])
    pub truffle_max_stops: usize,
}

impl Default for AccelConfig {
    fn default() -> Self {
        Self {
            truffle_max_stops: TRUFFLE_MAX_STOP_CHARS,
        }
    }
}

impl AccelConfig {
    /// Set the truffle capacity.
    pub fn with_truffle_max_stops(mut self, max: usize) -> Self {
        self.truffle_max_stops = max;
        self
    }
}
