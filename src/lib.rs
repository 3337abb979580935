//! # Stopscan
//!
//! Compile-time selection of vectorized skip strategies for automaton states.
//!
//! While a pattern matcher sits in a state whose only way forward is a small
//! set of "stop" bytes, it can skip input with a vectorized search instead of
//! stepping byte by byte. This crate decides, once per state and ahead of
//! time, which search primitive to use and how to parameterize it.
//!
//! ## Module Organization
//!
//! - [`bytes`] - Byte sets, byte-pair sets and the case-folding convention
//! - [`masks`] - Classification mask types and the [`MaskBuilder`] capability
//! - [`accel`] - Strategy selection producing an [`AccelAux`] descriptor
//!
//! ## Strategies
//!
//! | Descriptor | Scan |
//! |------------|------|
//! | `RedTape` | unconditional advance |
//! | `Verm` / `VermNocase` | one byte (or one letter, caseless) |
//! | `Dverm` / `DvermNocase` | one two-byte sequence |
//! | `Shufti` / `Dshufti` | nibble-bucket classification at one or two positions |
//! | `Truffle` | higher-capacity classification |
//! | `None` | no acceleration |
//!
//! ## Features
//!
//! - `std` (default) - `std::error::Error` for [`AccelError`], tracing std support
//! - `serde` - Enable serialization/deserialization support

// Use no_std unless std feature is enabled or we're in test mode
#![cfg_attr(not(any(test, feature = "std")), no_std)]

// When using no_std, we need to explicitly link the alloc crate
#[cfg(not(any(test, feature = "std")))]
extern crate alloc;

// When using std, re-export alloc types from std for compatibility
#[cfg(any(test, feature = "std"))]
extern crate std as alloc;

// =============================================================================
// Core modules
// =============================================================================

/// Byte-value sets describing stop conditions.
pub mod bytes;

/// Classification masks and the builder capability.
pub mod masks;

// =============================================================================
// Application modules
// =============================================================================

/// Acceleration strategy selection.
pub mod accel;

// =============================================================================
// Public re-exports
// =============================================================================

pub use accel::{
    build_accel, build_accel_with, try_build_accel, try_build_accel_with, AccelAux, AccelConfig,
    AccelError, AccelInfo, AccelType, DSHUFTI_MAX_PREFIXES, DSHUFTI_MAX_STOPS,
    TRUFFLE_MAX_STOP_CHARS,
};
pub use bytes::{ByteSet, BytePairSet};
pub use masks::{DoubleShuftiMasks, MaskBuilder, ShuftiMasks, TruffleMasks};
