//! Byte-value sets used to describe stop conditions.
//!
//! - [`ByteSet`] - a 256-bit set of byte values
//! - [`BytePairSet`] - an ordered set of two-byte sequences
//! - [`case`] - the ASCII case-folding convention shared by caseless strategies

pub mod case;
mod pairs;
mod set;

pub use case::{case_fold, CASE_BIT, CASE_CLEAR};
pub use pairs::BytePairSet;
pub use set::{ByteSet, Iter};
