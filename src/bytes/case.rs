//! ASCII case-folding convention shared by the caseless strategies.
//!
//! Upper- and lower-case ASCII letters differ only in bit 5 (`0x20`):
//! `b'A' == 0x41`, `b'a' == 0x61`. Clearing that bit maps both forms onto the
//! upper-case byte, which is the canonical value stored in caseless
//! descriptors and compared against by the runtime scanner.

/// The bit that distinguishes upper- from lower-case ASCII letters.
pub const CASE_BIT: u8 = 0x20;

/// Mask that clears [`CASE_BIT`].
pub const CASE_CLEAR: u8 = !CASE_BIT;

/// Fold a byte to its canonical caseless form by clearing [`CASE_BIT`].
///
/// This is applied to any byte, not only letters; callers decide whether the
/// fold is meaningful for the set they are inspecting.
#[inline]
pub const fn case_fold(byte: u8) -> u8 {
    byte & CASE_CLEAR
}

/// Returns true if `a` and `b` are the two case forms of one ASCII letter.
#[inline]
pub const fn is_case_pair(a: u8, b: u8) -> bool {
    a != b && a.is_ascii_alphabetic() && case_fold(a) == case_fold(b)
}
