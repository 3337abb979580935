//! Internal-consistency errors raised while building a descriptor.

use core::fmt;

/// A violated precondition or postcondition of descriptor construction.
///
/// None of these are recoverable: they indicate a defect in the producer of
/// the [`AccelInfo`](super::AccelInfo) or in the strategy code itself.
/// [`build_accel`](super::build_accel) panics on them;
/// [`try_build_accel`](super::try_build_accel) returns them so a compiler
/// driver can attach its own context before aborting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccelError {
    /// `double_offset` does not fit the descriptor's 8-bit offset field.
    DoubleOffsetOutOfRange { offset: u32 },
    /// The built descriptor carries an offset that came from neither
    /// position of the input.
    OffsetMismatch {
        offset: u32,
        single_offset: u32,
        double_offset: u32,
    },
}

impl fmt::Display for AccelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DoubleOffsetOutOfRange { offset } => {
                write!(f, "double offset {} does not fit in a u8", offset)
            }
            Self::OffsetMismatch {
                offset,
                single_offset,
                double_offset,
            } => write!(
                f,
                "descriptor offset {} matches neither single offset {} nor double offset {}",
                offset, single_offset, double_offset
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AccelError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_display() {
        assert_eq!(
            AccelError::DoubleOffsetOutOfRange { offset: 256 }.to_string(),
            "double offset 256 does not fit in a u8"
        );
        assert_eq!(
            AccelError::OffsetMismatch {
                offset: 9,
                single_offset: 1,
                double_offset: 2
            }
            .to_string(),
            "descriptor offset 9 matches neither single offset 1 nor double offset 2"
        );
    }
}
