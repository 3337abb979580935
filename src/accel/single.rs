//! Single-position acceleration.

use super::config::AccelConfig;
use super::descriptor::AccelAux;
use crate::bytes::{case_fold, ByteSet};
use crate::masks::MaskBuilder;

/// Choose an acceleration for the stop set `stops` at `offset`.
///
/// Strategies are tried cheapest first:
///
/// 1. one stop byte: vermicelli
/// 2. the two case forms of one letter: caseless vermicelli
/// 3. shufti, if the builder can bucket the set
/// 4. truffle, if the set is within `config.truffle_max_stops`
///
/// Returns [`AccelAux::None`] if every byte is a stop byte or no strategy
/// fits. `stops` must not be empty; an empty set is red tape, which the
/// selector handles before calling this.
pub fn build_accel_single(
    stops: &ByteSet,
    offset: u32,
    builder: &dyn MaskBuilder,
    config: &AccelConfig,
) -> AccelAux {
    debug_assert!(!stops.is_empty(), "empty stop set is red tape");
    if stops.is_full() {
        return AccelAux::None;
    }

    let outs = stops.count();
    tracing::trace!(outs, "single-byte stops");

    let Some(first) = stops.first() else {
        return AccelAux::None;
    };

    if outs == 1 {
        tracing::debug!("building vermicelli caseful for 0x{:02x}", first);
        return AccelAux::Verm { offset, c: first };
    }

    if outs == 2 && stops.is_caseless_char() {
        let c = case_fold(first);
        tracing::debug!("building vermicelli caseless for 0x{:02x}", c);
        return AccelAux::VermNocase { offset, c };
    }

    tracing::trace!(outs, "attempting shufti");
    if let Some(masks) = builder.shufti_masks(stops) {
        tracing::debug!(outs, "shufti built");
        return AccelAux::Shufti { offset, masks };
    }
    tracing::debug!(outs, "shufti build failed, falling through");

    if outs <= config.truffle_max_stops {
        tracing::debug!(outs, "building truffle");
        let masks = builder.truffle_masks(stops);
        return AccelAux::Truffle { offset, masks };
    }

    tracing::debug!(outs, "unable to accelerate");
    AccelAux::None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accel::AccelType;
    use crate::masks::testing::FakeBuilder;

    fn single(stops: &ByteSet, builder: &FakeBuilder) -> AccelAux {
        build_accel_single(stops, 5, builder, &AccelConfig::default())
    }

    fn set(bytes: &[u8]) -> ByteSet {
        bytes.iter().copied().collect()
    }

    #[test]
    fn test_all_bytes_is_none() {
        let aux = single(&ByteSet::full(), &FakeBuilder::new());
        assert_eq!(aux, AccelAux::None);
    }

    #[test]
    fn test_one_byte_is_verm() {
        let aux = single(&set(&[0x00]), &FakeBuilder::new());
        assert_eq!(aux, AccelAux::Verm { offset: 5, c: 0x00 });

        let aux = single(&set(&[0xFF]), &FakeBuilder::new());
        assert_eq!(aux, AccelAux::Verm { offset: 5, c: 0xFF });
    }

    #[test]
    fn test_case_pair_is_verm_nocase() {
        let aux = single(&set(b"zZ"), &FakeBuilder::new());
        assert_eq!(aux, AccelAux::VermNocase { offset: 5, c: b'Z' });
    }

    #[test]
    fn test_non_letter_case_bit_pair_is_not_nocase() {
        // '@' and '`' differ only in the case bit
        let aux = single(&set(b"@`"), &FakeBuilder::new());
        assert_eq!(aux.accel_type(), AccelType::Shufti);
    }

    #[test]
    fn test_two_unrelated_bytes_use_shufti() {
        let aux = single(&set(b"ab"), &FakeBuilder::new());
        match aux {
            AccelAux::Shufti { offset, masks } => {
                assert_eq!(offset, 5);
                assert_eq!(masks.lo, [2; 16]);
            }
            other => panic!("expected shufti, got {:?}", other),
        }
    }

    #[test]
    fn test_shufti_failure_falls_back_to_truffle() {
        let stops = set(b"\n\r\t \"'<>&");
        let aux = single(&stops, &FakeBuilder::failing_shufti());
        match aux {
            AccelAux::Truffle { offset, masks } => {
                assert_eq!(offset, 5);
                assert_eq!(masks.mask1, [9; 16]);
            }
            other => panic!("expected truffle, got {:?}", other),
        }
    }

    #[test]
    fn test_truffle_capacity_boundary() {
        let builder = FakeBuilder::failing_shufti();
        let at_limit = ByteSet::from_range(0..=159);
        assert_eq!(at_limit.count(), 160);
        assert_eq!(single(&at_limit, &builder).accel_type(), AccelType::Truffle);

        let over_limit = ByteSet::from_range(0..=160);
        assert_eq!(single(&over_limit, &builder), AccelAux::None);
    }

    #[test]
    fn test_truffle_capacity_is_configurable() {
        let builder = FakeBuilder::failing_shufti();
        let config = AccelConfig::default().with_truffle_max_stops(3);
        let stops = set(b"abcd");
        assert_eq!(build_accel_single(&stops, 0, &builder, &config), AccelAux::None);
        let stops = set(b"abc");
        assert_eq!(
            build_accel_single(&stops, 0, &builder, &config).accel_type(),
            AccelType::Truffle
        );
    }

    #[test]
    fn test_large_set_prefers_shufti_over_truffle() {
        let stops = ByteSet::from_range(0..=200);
        let aux = single(&stops, &FakeBuilder::new());
        assert_eq!(aux.accel_type(), AccelType::Shufti);
    }
}
