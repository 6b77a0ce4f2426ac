use proptest::prelude::*;

use compete_types::{Address, Amount, SignatureParts, Timestamp, H256};

proptest! {
    /// Address display output parses back to the same address.
    #[test]
    fn address_display_parses_back(bytes in prop::array::uniform20(0u8..)) {
        let addr = Address::new(bytes);
        let parsed: Address = addr.to_string().parse().unwrap();
        prop_assert_eq!(parsed, addr);
    }

    /// H256 display output parses back to the same digest.
    #[test]
    fn h256_display_parses_back(bytes in prop::array::uniform32(0u8..)) {
        let h = H256::new(bytes);
        let parsed: H256 = h.to_string().parse().unwrap();
        prop_assert_eq!(parsed, h);
    }

    /// Address::is_zero is true only for all-zero bytes.
    #[test]
    fn address_is_zero_correct(bytes in prop::array::uniform20(0u8..)) {
        prop_assert_eq!(Address::new(bytes).is_zero(), bytes == [0u8; 20]);
    }

    /// Exactly four values of `v` resolve to a recovery id.
    #[test]
    fn recovery_id_domain(v in 0u8..=255) {
        let sig = SignatureParts::new(v, H256::ZERO, H256::ZERO);
        let expected = matches!(v, 0 | 1 | 27 | 28);
        prop_assert_eq!(sig.recovery_id().is_some(), expected);
        if let Some(id) = sig.recovery_id() {
            prop_assert!(id <= 1);
        }
    }

    /// Timestamp ordering: new(a) <= new(b) iff a <= b.
    #[test]
    fn timestamp_ordering(a in 0u64..u64::MAX, b in 0u64..u64::MAX) {
        let ta = Timestamp::new(a);
        let tb = Timestamp::new(b);
        prop_assert_eq!(ta <= tb, a <= b);
        prop_assert_eq!(ta == tb, a == b);
    }

    /// Nothing remains exactly once the end time has been reached.
    #[test]
    fn remaining_is_zero_from_end(start in 0u64..1_000_000, dur in 0u64..1_000_000, now in 0u64..3_000_000) {
        let end = Timestamp::new(start).checked_add_secs(dur).unwrap();
        let now = Timestamp::new(now);
        prop_assert_eq!(end.remaining_from(now) == 0, now >= end);
    }

    /// checked_add and checked_sub on amounts are inverse when both succeed.
    #[test]
    fn amount_add_sub_inverse(a in 0u128..u64::MAX as u128, b in 0u128..u64::MAX as u128) {
        let sum = Amount::new(a).checked_add(Amount::new(b)).unwrap();
        prop_assert_eq!(sum.checked_sub(Amount::new(b)), Some(Amount::new(a)));
    }
}
