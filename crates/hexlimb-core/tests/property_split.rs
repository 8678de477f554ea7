use num_bigint::BigUint;
use proptest::prelude::*;

use hexlimb_core::input::parse_value;
use hexlimb_core::model::WordSplit;

proptest! {
    #[test]
    fn split_round_trips_any_u128(x in any::<u128>()) {
        let value = BigUint::from(x);
        let split = WordSplit::of(&value);

        let expected_words = if x == 0 {
            1
        } else {
            (128 - x.leading_zeros() as usize).div_ceil(64)
        };
        prop_assert_eq!(split.word_count(), expected_words);

        for chunk in split.chunks() {
            prop_assert_eq!(chunk.len(), 16);
            prop_assert!(chunk.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
        }

        let rebuilt = BigUint::parse_bytes(split.padded_hex().as_bytes(), 16).unwrap();
        prop_assert_eq!(rebuilt, value);
    }

    #[test]
    fn split_is_idempotent(x in any::<u128>()) {
        let split = WordSplit::of(&BigUint::from(x));
        let again = WordSplit::of(&split.value());
        prop_assert_eq!(again, split);
    }

    #[test]
    fn decimal_literals_parse(s in "[0-9]{1,40}") {
        let parsed = parse_value(&s).unwrap();
        let oracle = BigUint::parse_bytes(s.as_bytes(), 10).unwrap();
        prop_assert_eq!(parsed, oracle);
    }

    #[test]
    fn hex_literals_parse(s in "[0-9a-fA-F]{1,40}") {
        let parsed = parse_value(&format!("0x{s}")).unwrap();
        let oracle = BigUint::parse_bytes(s.to_lowercase().as_bytes(), 16).unwrap();
        prop_assert_eq!(parsed, oracle);
    }
}
