use hex_literal::hex;
use num_bigint::BigUint;

use hexlimb_core::consts::BLS12_381_SCALAR_MODULUS_HEX;
use hexlimb_core::input::parse_value;
use hexlimb_core::model::WordSplit;

fn modulus() -> BigUint {
    parse_value(BLS12_381_SCALAR_MODULUS_HEX).expect("constant must parse")
}

#[test]
fn golden_split_bls12_381_scalar_modulus() {
    let split = WordSplit::of(&modulus());

    assert_eq!(split.word_count(), 4);
    assert_eq!(
        split.chunks(),
        [
            "73eda753299d7d48",
            "3339d80809a1d805",
            "53bda402fffe5bfe",
            "ffffffff00000000",
        ]
    );
    assert_eq!(
        split.words(),
        [
            0x73eda753299d7d48,
            0x3339d80809a1d805,
            0x53bda402fffe5bfe,
            0xffffffff00000000,
        ]
    );
    assert_eq!(
        split.padded_hex(),
        "73eda753299d7d483339d80809a1d80553bda402fffe5bfeffffffff00000000"
    );
    assert_eq!(
        split.to_bytes_be(),
        hex!("73eda753299d7d483339d80809a1d80553bda402fffe5bfeffffffff00000000")
    );
    assert_eq!(split.value(), modulus());
}

#[test]
fn golden_split_matches_decimal_form() {
    let dec = parse_value(
        "52435875175126190479447740508185965837690552500527637822603658699938581184512",
    )
    .expect("decimal form must parse");
    assert_eq!(dec, modulus());
}

#[test]
fn zero_is_a_single_zero_word() {
    let split = WordSplit::of(&BigUint::from(0u8));
    assert_eq!(split.chunks(), ["0000000000000000"]);
    assert_eq!(split.words(), [0]);
    assert_eq!(split.padded_hex(), "0000000000000000");
}

#[test]
fn small_values_pad_to_one_word() {
    let one = WordSplit::of(&BigUint::from(1u8));
    assert_eq!(one.chunks(), ["0000000000000001"]);

    let max = WordSplit::of(&BigUint::from(u64::MAX));
    assert_eq!(max.chunks(), ["ffffffffffffffff"]);
}

#[test]
fn seventeen_hex_digits_take_two_words() {
    let value = parse_value("0x1_0000_0000_0000_0000").expect("literal must parse");
    let split = WordSplit::of(&value);
    assert_eq!(split.chunks(), ["0000000000000001", "0000000000000000"]);
}

#[test]
fn from_words_be_treats_empty_as_zero() {
    let split = WordSplit::from_words_be(vec![]);
    assert_eq!(split.words(), [0]);
    assert_eq!(split.value(), BigUint::from(0u8));
}
