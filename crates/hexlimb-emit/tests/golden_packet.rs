use hexlimb_core::consts::BLS12_381_SCALAR_MODULUS_HEX;
use hexlimb_core::input::parse_value;
use hexlimb_core::model::WordSplit;
use hexlimb_emit::schema::WordPacketV1;

fn modulus_packet() -> WordPacketV1 {
    let split = WordSplit::of(&parse_value(BLS12_381_SCALAR_MODULUS_HEX).expect("must parse"));
    WordPacketV1::from_split(&split)
}

#[test]
fn golden_packet_fields() {
    let packet = modulus_packet();
    assert_eq!(packet.v, 1);
    assert_eq!(packet.bits, 64);
    assert_eq!(
        packet.value,
        "73eda753299d7d483339d80809a1d80553bda402fffe5bfeffffffff00000000"
    );
    assert_eq!(
        packet.w,
        [
            "73eda753299d7d48",
            "3339d80809a1d805",
            "53bda402fffe5bfe",
            "ffffffff00000000",
        ]
    );
}

#[test]
fn golden_packet_minified_json() {
    assert_eq!(
        modulus_packet().to_minified_json().unwrap(),
        r#"{"v":1,"bits":64,"value":"73eda753299d7d483339d80809a1d80553bda402fffe5bfeffffffff00000000","w":["73eda753299d7d48","3339d80809a1d805","53bda402fffe5bfe","ffffffff00000000"]}"#
    );
}

#[test]
fn golden_packet_pretty_json() {
    assert_eq!(
        modulus_packet().to_pretty_json().unwrap(),
        r#"{
  "v": 1,
  "bits": 64,
  "value": "73eda753299d7d483339d80809a1d80553bda402fffe5bfeffffffff00000000",
  "w": [
    "73eda753299d7d48",
    "3339d80809a1d805",
    "53bda402fffe5bfe",
    "ffffffff00000000"
  ]
}"#
    );
}

#[test]
fn packet_json_round_trips() {
    let packet = modulus_packet();
    let json = packet.to_minified_json().unwrap();
    let back: WordPacketV1 = serde_json::from_str(&json).unwrap();
    assert_eq!(back, packet);
}
