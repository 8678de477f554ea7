use hexlimb_core::model::WordSplit;

/// Element order for array renderings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayOrder {
    /// Most significant first. Matches the printed line order.
    BigEndian,
    /// Least significant first. The limb order `from_raw`-style field
    /// constructors take.
    LittleEndian,
}

/// Digit base for array elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayBase {
    Hex,
    Decimal,
}

/// Render the words as a Rust array literal, e.g.
/// `[0x73eda753299d7d48, 0x3339d80809a1d805]`.
pub fn to_rust_array(split: &WordSplit, order: ArrayOrder, base: ArrayBase) -> String {
    let mut words: Vec<u64> = split.words().to_vec();
    if order == ArrayOrder::LittleEndian {
        words.reverse();
    }
    let rendered: Vec<String> = words
        .iter()
        .map(|w| match base {
            ArrayBase::Hex => format!("{w:#018x}"),
            ArrayBase::Decimal => w.to_string(),
        })
        .collect();
    format!("[{}]", rendered.join(", "))
}

/// Render the byte form (8 bytes per word) as a Rust byte-array literal,
/// e.g. `[0x73, 0xed, ...]`.
pub fn to_byte_array(split: &WordSplit, order: ArrayOrder) -> String {
    let mut bytes = split.to_bytes_be();
    if order == ArrayOrder::LittleEndian {
        bytes.reverse();
    }
    let rendered: Vec<String> = bytes.iter().map(|b| format!("{b:#04x}")).collect();
    format!("[{}]", rendered.join(", "))
}
