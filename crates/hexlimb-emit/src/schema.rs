use serde::{Deserialize, Serialize};

use hexlimb_core::model::WordSplit;

/// Word packet v1: the JSON wire form of a word split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordPacketV1 {
    /// Version (const = 1)
    pub v: u8,
    /// Bits per word (const = 64)
    pub bits: u8,
    /// Zero-padded hex form of the whole value (the chunks concatenated).
    pub value: String,
    /// Words as 16-char lowercase hex, most significant first.
    pub w: Vec<String>,
}

impl WordPacketV1 {
    /// Build a v1 packet from a split.
    pub fn from_split(split: &WordSplit) -> Self {
        Self {
            v: 1,
            bits: 64,
            value: split.padded_hex(),
            w: split.chunks(),
        }
    }

    /// Serialize as minified JSON (no whitespace).
    pub fn to_minified_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serialize as pretty JSON (for humans and golden files).
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
