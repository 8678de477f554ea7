use num_bigint::BigUint;
use num_traits::Zero;

/// Hex digits per 64-bit word.
pub const WORD_HEX_CHARS: usize = 16;

/// Bits per word.
pub const WORD_BITS: usize = 64;

/// A non-negative integer split into 64-bit words, most significant word first.
///
/// The split is total over `BigUint`: zero is a single zero word, and every other
/// value takes exactly as many words as its bit length requires. Nothing mutates
/// after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSplit {
    words: Vec<u64>,
}

impl WordSplit {
    /// Split a value into big-endian 64-bit words.
    pub fn of(value: &BigUint) -> Self {
        // `to_u64_digits` is least-significant-first and empty for zero.
        let mut words = value.to_u64_digits();
        if words.is_empty() {
            words.push(0);
        }
        words.reverse();
        Self { words }
    }

    /// Rebuild a split from words already in most-significant-first order.
    ///
    /// An empty slice is treated as zero, preserving the one-word-minimum
    /// invariant.
    pub fn from_words_be(words: Vec<u64>) -> Self {
        if words.is_empty() {
            return Self { words: vec![0] };
        }
        Self { words }
    }

    /// Words in most-significant-first order.
    pub fn words(&self) -> &[u64] {
        &self.words
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// One 16-char lowercase hex chunk per word, most significant first.
    pub fn chunks(&self) -> Vec<String> {
        self.words.iter().map(|w| format!("{w:016x}")).collect()
    }

    /// The chunks concatenated: the zero-padded hex form of the whole value.
    ///
    /// Length is always a multiple of [`WORD_HEX_CHARS`], minimum one word.
    pub fn padded_hex(&self) -> String {
        self.chunks().concat()
    }

    /// Big-endian bytes, 8 per word.
    pub fn to_bytes_be(&self) -> Vec<u8> {
        self.words.iter().flat_map(|w| w.to_be_bytes()).collect()
    }

    /// Reconstruct the value the words represent.
    pub fn value(&self) -> BigUint {
        let mut acc = BigUint::zero();
        for &w in &self.words {
            acc = (acc << WORD_BITS) | BigUint::from(w);
        }
        acc
    }
}
