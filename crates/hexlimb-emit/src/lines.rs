use core::fmt;

use hexlimb_core::model::{WORD_HEX_CHARS, WordSplit};

/// Render a split as `0x`-prefixed lines, one word per line, most significant
/// first, each line newline-terminated. No blank lines.
pub fn to_prefixed_lines(split: &WordSplit) -> String {
    let mut out = String::with_capacity(split.word_count() * (WORD_HEX_CHARS + 3));
    for chunk in split.chunks() {
        out.push_str("0x");
        out.push_str(&chunk);
        out.push('\n');
    }
    out
}

/// A line that cannot be read back as a word.
///
/// `line` is 1-based. Verification is exact: emitted chunks are lowercase, so
/// uppercase digits are rejected rather than normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineError {
    /// No word lines at all.
    Empty,
    /// Line does not start with `0x`.
    MissingPrefix { line: usize },
    /// Wrong number of hex digits after the prefix.
    BadWidth { line: usize, len: usize },
    /// Character outside `[0-9a-f]` after the prefix.
    BadDigit { line: usize, ch: char },
}

impl LineError {
    /// Stable, machine-readable code for programmatic handling.
    pub const fn code(self) -> &'static str {
        match self {
            LineError::Empty => "empty",
            LineError::MissingPrefix { .. } => "missing_prefix",
            LineError::BadWidth { .. } => "bad_width",
            LineError::BadDigit { .. } => "bad_digit",
        }
    }
}

impl fmt::Display for LineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineError::Empty => f.write_str("no word lines found"),
            LineError::MissingPrefix { line } => {
                write!(f, "line {line}: missing '0x' prefix")
            }
            LineError::BadWidth { line, len } => {
                write!(
                    f,
                    "line {line}: expected {WORD_HEX_CHARS} hex digits, got {len}"
                )
            }
            LineError::BadDigit { line, ch } => {
                write!(f, "line {line}: invalid lowercase hex digit '{ch}'")
            }
        }
    }
}

impl std::error::Error for LineError {}

/// Parse text previously produced by [`to_prefixed_lines`].
///
/// Blank lines and surrounding whitespace are tolerated; every other line must
/// be exactly `0x` plus 16 lowercase hex digits.
pub fn parse_prefixed_lines(text: &str) -> Result<WordSplit, LineError> {
    let mut words = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let s = raw.trim();
        if s.is_empty() {
            continue;
        }
        let Some(body) = s.strip_prefix("0x") else {
            return Err(LineError::MissingPrefix { line });
        };
        if body.len() != WORD_HEX_CHARS {
            return Err(LineError::BadWidth {
                line,
                len: body.len(),
            });
        }
        let mut word: u64 = 0;
        for ch in body.chars() {
            let d = match ch {
                '0'..='9' => ch as u64 - '0' as u64,
                'a'..='f' => ch as u64 - 'a' as u64 + 10,
                _ => return Err(LineError::BadDigit { line, ch }),
            };
            word = (word << 4) | d;
        }
        words.push(word);
    }
    if words.is_empty() {
        return Err(LineError::Empty);
    }
    Ok(WordSplit::from_words_be(words))
}
