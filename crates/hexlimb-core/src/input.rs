use core::fmt;

use num_bigint::BigUint;
use num_traits::Zero;

/// A rejected value literal.
///
/// Parsing is strict and fail-fast: the first offending condition wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    /// Nothing left after trimming (or after the `0x` prefix).
    Empty,
    /// A leading `-`: negative values have no unsigned word form.
    Negative,
    /// Character outside `[0-9a-fA-F]` in a hex literal.
    InvalidHexDigit(char),
    /// Character outside `[0-9]` in a decimal literal.
    InvalidDecimalDigit(char),
}

impl InputError {
    /// Stable, machine-readable code for programmatic handling.
    pub const fn code(self) -> &'static str {
        match self {
            InputError::Empty => "empty",
            InputError::Negative => "negative",
            InputError::InvalidHexDigit(_) => "invalid_hex_digit",
            InputError::InvalidDecimalDigit(_) => "invalid_decimal_digit",
        }
    }
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Empty => f.write_str("empty value literal"),
            InputError::Negative => {
                f.write_str("negative values cannot be split into unsigned words")
            }
            InputError::InvalidHexDigit(c) => write!(f, "invalid hex digit '{c}'"),
            InputError::InvalidDecimalDigit(c) => write!(f, "invalid decimal digit '{c}'"),
        }
    }
}

impl std::error::Error for InputError {}

/// Parse a value literal: decimal, or hex with a `0x`/`0X` prefix.
///
/// ASCII whitespace around the literal and `_` separators inside it are
/// ignored, so constants can be pasted exactly as they appear in source files.
/// Hex digits may be either case on input; emitted forms are always lowercase.
pub fn parse_value(input: &str) -> Result<BigUint, InputError> {
    let trimmed = input.trim();
    if trimmed.starts_with('-') {
        return Err(InputError::Negative);
    }

    let (digits, radix) = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(rest) => (rest, 16u32),
        None => (trimmed, 10u32),
    };

    let mut acc = BigUint::zero();
    let mut seen = false;
    for c in digits.chars() {
        if c == '_' {
            continue;
        }
        let Some(d) = c.to_digit(radix) else {
            return Err(match radix {
                16 => InputError::InvalidHexDigit(c),
                _ => InputError::InvalidDecimalDigit(c),
            });
        };
        acc = acc * radix + d;
        seen = true;
    }

    if !seen {
        return Err(InputError::Empty);
    }
    Ok(acc)
}
