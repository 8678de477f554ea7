//! Wire format and schema version constants.

/// Bits per emitted word.
pub const WORD_BITS: usize = hexlimb_core::model::WORD_BITS;

/// Hex digits per emitted word.
pub const WORD_HEX_CHARS: usize = hexlimb_core::model::WORD_HEX_CHARS;

/// Word packet wire format version (the `v` field).
pub const WORD_PACKET_V: u8 = 1;

/// JSON Schema bundle version for on-disk schemas under `spec/schemas/`.
///
/// Bump this if the schema constraints change (even if `v` stays the same).
pub const SCHEMA_BUNDLE_V: u8 = 1;
