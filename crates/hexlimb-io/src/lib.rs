//! `hexlimb-io` is the single supported public entrypoint for splitting
//! arbitrary-precision integer constants into fixed-width 64-bit words and
//! emitting them in embeddable textual forms (prefixed lines, word packets,
//! array literals).
//!
//! This crate intentionally contains **no** arithmetic beyond what the split
//! itself needs. It focuses on:
//! - stable types
//! - deterministic output
//! - verification helpers

// -----------------------------------------------------------------------------
// Public API contract
// -----------------------------------------------------------------------------
//
// Consumers SHOULD import from `hexlimb_io::prelude::*`.
// Anything not re-exported via the prelude is considered internal and may change
// without notice.

// Re-export the word-split model and value parsing.
#[doc(hidden)]
pub mod core {
    pub use hexlimb_core::consts::BLS12_381_SCALAR_MODULUS_HEX;
    pub use hexlimb_core::input::{InputError, parse_value};
    pub use hexlimb_core::model::{WORD_BITS, WORD_HEX_CHARS, WordSplit};
}

/// Version constants for wire formats and CI gating.
pub mod version;

// Re-export the emitted forms.
#[doc(hidden)]
pub mod emit {
    pub use hexlimb_emit::array::{ArrayBase, ArrayOrder, to_byte_array, to_rust_array};
    pub use hexlimb_emit::lines::{LineError, parse_prefixed_lines, to_prefixed_lines};
    pub use hexlimb_emit::schema::WordPacketV1;
    pub use hexlimb_emit::telemetry::SplitTelemetry;
}

/// Convenience prelude for consumers.
///
/// This is the **only supported** import surface for external users.
pub mod prelude {
    pub use crate::core::{InputError, WordSplit, parse_value};
    pub use crate::emit::{LineError, WordPacketV1, parse_prefixed_lines, to_prefixed_lines};
    pub use crate::version;
}
