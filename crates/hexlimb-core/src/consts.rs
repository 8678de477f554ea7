//! Well-known constants worth splitting.

/// BLS12-381 scalar field modulus. The CLI's default input.
pub const BLS12_381_SCALAR_MODULUS_HEX: &str =
    "0x73eda753299d7d483339d80809a1d80553bda402fffe5bfeffffffff00000000";
