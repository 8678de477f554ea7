#![doc = r#"
⚠️ INTERNAL CRATE – NOT A STABLE API

This crate is an internal implementation detail of the hexlimb project.

Do NOT depend on this crate directly.
Use `hexlimb-io` instead.
"#]

pub mod array;
pub mod lines;
pub mod schema;
pub mod telemetry;

pub use schema::WordPacketV1;
