//! # estrich-schema
//!
//! JSON Schema generation, validation, and registry for EstrichManager types.
//!
//! Value and response types are defined in `estrich-core` with
//! `#[derive(JsonSchema)]`. This crate collects their schemas so that
//! callers can export them (`estrich schema`) and validate untrusted input,
//! such as records of a batch evaluation file, before deserializing it.

mod error;
mod registry;

pub use error::SchemaError;
pub use registry::{CompiledSchema, SchemaRegistry};
