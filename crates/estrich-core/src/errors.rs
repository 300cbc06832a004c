//! Error types for the classification core.
//!
//! Only contract violations by the caller surface as errors. Malformed
//! business data (unknown declared classes, out-of-range measurements,
//! structurally broken designations) is reported through verdicts, sentinel
//! strings, and accumulated error lists instead.

use thiserror::Error;

/// Errors raised by `estrich-core`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A required input field is missing or unusable.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A textual identifier did not match any known variant.
    #[error("Unknown {kind}: '{value}'")]
    UnknownVariant { kind: &'static str, value: String },
}

impl CoreError {
    pub(crate) fn unknown(kind: &'static str, value: &str) -> Self {
        Self::UnknownVariant {
            kind,
            value: value.to_string(),
        }
    }
}
