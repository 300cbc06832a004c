use thiserror::Error;

/// Failures of schema lookup, compilation, or instance validation.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("no schema registered under '{0}'")]
    NotFound(String),

    /// The instance broke one or more schema rules; one message per rule.
    #[error("instance does not match schema: {}", errors.join("; "))]
    ValidationFailed { errors: Vec<String> },

    #[error("schema '{name}' does not compile: {reason}")]
    Compile { name: String, reason: String },
}
