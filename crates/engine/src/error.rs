//! Error types for the recommendation engine.
//!
//! The engine is total over well-formed input, so the only failures are
//! inputs it refuses to interpret. An empty result is not an error.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// A request field is malformed, non-finite or out of range
    #[error("Invalid input for {field}: {value}")]
    InvalidInput { field: String, value: String },

    /// The engine was configured with unusable settings
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl EngineError {
    pub(crate) fn invalid_input(field: &str, value: impl ToString) -> Self {
        EngineError::InvalidInput {
            field: field.to_string(),
            value: value.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
