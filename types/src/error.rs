//! Validation errors for the shared types.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypesError {
    #[error("invalid weight {value:?}: {reason}")]
    InvalidWeight { value: String, reason: String },

    #[error("invalid bracket {name:?}: {reason}")]
    InvalidBracket { name: String, reason: String },
}
