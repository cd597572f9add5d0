use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RandomError {
    #[error("invalid seed: {0}")]
    InvalidSeed(String),

    #[error("sample bound must be greater than zero")]
    InvalidBound,

    #[error("OS entropy source failed: {0}")]
    Entropy(String),
}
