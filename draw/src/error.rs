use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DrawError {
    #[error("random source error: {0}")]
    Random(#[from] tide_random::RandomError),

    #[error("invalid data: {0}")]
    Types(#[from] tide_types::TypesError),

    #[error("config error: {0}")]
    Config(String),

    #[error("leaderboard not found at {0}")]
    MissingLeaderboard(PathBuf),

    #[error("winners report not found at {0}")]
    MissingReport(PathBuf),

    #[error("invalid leaderboard row {index}: {reason}")]
    InvalidEntry { index: usize, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
