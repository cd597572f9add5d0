//! Fundamental types for Tide draws.
//!
//! This crate defines the data shared by every other crate in the workspace:
//! stake weights, leaderboard entries, rank brackets, drawn winners and
//! timestamps.

pub mod bracket;
pub mod entry;
pub mod error;
pub mod time;
pub mod weight;
pub mod winner;

pub use bracket::Bracket;
pub use entry::Entry;
pub use error::TypesError;
pub use time::Timestamp;
pub use weight::Weight;
pub use winner::Winner;
