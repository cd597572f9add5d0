//! Tide draw pipeline.
//!
//! Wraps the in-memory selection core with the file handling a draw needs:
//!
//! 1. Load `<tides_dir>/<epoch>/leaderboard.json` and an optional blacklist.
//! 2. Reduce the leaderboard to eligible entries (not blacklisted, positive
//!    weight), sorted by rank.
//! 3. Key a [`tide_random::SeededRandom`] with the supplied or a freshly
//!    generated seed and draw every configured bracket.
//! 4. Write `<tides_dir>/<epoch>/winners.json`, recording the seed so anyone
//!    can replay the draw with [`verify_draw`].

pub mod blacklist;
pub mod config;
pub mod error;
pub mod leaderboard;
pub mod report;
pub mod runner;

pub use blacklist::load_blacklist;
pub use config::DrawConfig;
pub use error::DrawError;
pub use leaderboard::{eligible_entries, load_leaderboard, EligibilityStats, EligibleSet, RawEntry};
pub use report::{BracketSummary, SeedSource, WinnersReport};
pub use runner::{draw_winners, run_draw, verify_draw, DrawOutcome, Verification};
