//! Stake-weighted winner selection.
//!
//! Each bracket is drawn without replacement: every draw samples an integer
//! below the remaining pool's total weight and inverts the cumulative
//! distribution to find the winner, who then leaves the pool.
//!
//! Brackets share one random source and are processed strictly in the order
//! given. The source's position carries over from one bracket to the next, so
//! the bracket order is part of what a seed reproduces.

pub mod probability;
pub mod selector;

pub use probability::probability_percent;
pub use selector::{select_all, select_from_bracket};
