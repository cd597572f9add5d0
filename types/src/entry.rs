//! Leaderboard entry eligible for a draw.

use serde::{Deserialize, Serialize};

use crate::Weight;

/// One eligible participant.
///
/// The address is expected to be lowercase-normalized by whoever builds the
/// entry; the draw treats it as an opaque identifier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub address: String,
    pub weight: Weight,
    /// 1-based leaderboard position.
    pub rank: u32,
}

impl Entry {
    pub fn new(address: impl Into<String>, weight: impl Into<Weight>, rank: u32) -> Self {
        Self {
            address: address.into(),
            weight: weight.into(),
            rank,
        }
    }
}
