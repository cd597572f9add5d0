//! A participant drawn from a bracket.

use serde::{Deserialize, Serialize};

use crate::Weight;

/// Created at draw time and never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Winner {
    pub address: String,
    pub rank: u32,
    pub weight: Weight,
    /// Name of the bracket this winner was drawn from.
    pub bracket: String,
    /// Share of the bracket's remaining weight this entry held when drawn, in percent.
    pub probability_percent: f64,
}
