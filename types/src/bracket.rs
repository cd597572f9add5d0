//! Rank brackets: contiguous rank ranges with their own winner quota.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::TypesError;

/// A rank range `[min_rank, max_rank]` and how many winners to draw from it.
///
/// `max_rank = None` leaves the bracket open-ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bracket {
    pub name: String,
    pub min_rank: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_rank: Option<u32>,
    pub winner_count: u32,
}

impl Bracket {
    pub fn new(
        name: impl Into<String>,
        min_rank: u32,
        max_rank: Option<u32>,
        winner_count: u32,
    ) -> Self {
        Self {
            name: name.into(),
            min_rank,
            max_rank,
            winner_count,
        }
    }

    /// Bracket covering `min_rank..=max_rank`.
    pub fn bounded(name: impl Into<String>, min_rank: u32, max_rank: u32, winner_count: u32) -> Self {
        Self::new(name, min_rank, Some(max_rank), winner_count)
    }

    /// Bracket covering every rank from `min_rank` upwards.
    pub fn open_ended(name: impl Into<String>, min_rank: u32, winner_count: u32) -> Self {
        Self::new(name, min_rank, None, winner_count)
    }

    /// Whether `rank` falls inside this bracket (both ends inclusive).
    pub fn contains(&self, rank: u32) -> bool {
        rank >= self.min_rank && self.max_rank.map_or(true, |max| rank <= max)
    }

    pub fn validate(&self) -> Result<(), TypesError> {
        let invalid = |reason: &str| TypesError::InvalidBracket {
            name: self.name.clone(),
            reason: reason.to_string(),
        };

        if self.name.trim().is_empty() {
            return Err(invalid("name must not be empty"));
        }
        if self.min_rank == 0 {
            return Err(invalid("ranks start at 1"));
        }
        if let Some(max) = self.max_rank {
            if max < self.min_rank {
                return Err(invalid("max_rank is below min_rank"));
            }
        }
        if self.winner_count == 0 {
            return Err(invalid("winner_count must be positive"));
        }
        Ok(())
    }
}

impl fmt::Display for Bracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max_rank {
            Some(max) => write!(f, "{} [{}..={}] x{}", self.name, self.min_rank, max, self.winner_count),
            None => write!(f, "{} [{}..] x{}", self.name, self.min_rank, self.winner_count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounded_contains_is_inclusive() {
        let b = Bracket::bounded("Ranks 101-200", 101, 200, 25);
        assert!(!b.contains(100));
        assert!(b.contains(101));
        assert!(b.contains(200));
        assert!(!b.contains(201));
    }

    #[test]
    fn open_ended_has_no_upper_limit() {
        let b = Bracket::open_ended("Ranks 301+", 301, 10);
        assert!(!b.contains(300));
        assert!(b.contains(301));
        assert!(b.contains(u32::MAX));
    }

    #[test]
    fn validate_rejects_inverted_range() {
        let b = Bracket::bounded("bad", 10, 5, 1);
        assert!(matches!(b.validate(), Err(TypesError::InvalidBracket { .. })));
    }

    #[test]
    fn validate_rejects_zero_quota_and_rank() {
        assert!(Bracket::bounded("q", 1, 5, 0).validate().is_err());
        assert!(Bracket::bounded("r", 0, 5, 1).validate().is_err());
        assert!(Bracket::bounded(" ", 1, 5, 1).validate().is_err());
        assert!(Bracket::open_ended("ok", 1, 1).validate().is_ok());
    }

    #[test]
    fn open_ended_omits_max_rank_when_serialized() {
        let json = serde_json::to_value(Bracket::open_ended("tail", 301, 10)).unwrap();
        assert!(json.get("max_rank").is_none());

        let back: Bracket = serde_json::from_value(json).unwrap();
        assert_eq!(back.max_rank, None);
    }
}
