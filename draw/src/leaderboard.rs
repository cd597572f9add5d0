//! Leaderboard files and eligibility filtering.
//!
//! Leaderboard rows come from an indexer export and are loosely typed: the
//! address may be under `user_id` or `address`, points under
//! `totalPointsWithMultiplierRaw` (base units) or `totalPointsWithMultiplier`
//! (fixed-point), and numbers may be encoded as strings.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use tide_types::{Entry, Weight};

use crate::DrawError;

/// A JSON value that may be a number or a numeric string.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(serde_json::Number),
    Text(String),
}

impl Scalar {
    fn as_text(&self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s.trim().to_string(),
        }
    }
}

/// One row as found in `leaderboard.json`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct RawEntry {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default, rename = "totalPointsWithMultiplierRaw")]
    pub points_raw: Option<Scalar>,
    #[serde(default, rename = "totalPointsWithMultiplier")]
    pub points: Option<Scalar>,
    #[serde(default)]
    pub rank: Option<Scalar>,
    #[serde(default, alias = "isBlacklisted")]
    pub is_blacklisted: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
struct LeaderboardFile {
    #[serde(default)]
    leaderboard: Vec<RawEntry>,
}

/// Counts of rows kept and dropped by [`eligible_entries`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityStats {
    pub total_rows: usize,
    pub eligible: usize,
    pub blacklisted: usize,
    pub zero_weight: usize,
}

/// Eligible entries sorted by `(rank, address)`.
#[derive(Clone, Debug, PartialEq)]
pub struct EligibleSet {
    pub entries: Vec<Entry>,
    pub stats: EligibilityStats,
}

/// Read the `leaderboard` array of a leaderboard file.
pub fn load_leaderboard(path: &Path) -> Result<Vec<RawEntry>, DrawError> {
    if !path.exists() {
        return Err(DrawError::MissingLeaderboard(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path)?;
    let file: LeaderboardFile = serde_json::from_str(&content)?;
    Ok(file.leaderboard)
}

/// Normalize rows into draw entries.
///
/// Addresses are lowercased. Rows that are blacklisted (by flag or by the
/// `blacklist` set) or carry zero weight are dropped and counted. The result
/// is ordered by rank, ties broken by address, so the draw does not depend on
/// the export's row order.
pub fn eligible_entries(
    rows: &[RawEntry],
    blacklist: &HashSet<String>,
    weight_decimals: u32,
) -> Result<EligibleSet, DrawError> {
    let mut stats = EligibilityStats {
        total_rows: rows.len(),
        ..Default::default()
    };
    let mut entries = Vec::with_capacity(rows.len());

    for (index, row) in rows.iter().enumerate() {
        let invalid = |reason: String| DrawError::InvalidEntry { index, reason };

        let address = row
            .user_id
            .as_deref()
            .or(row.address.as_deref())
            .ok_or_else(|| invalid("missing user_id/address".into()))?
            .to_lowercase();

        let rank = row
            .rank
            .as_ref()
            .ok_or_else(|| invalid("missing rank".into()))?
            .as_text();
        let rank: u32 = match rank.parse() {
            Ok(r) if r > 0 => r,
            _ => return Err(invalid(format!("rank {rank:?} is not a positive integer"))),
        };

        let points = row
            .points_raw
            .as_ref()
            .or(row.points.as_ref())
            .map(Scalar::as_text)
            .unwrap_or_default();
        let weight = Weight::from_points(&points, weight_decimals)
            .map_err(|e| invalid(e.to_string()))?;

        if row.is_blacklisted.unwrap_or(false) || blacklist.contains(&address) {
            stats.blacklisted += 1;
            continue;
        }
        if weight.is_zero() {
            stats.zero_weight += 1;
            continue;
        }

        entries.push(Entry { address, weight, rank });
    }

    entries.sort_by(|a, b| a.rank.cmp(&b.rank).then_with(|| a.address.cmp(&b.address)));
    stats.eligible = entries.len();

    Ok(EligibleSet { entries, stats })
}
