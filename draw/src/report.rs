//! The winners file written after a draw.

use serde::{Deserialize, Serialize};
use std::path::Path;

use tide_types::{Bracket, Entry, Timestamp, Weight, Winner};

use crate::{DrawError, EligibilityStats};

/// Whether the seed was supplied by the operator or generated for the run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeedSource {
    Provided,
    Generated,
}

/// Per-bracket totals, computed over the eligible entries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketSummary {
    pub name: String,
    pub participants: usize,
    pub total_weight: Weight,
    pub winners_selected: usize,
}

impl BracketSummary {
    pub fn compute(bracket: &Bracket, entries: &[Entry], winners: &[Winner]) -> Self {
        let participants: Vec<&Entry> = entries.iter().filter(|e| bracket.contains(e.rank)).collect();
        Self {
            name: bracket.name.clone(),
            participants: participants.len(),
            total_weight: participants.iter().map(|e| &e.weight).sum(),
            winners_selected: winners.iter().filter(|w| w.bracket == bracket.name).count(),
        }
    }
}

/// Everything needed to audit and replay a draw.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WinnersReport {
    pub epoch_id: u64,
    pub generated_at: Timestamp,
    /// The seed exactly as used, so the draw can be replayed.
    pub seed: String,
    pub seed_source: SeedSource,
    pub eligibility: EligibilityStats,
    pub total_participants: usize,
    pub total_winners: usize,
    pub brackets: Vec<BracketSummary>,
    pub winners: Vec<Winner>,
}

impl WinnersReport {
    /// Write the report as pretty JSON, creating parent directories.
    pub fn write(&self, path: &Path) -> Result<(), DrawError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn read(path: &Path) -> Result<Self, DrawError> {
        if !path.exists() {
            return Err(DrawError::MissingReport(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn winner(address: &str, bracket: &str) -> Winner {
        Winner {
            address: address.into(),
            rank: 1,
            weight: Weight::from(1),
            bracket: bracket.into(),
            probability_percent: 12.5,
        }
    }

    #[test]
    fn summary_counts_only_its_bracket() {
        let entries = vec![
            Entry::new("0x1", 10u64, 1),
            Entry::new("0x2", 20u64, 2),
            Entry::new("0x3", 30u64, 3),
        ];
        let bracket = Bracket::bounded("Ranks 1-2", 1, 2, 5);
        let winners = vec![winner("0x1", "Ranks 1-2"), winner("0x3", "Ranks 3+")];

        let summary = BracketSummary::compute(&bracket, &entries, &winners);
        assert_eq!(summary.participants, 2);
        assert_eq!(summary.total_weight, Weight::from(30));
        assert_eq!(summary.winners_selected, 1);
    }

    #[test]
    fn report_survives_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("7").join("winners.json");
        let report = WinnersReport {
            epoch_id: 7,
            generated_at: Timestamp::new(1_700_000_000),
            seed: "0xabcd".into(),
            seed_source: SeedSource::Provided,
            eligibility: EligibilityStats::default(),
            total_participants: 0,
            total_winners: 1,
            brackets: vec![],
            winners: vec![winner("0x1", "b")],
        };

        report.write(&path).unwrap();
        assert_eq!(WinnersReport::read(&path).unwrap(), report);

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["seed_source"], "provided");
        assert_eq!(json["winners"][0]["weight"], "1");
    }

    #[test]
    fn missing_report_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let err = WinnersReport::read(&dir.path().join("winners.json")).unwrap_err();
        assert!(matches!(err, DrawError::MissingReport(_)));
    }
}
