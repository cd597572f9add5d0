//! Draw execution and replay.

use std::path::PathBuf;

use tide_random::{Seed, SeededRandom};
use tide_selection::select_all;
use tide_types::{Bracket, Timestamp, Winner};

use crate::{
    eligible_entries, load_blacklist, load_leaderboard, BracketSummary, DrawConfig, DrawError,
    EligibleSet, SeedSource, WinnersReport,
};

pub const LEADERBOARD_FILE: &str = "leaderboard.json";
pub const WINNERS_FILE: &str = "winners.json";

/// A completed draw and where its report was written.
#[derive(Debug)]
pub struct DrawOutcome {
    pub report: WinnersReport,
    pub path: PathBuf,
}

/// Result of replaying a recorded draw.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Verification {
    pub epoch_id: u64,
    pub seed: String,
    pub recorded: usize,
    pub replayed: usize,
    /// Position of the first winner that differs, if any.
    pub first_mismatch: Option<usize>,
}

impl Verification {
    pub fn is_match(&self) -> bool {
        self.first_mismatch.is_none()
    }
}

/// Draw `brackets` over already-eligible entries with the given seed.
///
/// Pure apart from the report timestamp: the same inputs always produce the
/// same winners.
pub fn draw_winners(
    epoch_id: u64,
    eligible: &EligibleSet,
    brackets: &[Bracket],
    seed: &str,
    seed_source: SeedSource,
) -> Result<WinnersReport, DrawError> {
    let mut source = SeededRandom::new(&Seed::parse(seed)?)?;
    let winners = select_all(&eligible.entries, brackets, &mut source)?;

    let summaries = brackets
        .iter()
        .map(|bracket| BracketSummary::compute(bracket, &eligible.entries, &winners))
        .collect();

    Ok(WinnersReport {
        epoch_id,
        generated_at: Timestamp::now(),
        seed: seed.to_string(),
        seed_source,
        eligibility: eligible.stats,
        total_participants: eligible.entries.len(),
        total_winners: winners.len(),
        brackets: summaries,
        winners,
    })
}

/// Run the draw for `epoch_id` and write `winners.json` next to the leaderboard.
///
/// A blank or absent `seed` generates a fresh one; either way the draw runs on
/// the seeded source so the report can be replayed.
pub fn run_draw(
    config: &DrawConfig,
    epoch_id: u64,
    seed: Option<&str>,
) -> Result<DrawOutcome, DrawError> {
    config.validate()?;
    let (seed, seed_source) = resolve_seed(seed)?;
    let blacklist = load_blacklist(config.blacklist_path.as_deref())?;

    tracing::info!(
        epoch_id,
        %seed,
        ?seed_source,
        blacklist = blacklist.len(),
        "starting draw"
    );

    let dir = config.epoch_dir(epoch_id);
    let eligible = load_eligible(config, epoch_id, &blacklist)?;
    if eligible.entries.is_empty() {
        tracing::warn!(epoch_id, "no eligible participants for this epoch");
    }

    let report = draw_winners(epoch_id, &eligible, &config.brackets, &seed, seed_source)?;
    for summary in &report.brackets {
        tracing::info!(
            bracket = %summary.name,
            participants = summary.participants,
            total_weight = %summary.total_weight,
            winners = summary.winners_selected,
            "bracket summary"
        );
    }

    let path = dir.join(WINNERS_FILE);
    report.write(&path)?;
    tracing::info!(
        path = %path.display(),
        total_winners = report.total_winners,
        "winners saved"
    );

    Ok(DrawOutcome { report, path })
}

/// Replay the recorded draw for `epoch_id` and compare it winner by winner.
///
/// Uses the seed stored in `winners.json` and the current leaderboard,
/// blacklist and brackets; any drift in those inputs shows up as a mismatch.
pub fn verify_draw(config: &DrawConfig, epoch_id: u64) -> Result<Verification, DrawError> {
    config.validate()?;
    let path = config.epoch_dir(epoch_id).join(WINNERS_FILE);
    let recorded = WinnersReport::read(&path)?;
    let blacklist = load_blacklist(config.blacklist_path.as_deref())?;
    let eligible = load_eligible(config, epoch_id, &blacklist)?;

    let replayed = draw_winners(
        epoch_id,
        &eligible,
        &config.brackets,
        &recorded.seed,
        recorded.seed_source,
    )?;

    let first_mismatch = first_mismatch(&recorded.winners, &replayed.winners);
    let verification = Verification {
        epoch_id,
        seed: recorded.seed,
        recorded: recorded.winners.len(),
        replayed: replayed.winners.len(),
        first_mismatch,
    };

    if verification.is_match() {
        tracing::info!(epoch_id, winners = verification.recorded, "draw verified");
    } else {
        tracing::warn!(
            epoch_id,
            recorded = verification.recorded,
            replayed = verification.replayed,
            first_mismatch = ?verification.first_mismatch,
            "replayed draw differs from recorded winners"
        );
    }
    Ok(verification)
}

fn resolve_seed(seed: Option<&str>) -> Result<(String, SeedSource), DrawError> {
    match seed.map(str::trim).filter(|s| !s.is_empty()) {
        Some(text) => {
            Seed::parse(text)?;
            Ok((text.to_string(), SeedSource::Provided))
        }
        None => Ok((Seed::generate()?.to_hex(), SeedSource::Generated)),
    }
}

fn load_eligible(
    config: &DrawConfig,
    epoch_id: u64,
    blacklist: &std::collections::HashSet<String>,
) -> Result<EligibleSet, DrawError> {
    let rows = load_leaderboard(&config.epoch_dir(epoch_id).join(LEADERBOARD_FILE))?;
    let eligible = eligible_entries(&rows, blacklist, config.weight_decimals)?;
    tracing::info!(
        total_participants = eligible.stats.eligible,
        zero_weight_excluded = eligible.stats.zero_weight,
        blacklist_excluded = eligible.stats.blacklisted,
        "leaderboard loaded"
    );
    Ok(eligible)
}

fn first_mismatch(recorded: &[Winner], replayed: &[Winner]) -> Option<usize> {
    let same = |a: &Winner, b: &Winner| {
        a.address == b.address && a.rank == b.rank && a.bracket == b.bracket && a.weight == b.weight
    };
    recorded
        .iter()
        .zip(replayed)
        .position(|(a, b)| !same(a, b))
        .or_else(|| (recorded.len() != replayed.len()).then(|| recorded.len().min(replayed.len())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tide_types::{Entry, Weight};

    fn winner(address: &str) -> Winner {
        Winner {
            address: address.into(),
            rank: 1,
            weight: Weight::from(1),
            bracket: "b".into(),
            probability_percent: 50.0,
        }
    }

    #[test]
    fn blank_seed_is_generated() {
        let (seed, source) = resolve_seed(Some("   ")).unwrap();
        assert_eq!(source, SeedSource::Generated);
        assert_eq!(seed.len(), 64);

        let (_, source) = resolve_seed(None).unwrap();
        assert_eq!(source, SeedSource::Generated);
    }

    #[test]
    fn provided_seed_is_trimmed_and_kept_verbatim() {
        let (seed, source) = resolve_seed(Some(" 0xABcd \n")).unwrap();
        assert_eq!(seed, "0xABcd");
        assert_eq!(source, SeedSource::Provided);
    }

    #[test]
    fn invalid_seed_aborts() {
        assert!(matches!(
            resolve_seed(Some("abc")),
            Err(DrawError::Random(tide_random::RandomError::InvalidSeed(_)))
        ));
    }

    #[test]
    fn draw_winners_summarises_each_bracket() {
        let eligible = EligibleSet {
            entries: vec![
                Entry::new("0x1", 10u64, 1),
                Entry::new("0x2", 20u64, 2),
                Entry::new("0x3", 30u64, 3),
            ],
            stats: Default::default(),
        };
        let brackets = vec![
            Bracket::bounded("top", 1, 2, 1),
            Bracket::open_ended("rest", 3, 5),
        ];

        let report = draw_winners(1, &eligible, &brackets, "5eed", SeedSource::Provided).unwrap();
        assert_eq!(report.total_winners, 2);
        assert_eq!(report.total_participants, 3);
        assert_eq!(report.brackets[0].total_weight, Weight::from(30));
        assert_eq!(report.brackets[1].winners_selected, 1);
        assert_eq!(report.winners[1].address, "0x3");
    }

    #[test]
    fn mismatch_detection() {
        let a = vec![winner("0x1"), winner("0x2")];
        assert_eq!(first_mismatch(&a, &a), None);
        assert_eq!(first_mismatch(&a, &[winner("0x1"), winner("0x9")]), Some(1));
        assert_eq!(first_mismatch(&a, &a[..1]), Some(1));
        assert_eq!(first_mismatch(&[], &a), Some(0));
    }
}
