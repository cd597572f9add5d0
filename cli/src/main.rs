//! Tide CLI: entry point for running and auditing stake-weighted draws.

use anyhow::{bail, Context};
use clap::Parser;
use std::path::PathBuf;
use tide_draw::{run_draw, verify_draw, DrawConfig};
use tide_random::Seed;
use tide_utils::{init_logging, LogFormat};

/// Winners printed after a draw; the full list is in `winners.json`.
const PREVIEW_LEN: usize = 10;

#[derive(Parser)]
#[command(name = "tide", about = "Verifiable stake-weighted lottery draws")]
struct Cli {
    /// Path to a TOML configuration file. If provided, file settings
    /// are used as the base; CLI flags and env vars override them.
    #[arg(long, global = true, env = "TIDE_CONFIG")]
    config: Option<PathBuf>,

    /// Root directory with one sub-directory per epoch.
    #[arg(long, global = true, env = "TIDE_DIR")]
    tides_dir: Option<PathBuf>,

    /// Blacklist file (JSON array, `{"addresses": [...]}`, or one per line).
    #[arg(long, global = true, env = "TIDE_BLACKLIST_PATH")]
    blacklist: Option<PathBuf>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, global = true, env = "TIDE_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, global = true, env = "TIDE_LOG_FORMAT")]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Draw winners for an epoch and write `winners.json`.
    #[command(name = "pick-winners")]
    PickWinners {
        /// Epoch whose leaderboard is drawn.
        epoch: u64,

        /// Hex seed (optionally 0x-prefixed). Omit to generate one.
        #[arg(long, env = "TIDE_SEED")]
        seed: Option<String>,
    },

    /// Replay an epoch's recorded draw and compare it with `winners.json`.
    Verify {
        epoch: u64,
    },

    /// Print a fresh 32-byte hex seed.
    #[command(name = "generate-seed")]
    GenerateSeed,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => DrawConfig::from_toml_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => DrawConfig::default(),
    };
    if let Some(dir) = cli.tides_dir {
        config.tides_dir = dir;
    }
    if let Some(path) = cli.blacklist {
        config.blacklist_path = Some(path);
    }
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }
    if let Some(format) = cli.log_format {
        config.log_format = format;
    }

    init_logging(config.log_format, &config.log_level);
    if let Some(path) = &cli.config {
        tracing::info!(path = %path.display(), "loaded config");
    }

    match cli.command {
        Command::PickWinners { epoch, seed } => {
            let outcome = run_draw(&config, epoch, seed.as_deref())
                .with_context(|| format!("drawing epoch {epoch}"))?;
            let report = &outcome.report;

            println!("epoch:   {}", report.epoch_id);
            println!("seed:    {} ({:?})", report.seed, report.seed_source);
            println!(
                "winners: {} of {} eligible",
                report.total_winners, report.total_participants
            );
            for (i, winner) in report.winners.iter().take(PREVIEW_LEN).enumerate() {
                println!(
                    "{:>3}. {} rank {} [{}] {:.6}%",
                    i + 1,
                    winner.address,
                    winner.rank,
                    winner.bracket,
                    winner.probability_percent
                );
            }
            if report.winners.len() > PREVIEW_LEN {
                println!("     ... {} more", report.winners.len() - PREVIEW_LEN);
            }
            println!("saved to {}", outcome.path.display());
        }
        Command::Verify { epoch } => {
            let verification = verify_draw(&config, epoch)
                .with_context(|| format!("verifying epoch {epoch}"))?;
            if !verification.is_match() {
                bail!(
                    "epoch {epoch} does not replay: {} recorded, {} replayed, first difference at winner {}",
                    verification.recorded,
                    verification.replayed,
                    verification.first_mismatch.map_or(0, |i| i + 1)
                );
            }
            println!(
                "epoch {epoch} verified: {} winners replay from seed {}",
                verification.recorded, verification.seed
            );
        }
        Command::GenerateSeed => {
            println!("{}", Seed::generate()?.to_hex());
        }
    }

    Ok(())
}
