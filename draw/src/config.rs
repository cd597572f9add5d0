//! Draw configuration with TOML file support.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tide_types::Bracket;
use tide_utils::LogFormat;

use crate::DrawError;

/// Configuration for a Tide draw.
///
/// Can be loaded from a TOML file via [`DrawConfig::from_toml_file`] or
/// built programmatically (e.g. for tests). Every field has a default, so an
/// empty file is a valid configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DrawConfig {
    /// Decimals used to convert fixed-point points values into base units.
    #[serde(default = "default_weight_decimals")]
    pub weight_decimals: u32,

    /// Root directory holding one sub-directory per epoch.
    #[serde(default = "default_tides_dir")]
    pub tides_dir: PathBuf,

    /// Optional blacklist file (JSON array, `{"addresses": [...]}`, or one
    /// address per line).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blacklist_path: Option<PathBuf>,

    /// Log format: "human" or "json".
    #[serde(default)]
    pub log_format: LogFormat,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Brackets in draw order. Reordering them changes every draw after the
    /// first moved bracket.
    #[serde(default = "default_brackets")]
    pub brackets: Vec<Bracket>,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_weight_decimals() -> u32 {
    18
}

fn default_tides_dir() -> PathBuf {
    PathBuf::from("./tides")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_brackets() -> Vec<Bracket> {
    vec![
        Bracket::bounded("Ranks 1-100", 1, 100, 50),
        Bracket::bounded("Ranks 101-200", 101, 200, 25),
        Bracket::bounded("Ranks 201-300", 201, 300, 15),
        Bracket::open_ended("Ranks 301+", 301, 10),
    ]
}

// ── Impl ───────────────────────────────────────────────────────────────

impl DrawConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &Path) -> Result<Self, DrawError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| DrawError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, DrawError> {
        toml::from_str(s).map_err(|e| DrawError::Config(e.to_string()))
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, DrawError> {
        toml::to_string_pretty(self).map_err(|e| DrawError::Config(e.to_string()))
    }

    /// Check brackets before any randomness is consumed.
    pub fn validate(&self) -> Result<(), DrawError> {
        if self.brackets.is_empty() {
            return Err(DrawError::Config("at least one bracket is required".into()));
        }

        let mut names = HashSet::new();
        for bracket in &self.brackets {
            bracket.validate()?;
            if !names.insert(bracket.name.as_str()) {
                return Err(DrawError::Config(format!(
                    "duplicate bracket name {:?}",
                    bracket.name
                )));
            }
        }
        Ok(())
    }

    /// Directory holding one epoch's leaderboard and winners files.
    pub fn epoch_dir(&self, epoch_id: u64) -> PathBuf {
        self.tides_dir.join(epoch_id.to_string())
    }
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            weight_decimals: default_weight_decimals(),
            tides_dir: default_tides_dir(),
            blacklist_path: None,
            log_format: LogFormat::default(),
            log_level: default_log_level(),
            brackets: default_brackets(),
        }
    }
}
