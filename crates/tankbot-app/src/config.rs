//! Bot configuration

use std::path::Path;

use serde::{Deserialize, Serialize};

use tankbot_core::constants::{DEFAULT_DANGER_RADIUS, DEFAULT_HORIZON_TURNS};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

/// Tuning for one game. Every field has a default, so a config file may
/// name only what it changes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    /// RNG seed for random moves. `None` draws a fresh seed per run.
    pub seed: Option<u64>,
    /// Dodge a bullet whose projected miss distance is below this
    pub danger_radius: f64,
    /// Only dodge when the closest approach is at most this many turns away
    pub horizon_turns: f64,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            seed: None,
            danger_radius: DEFAULT_DANGER_RADIUS,
            horizon_turns: DEFAULT_HORIZON_TURNS,
        }
    }
}

impl BotConfig {
    /// Load from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&text).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}
