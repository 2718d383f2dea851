//! Headless driver settings
//!
//! Stored as JSON; every field is optional in the file and falls back to its default.
//! Gameplay tuning is fixed in [`crate::consts`] and is not part of the settings.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Default run length: five minutes at 60 Hz
pub const DEFAULT_MAX_TICKS: u64 = 5 * 60 * 60;

/// Errors loading or saving a settings file
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to access settings file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings JSON in {path}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Driver settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// RNG seed; a random one is picked when absent
    pub seed: Option<u64>,
    /// Number of runs to play back to back (restarting after each game over)
    pub sessions: u32,
    /// Per-run tick limit
    pub max_ticks: u64,
    /// Let the demo pilot fly; otherwise the jetpack never fires
    pub autopilot: bool,
    /// Pace ticks against the wall clock instead of running flat out
    pub realtime: bool,
    /// Log a JSON snapshot every N ticks (0 = never)
    pub snapshot_every: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            sessions: 1,
            max_ticks: DEFAULT_MAX_TICKS,
            autopilot: true,
            realtime: false,
            snapshot_every: 0,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = serde_json::from_str(&json).map_err(|source| SettingsError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Write settings as pretty JSON
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self).map_err(|source| SettingsError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        std::fs::write(path, json).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }

    /// The configured seed, or a fresh random one
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}
