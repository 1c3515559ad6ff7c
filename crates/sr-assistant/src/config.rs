//! Assistant configuration, loadable from TOML.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::session::DEFAULT_NUDGE_AFTER;

/// Top-level configuration for the `showroom` binary.
#[derive(Debug, Clone, Deserialize)]
pub struct AssistantConfig {
    /// Inventory dataset (JSON). Missing file means an empty catalog.
    #[serde(default = "default_catalog_path")]
    pub catalog_path: PathBuf,
    /// Booking ledger (JSON). Created empty if absent.
    #[serde(default = "default_ledger_path")]
    pub ledger_path: PathBuf,
    /// Consecutive silent listens before the assistant checks in.
    #[serde(default = "default_silence_nudge_after")]
    pub silence_nudge_after: u32,
    /// Spoken once when the conversation starts.
    #[serde(default = "default_welcome_message")]
    pub welcome_message: String,
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from("data/cars.json")
}

fn default_ledger_path() -> PathBuf {
    PathBuf::from("data/bookings.json")
}

fn default_silence_nudge_after() -> u32 {
    DEFAULT_NUDGE_AFTER
}

fn default_welcome_message() -> String {
    "Welcome to the Auto Dealership Voice Assistant. How can I help you today?".to_string()
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            catalog_path: default_catalog_path(),
            ledger_path: default_ledger_path(),
            silence_nudge_after: default_silence_nudge_after(),
            welcome_message: default_welcome_message(),
        }
    }
}

impl AssistantConfig {
    /// Load config from a TOML file path.
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config from `path` if it exists, otherwise use defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            tracing::info!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }
}
