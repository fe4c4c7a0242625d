//! Application configuration
//!
//! Everything is optional: a missing file, or a file that only sets a few
//! fields, yields the defaults for the rest.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use log::debug;
use serde::{Deserialize, Serialize};

use line_diff::{DiffConfig, LineEndingMode};

use crate::app::ViewMode;
use crate::storage::SettingsStore;

/// Optional behaviours of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Features {
    /// Re-run the comparison after swapping sides
    pub merge_view: bool,

    /// Remember the theme between runs
    pub theme_persistence: bool,

    /// Allow reformatting both sides as JSON
    pub json_mode: bool,

    /// Allow copying sides, the patch and changed lines
    pub copy_actions: bool,
}

impl Default for Features {
    fn default() -> Self {
        Self {
            merge_view: true,
            theme_persistence: true,
            json_mode: true,
            copy_actions: true,
        }
    }
}

/// How long a comparison searches for a minimal diff, in milliseconds
pub const DEFAULT_DIFF_TIMEOUT_MS: u64 = 5_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub features: Features,

    /// How line terminators are compared
    pub line_ending_mode: LineEndingMode,

    /// View mode right after a comparison
    pub view_mode: ViewMode,

    /// Settings file; defaults to the user config directory
    pub settings_path: Option<PathBuf>,

    /// Time limit for the minimal diff search; `null` searches until done
    pub diff_timeout_ms: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            features: Features::default(),
            line_ending_mode: LineEndingMode::default(),
            view_mode: ViewMode::default(),
            settings_path: None,
            diff_timeout_ms: Some(DEFAULT_DIFF_TIMEOUT_MS),
        }
    }
}

impl AppConfig {
    /// Load the configuration file, or the defaults when there is none
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            debug!("No config file given, using defaults");
            return Ok(Self::default());
        };

        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        debug!("Loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Open the settings store this configuration points at
    pub fn settings_store(&self) -> SettingsStore {
        let path = self
            .settings_path
            .clone()
            .or_else(SettingsStore::default_path);
        SettingsStore::open_or_in_memory(path)
    }

    /// Diff options derived from this configuration
    pub fn diff_config(&self) -> DiffConfig {
        let config = DiffConfig::default().line_ending_mode(self.line_ending_mode);
        match self.diff_timeout_ms {
            Some(ms) => config.timeout(Duration::from_millis(ms)),
            None => config,
        }
    }
}
