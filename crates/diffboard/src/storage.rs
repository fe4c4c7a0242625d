//! Best-effort key/value settings persistence
//!
//! Settings live in a single JSON object file. Nothing here fails loudly: a
//! missing or unreadable file behaves like an empty store, and write errors
//! are logged and dropped.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

/// String keys mapped to JSON values
#[derive(Debug, Clone, Default)]
pub struct SettingsStore {
    /// Backing file, `None` for an in-memory store
    path: Option<PathBuf>,
    values: Map<String, Value>,
}

impl SettingsStore {
    /// Open the store backed by `path`, reading whatever is already there
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match read_values(&path) {
            Ok(values) => values,
            Err(err) => {
                warn!("Ignoring unreadable settings file {}: {:#}", path.display(), err);
                Map::new()
            }
        };
        debug!("Opened settings store {} ({} keys)", path.display(), values.len());

        Self {
            path: Some(path),
            values,
        }
    }

    /// A store that never touches the file system
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Open the file store at `path`, or an in-memory store without one
    pub fn open_or_in_memory(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => Self::open(path),
            None => {
                warn!("No settings location available, settings will not be persisted");
                Self::in_memory()
            }
        }
    }

    /// `$CONFIG_DIR/diffboard/settings.json`, when the platform has a config
    /// directory
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("diffboard").join("settings.json"))
    }

    /// The backing file, if any
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Read a value; `None` when the key is missing or holds another type
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.values.get(key)?.clone();
        match serde_json::from_value(value) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!("Ignoring malformed setting {:?}: {}", key, err);
                None
            }
        }
    }

    /// Store a value and rewrite the file
    pub fn save<T: Serialize>(&mut self, key: &str, value: &T) {
        match serde_json::to_value(value) {
            Ok(value) => {
                self.values.insert(key.to_string(), value);
                self.flush();
            }
            Err(err) => warn!("Could not serialize setting {:?}: {}", key, err),
        }
    }

    /// Forget a single key
    pub fn remove(&mut self, key: &str) {
        if self.values.remove(key).is_some() {
            self.flush();
        }
    }

    /// Forget every key
    pub fn clear(&mut self) {
        self.values.clear();
        self.flush();
    }

    fn flush(&self) {
        let Some(path) = &self.path else {
            return;
        };
        if let Err(err) = write_values(path, &self.values) {
            warn!("Could not write settings to {}: {:#}", path.display(), err);
        }
    }
}

fn read_values(path: &Path) -> anyhow::Result<Map<String, Value>> {
    if !path.exists() {
        return Ok(Map::new());
    }
    let text = fs::read_to_string(path).context("reading settings file")?;
    if text.trim().is_empty() {
        return Ok(Map::new());
    }
    serde_json::from_str(&text).context("parsing settings file")
}

fn write_values(path: &Path, values: &Map<String, Value>) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("creating settings directory")?;
    }
    let text = serde_json::to_string_pretty(values)?;
    fs::write(path, text).context("writing settings file")?;
    Ok(())
}
