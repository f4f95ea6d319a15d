//! Durable key-value storage for client-side preferences.
//!
//! Business logic receives the [`KeyValueStore`] capability through its
//! constructor; only the composition root decides whether that is a
//! file on disk or an in-memory map.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use thiserror::Error;

/// Errors that can occur while persisting preferences.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to read preferences file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write preferences file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse preferences file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Minimal durable string map.
///
/// Values are opaque strings; callers layer their own encoding on top
/// (booleans as `"true"`/`"false"`, arrays as JSON).
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// File-backed store: a flat TOML table of strings.
///
/// The whole map is rewritten on every `set`. A missing file reads as
/// an empty map, so first launch needs no setup.
pub struct TomlFileStore {
    path: PathBuf,
    cache: Mutex<BTreeMap<String, String>>,
}

impl TomlFileStore {
    /// Default location: `<config dir>/postflow/prefs.toml`.
    pub fn default_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("postflow").join("prefs.toml")
    }

    /// Open a store at `path`, loading any existing contents.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let cache = Self::load_map(&path)?;
        Ok(Self {
            path,
            cache: Mutex::new(cache),
        })
    }

    fn load_map(path: &Path) -> Result<BTreeMap<String, String>, StoreError> {
        if !path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(path).map_err(|e| StoreError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| StoreError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })
    }

    fn persist(&self, map: &BTreeMap<String, String>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| StoreError::WriteError {
                path: self.path.clone(),
                source: e,
            })?;
        }
        let content = toml::to_string(map).expect("string map serializes to TOML");
        fs::write(&self.path, content).map_err(|e| StoreError::WriteError {
            path: self.path.clone(),
            source: e,
        })
    }
}

impl KeyValueStore for TomlFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.cache.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut cache = self.cache.lock();
        cache.insert(key.to_string(), value.to_string());
        self.persist(&cache)
    }
}

/// In-memory store for tests and throwaway sessions.
#[derive(Default)]
pub struct MemoryStore {
    map: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.map.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.map.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Read a boolean entry, falling back to `default` when absent or
/// unparseable.
pub fn get_bool(store: &dyn KeyValueStore, key: &str, default: bool) -> bool {
    store
        .get(key)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Write a boolean entry.
pub fn set_bool(store: &dyn KeyValueStore, key: &str, value: bool) -> Result<(), StoreError> {
    store.set(key, if value { "true" } else { "false" })
}
