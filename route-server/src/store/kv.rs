//! Flat key-value persistence.
//!
//! One JSON file holds an object mapping fixed string keys to JSON arrays,
//! the same contract a browser's localStorage gave the prototypes. Reads
//! degrade gracefully: a missing, unreadable or corrupt file (or a corrupt
//! value under one key) behaves as empty rather than failing the caller.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Errors from writing the store. Reads never fail.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Filesystem trouble
    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Value could not be serialized
    #[error("store serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A JSON-file-backed key-value store of homogeneous arrays.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    /// Open a store at the given path. The file need not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read the array stored under `key`.
    ///
    /// Anything unusable (no file, bad JSON, a value of the wrong shape)
    /// comes back as an empty vector.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        let map = self.read_map();
        match map.get(key) {
            Some(value) => serde_json::from_value(value.clone()).unwrap_or_default(),
            None => Vec::new(),
        }
    }

    /// Replace the array stored under `key`, leaving other keys intact.
    ///
    /// Creates parent directories if they don't exist.
    pub fn put<T: Serialize>(&self, key: &str, items: &[T]) -> Result<(), StoreError> {
        let mut map = self.read_map();
        map.insert(key.to_string(), serde_json::to_value(items)?);

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(&Value::Object(map))?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }

    /// Get the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> Map<String, Value> {
        let Ok(contents) = std::fs::read_to_string(&self.path) else {
            return Map::new();
        };
        match serde_json::from_str::<Value>(&contents) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        }
    }
}
