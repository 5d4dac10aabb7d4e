//! Durable key-value slots backing client-side state.
//!
//! - `FileStore` keeps one JSON document per key in the app's config directory.
//! - `MemoryStore` is an in-process stand-in for tests and for hosts without a
//!   writable data directory.

use std::{
    collections::HashMap,
    fs, io,
    path::PathBuf,
    sync::{Arc, Mutex},
};

use directories::ProjectDirs;
use thiserror::Error;
use tracing::debug;

use crate::util::config::AppConfig;

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "Piol";
const APP_NAME: &str = "PiolCompare";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage directory unavailable")]
    Unavailable,
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// A named slot holding one string value.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

#[derive(Clone, Debug)]
pub struct FileStore {
    dir: Option<PathBuf>,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: Some(dir.into()),
        }
    }

    /// Store rooted at the configured data directory, or the platform config dir.
    pub fn from_config(config: &AppConfig) -> Self {
        let dir = config.data_dir.clone().or_else(default_dir);
        Self { dir }
    }

    fn slot_path(&self, key: &str) -> Result<PathBuf, StorageError> {
        let dir = self.dir.as_ref().ok_or(StorageError::Unavailable)?;
        Ok(dir.join(format!("{key}.json")))
    }
}

fn default_dir() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().to_path_buf())
        .or_else(|| dirs::data_local_dir().map(|base| base.join("piol-compare")))
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.slot_path(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no stored value");
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.slot_path(key)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, value)?;
        debug!(path = %path.display(), bytes = value.len(), "stored value");
        Ok(())
    }
}

/// Shared in-memory slots. Clones see each other's writes.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    slots: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let slots = self
            .slots
            .lock()
            .map_err(|_| StorageError::Unavailable)?;
        Ok(slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut slots = self
            .slots
            .lock()
            .map_err(|_| StorageError::Unavailable)?;
        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_store_round_trips_and_creates_directories() {
        let tmp = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(tmp.path().join("nested"));

        assert_eq!(store.get("slot").unwrap(), None);
        store.set("slot", "[1,2,3]").unwrap();
        assert_eq!(store.get("slot").unwrap().as_deref(), Some("[1,2,3]"));
        assert!(tmp.path().join("nested").join("slot.json").exists());
    }

    #[test]
    fn file_store_without_directory_is_unavailable() {
        let mut store = FileStore { dir: None };
        assert!(matches!(store.get("slot"), Err(StorageError::Unavailable)));
        assert!(matches!(store.set("slot", "x"), Err(StorageError::Unavailable)));
    }

    #[test]
    fn memory_store_clones_share_slots() {
        let mut writer = MemoryStore::new();
        let reader = writer.clone();
        writer.set("k", "v").unwrap();
        assert_eq!(reader.get("k").unwrap().as_deref(), Some("v"));
        assert_eq!(reader.get("missing").unwrap(), None);
    }
}
