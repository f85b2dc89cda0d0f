//! JsonFileStore - one JSON object file mapping keys to values.
//!
//! The whole file is read and rewritten per operation; an absent file
//! reads as empty. Suits the small, single-writer state this crate keeps.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use super::{KeyValueStore, StoreError};

pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> JsonFileStore {
        JsonFileStore { path: path.into() }
    }

    fn read_map(&self) -> Result<HashMap<String, String>, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(HashMap::new()),
            Err(err) => return Err(StoreError::Unavailable(err.to_string())),
        };
        serde_json::from_str(&raw).map_err(|err| StoreError::Serde(err.to_string()))
    }

    fn write_map(&self, map: &HashMap<String, String>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)
                    .map_err(|err| StoreError::Unavailable(err.to_string()))?;
            }
        }
        let raw = serde_json::to_string(map).map_err(|err| StoreError::Serde(err.to_string()))?;
        fs::write(&self.path, raw).map_err(|err| StoreError::Unavailable(err.to_string()))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.read_map()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        let mut map = self.read_map()?;
        map.insert(key.to_string(), value);
        self.write_map(&map)
    }
}
