use super::{KeyValueStore, create_file_parent};
use crate::prelude::AppError;

use std::collections::BTreeMap;
use std::fs::{self, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

pub const DEFAULT_STORAGE_PATH: &str = "./.instance/local-storage.json";

/// Local storage kept as one JSON object of string values in a file.
pub struct JsonFileStorage {
    pub medium: String,
    pub path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            medium: "json".to_string(),
            path: path.into(),
        }
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>, AppError> {
        if !fs::exists(&self.path)? {
            return Ok(BTreeMap::new());
        }

        let mut file = OpenOptions::new().read(true).open(&self.path)?;
        let mut data = String::new();
        file.read_to_string(&mut data)?;

        // serde_json will give an error if data is empty
        if data.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        Ok(serde_json::from_str(&data)?)
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<(), AppError> {
        let path = Path::new(&self.path);
        if !path.exists() {
            create_file_parent(path)?;
        }

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)?;

        let data = serde_json::to_string(entries)?;
        file.write_all(data.as_bytes())?;
        Ok(())
    }
}

impl Default for JsonFileStorage {
    fn default() -> Self {
        JsonFileStorage::new(DEFAULT_STORAGE_PATH)
    }
}

impl KeyValueStore for JsonFileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.read_entries()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        let mut entries = self.read_entries()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)
    }

    fn get_medium(&self) -> &str {
        &self.medium
    }
}
