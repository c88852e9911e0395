use super::KeyValueStore;
use crate::prelude::AppError;

use std::cell::RefCell;
use std::collections::HashMap;

/// Process-local storage; nothing survives the process.
pub struct MemStorage {
    pub medium: String,
    data: RefCell<HashMap<String, String>>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self {
            medium: "mem".to_string(),
            data: RefCell::new(HashMap::new()),
        }
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = MemStorage::new();
        storage
            .data
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        storage
    }
}

impl Default for MemStorage {
    fn default() -> Self {
        MemStorage::new()
    }
}

impl KeyValueStore for MemStorage {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.data.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.data
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn get_medium(&self) -> &str {
        &self.medium
    }
}
