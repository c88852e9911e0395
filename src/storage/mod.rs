pub mod file;
pub mod memory;
pub mod remote;

use crate::prelude::AppError;
use std::fs;
use std::path::Path;

/// Key under which the contact list is persisted.
pub const CONTACTS_KEY: &str = "contacts-v1";

/// String key-value storage, the local persistence seam.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError>;

    fn set(&self, key: &str, value: &str) -> Result<(), AppError>;

    fn get_medium(&self) -> &str;
}

pub fn create_file_parent(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
