use std::path::PathBuf;

use crate::cli::command::Cli;
use crate::prelude::{AppError, ContactStore, PhoneBook};
use crate::storage::{
    KeyValueStore, file::JsonFileStorage, memory::MemStorage, remote::HttpContactSource,
};
use crate::validation::{ContactFormValidator, EmailPolicy};

/// Runtime configuration gathered from flags, the environment and `.env`.
#[derive(Debug, Clone)]
pub struct Settings {
    pub storage_path: PathBuf,
    pub remote_url: Option<String>,
    pub email_policy: EmailPolicy,
    pub ephemeral: bool,
}

impl Settings {
    pub fn from_cli(cli: &Cli) -> Result<Self, AppError> {
        let remote_url = cli
            .remote_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(str::to_string);

        Ok(Self {
            storage_path: PathBuf::from(&cli.storage_path),
            remote_url,
            email_policy: cli.email_policy.parse()?,
            ephemeral: cli.ephemeral,
        })
    }

    pub fn build_store(&self) -> Result<ContactStore, AppError> {
        let storage: Box<dyn KeyValueStore> = if self.ephemeral {
            Box::new(MemStorage::new())
        } else {
            Box::new(JsonFileStorage::new(&self.storage_path))
        };

        let store = ContactStore::new(storage);
        match &self.remote_url {
            Some(url) => Ok(store.with_remote(Box::new(HttpContactSource::new(url)?))),
            None => Ok(store),
        }
    }

    pub fn build_phonebook(&self) -> Result<PhoneBook, AppError> {
        Ok(PhoneBook::new(
            self.build_store()?,
            ContactFormValidator::new(self.email_policy),
        ))
    }
}
