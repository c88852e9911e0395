use super::*;

use crate::storage::{CONTACTS_KEY, KeyValueStore, remote::RemoteSource};
use std::sync::Arc;
use tracing::{debug, warn};

/// How the contact list was obtained by [`ContactStore::load`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Persisted,
    Remote,
    /// Built-in list. `error` is set when a remote fetch was attempted and failed.
    Fallback {
        error: Option<String>,
    },
    /// The token was cancelled before the result could be applied.
    Cancelled,
}

/// Contacts produced by a load, not yet applied to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedContacts {
    contacts: Vec<Contact>,
    outcome: LoadOutcome,
}

impl FetchedContacts {
    pub fn outcome(&self) -> &LoadOutcome {
        &self.outcome
    }
}

/// A load that has read local storage and may still have to hit the remote.
pub enum PendingLoad {
    Ready(FetchedContacts),
    Remote(Arc<dyn RemoteSource>),
}

impl PendingLoad {
    pub async fn resolve(self) -> FetchedContacts {
        let remote = match self {
            PendingLoad::Ready(fetched) => return fetched,
            PendingLoad::Remote(remote) => remote,
        };

        match remote.fetch_contacts().await {
            Ok(contacts) => {
                debug!(count = contacts.len(), source = %remote.describe(), "fetched default contacts");
                FetchedContacts {
                    contacts,
                    outcome: LoadOutcome::Remote,
                }
            }
            Err(e) => {
                warn!(source = %remote.describe(), "remote load failed: {e}");
                let error = format!("Couldn't load contacts from the server ({e}). Showing the built-in list.");
                FetchedContacts {
                    contacts: fallback_contacts(),
                    outcome: LoadOutcome::Fallback { error: Some(error) },
                }
            }
        }
    }
}

/// Owner of the contact list. Loads, `append` and `persist` are the only
/// ways the list changes or leaves the process.
pub struct ContactStore {
    contacts: Vec<Contact>,
    storage: Box<dyn KeyValueStore>,
    remote: Option<Arc<dyn RemoteSource>>,
}

impl ContactStore {
    pub fn new(storage: Box<dyn KeyValueStore>) -> Self {
        Self {
            contacts: Vec::new(),
            storage,
            remote: None,
        }
    }

    pub fn with_remote(mut self, remote: Box<dyn RemoteSource>) -> Self {
        self.remote = Some(Arc::from(remote));
        self
    }

    /// Newest first.
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn storage_medium(&self) -> &str {
        self.storage.get_medium()
    }

    /// Persisted list if one exists and parses. Read and parse failures are
    /// logged and treated as "nothing stored".
    pub fn read_persisted(&self) -> Option<Vec<Contact>> {
        let raw = match self.storage.get(CONTACTS_KEY) {
            Ok(raw) => raw?,
            Err(e) => {
                warn!("could not read stored contacts: {e}");
                return None;
            }
        };

        match serde_json::from_str::<Vec<Contact>>(&raw) {
            Ok(contacts) => Some(contacts),
            Err(e) => {
                warn!("stored contacts under '{CONTACTS_KEY}' did not parse: {e}");
                None
            }
        }
    }

    /// Fills the list from local storage, else the remote source, else the
    /// built-in list. Nothing is applied once `cancel` has fired.
    pub async fn load(&mut self, cancel: &CancelToken) -> LoadOutcome {
        let fetched = self.begin_load().resolve().await;
        self.apply_load(fetched, cancel)
    }

    /// Synchronous half of [`ContactStore::load`]. The returned request owns
    /// everything it still needs, so the store stays usable while it is
    /// awaited.
    pub fn begin_load(&self) -> PendingLoad {
        if let Some(saved) = self.read_persisted() {
            debug!(count = saved.len(), "loaded contacts from local storage");
            return PendingLoad::Ready(FetchedContacts {
                contacts: saved,
                outcome: LoadOutcome::Persisted,
            });
        }

        match &self.remote {
            Some(remote) => PendingLoad::Remote(Arc::clone(remote)),
            None => PendingLoad::Ready(FetchedContacts {
                contacts: fallback_contacts(),
                outcome: LoadOutcome::Fallback { error: None },
            }),
        }
    }

    /// Replaces the list with a resolved load and persists it, unless
    /// `cancel` has fired in the meantime.
    pub fn apply_load(&mut self, fetched: FetchedContacts, cancel: &CancelToken) -> LoadOutcome {
        if cancel.is_cancelled() {
            debug!("load cancelled before commit; result dropped");
            return LoadOutcome::Cancelled;
        }

        self.contacts = fetched.contacts;
        self.persist_quietly();
        fetched.outcome
    }

    /// Prepends a contact built from an accepted draft and persists the list.
    pub fn append(&mut self, draft: &ContactDraft) -> Contact {
        let last_id = self.contacts.iter().map(|c| c.id).max();
        let contact = Contact::from_draft(next_contact_id(last_id), draft);

        self.contacts.insert(0, contact.clone());
        self.persist_quietly();
        contact
    }

    /// Writes the whole list under [`CONTACTS_KEY`]. An empty list is never
    /// written, so a load that has not resolved yet cannot wipe stored data.
    pub fn persist(&self) -> Result<bool, AppError> {
        if self.contacts.is_empty() {
            return Ok(false);
        }

        let json = serde_json::to_string(&self.contacts)?;
        self.storage.set(CONTACTS_KEY, &json)?;
        Ok(true)
    }

    fn persist_quietly(&self) {
        if let Err(e) = self.persist() {
            warn!("could not persist contacts: {e}");
        }
    }
}
