pub use crate::cli::{command, run::run_app};
pub use crate::domain::{
    CancelToken, Contact, ContactDraft, ContactStore, FetchedContacts, LoadOutcome, Pager,
    PendingLoad, PhoneBook,
    contact::{self, fallback_contacts},
    search::{self, filter, match_spans},
};
pub use crate::errors::AppError;
pub use crate::storage::{
    self, CONTACTS_KEY, KeyValueStore,
    file::JsonFileStorage,
    memory::MemStorage,
    remote::{HttpContactSource, RemoteSource},
};
pub use crate::validation::{ContactFormValidator, EmailPolicy, Field, FieldErrors};
