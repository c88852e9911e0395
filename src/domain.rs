pub mod cancel;
pub mod contact;
pub mod pager;
pub mod phonebook;
pub mod search;
pub mod store;

pub use crate::errors::AppError;
pub use cancel::CancelToken;
pub use contact::{Contact, ContactDraft, fallback_contacts, next_contact_id};
pub use pager::Pager;
pub use phonebook::PhoneBook;
pub use search::filter;
pub use store::{ContactStore, FetchedContacts, LoadOutcome, PendingLoad};
