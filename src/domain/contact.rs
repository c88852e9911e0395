pub use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: i64,
    pub name: String,
    pub phone: String,

    #[serde(default)] // Older entries were saved without an email.
    pub email: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

/// Unsaved input from the add-contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl Contact {
    pub fn new(id: i64, name: &str, phone: &str, email: &str) -> Self {
        Contact {
            id,
            name: name.to_string(),
            phone: phone.to_string(),
            email: email.to_string(),
            photo: None,
        }
    }

    /// Builds a contact from an accepted draft. Fields are trimmed here so the
    /// stored value never carries the user's stray whitespace.
    pub fn from_draft(id: i64, draft: &ContactDraft) -> Self {
        Contact::new(
            id,
            draft.name.trim(),
            draft.phone.trim(),
            draft.email.trim(),
        )
    }
}

impl ContactDraft {
    pub fn new(name: &str, phone: &str, email: &str) -> Self {
        ContactDraft {
            name: name.to_string(),
            phone: phone.to_string(),
            email: email.to_string(),
        }
    }

    pub fn clear(&mut self) {
        *self = ContactDraft::default();
    }
}

/// Millisecond timestamp id, bumped past `after` when the clock has not moved
/// on since the last contact was created.
pub fn next_contact_id(after: Option<i64>) -> i64 {
    next_id_from(Utc::now(), after)
}

fn next_id_from(now: DateTime<Utc>, after: Option<i64>) -> i64 {
    let stamp = now.timestamp_millis();
    match after {
        Some(last) if last >= stamp => last + 1,
        _ => stamp,
    }
}

/// Built-in list used when nothing is persisted and no remote data is available.
pub fn fallback_contacts() -> Vec<Contact> {
    vec![
        Contact::new(1, "Ahmed Hamido", "(646) 715-9775", "enm7781@gmail.com"),
        Contact::new(2, "Sophia Martinez", "(917) 284-6120", "sophiamnyc@gmail.com"),
        Contact::new(3, "Liam Johnson", "(347) 602-1943", "liamjny@gmail.com"),
        Contact::new(4, "Ava Chen", "(929) 331-7854", "avachenbk@gmail.com"),
        Contact::new(5, "Noah Patel", "(212) 997-4830", "noahpatelny@gmail.com"),
        Contact::new(6, "Isabella Rivera", "(718) 940-2257", "isabellanyc@gmail.com"),
        Contact::new(7, "Ethan Kim", "(646) 812-4389", "ethankny@gmail.com"),
        Contact::new(8, "Maya Thompson", "(929) 458-6732", "mayathompsonny@gmail.com"),
        Contact::new(9, "Daniel Rossi", "(917) 526-9981", "danielrossiny@gmail.com"),
        Contact::new(10, "Olivia Brown", "(718) 247-5564", "oliviabny@gmail.com"),
    ]
}
