use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::prelude::{AppError, ContactDraft};

pub const NAME_TOO_SHORT: &str = "Name must be at least 2 characters.";
pub const PHONE_REQUIRED: &str = "Phone is required.";
pub const PHONE_INVALID: &str = "Phone must contain only numbers or valid symbols.";
pub const EMAIL_REQUIRED: &str = "Email is required.";
pub const EMAIL_MISSING_AT: &str = "Email must contain '@'.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Phone,
    Email,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Phone => "phone",
            Field::Email => "email",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a contact must carry an email address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmailPolicy {
    #[default]
    Required,
    Optional,
}

impl FromStr for EmailPolicy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "required" => Ok(EmailPolicy::Required),
            "optional" => Ok(EmailPolicy::Optional),
            other => Err(AppError::Validation(format!(
                "Unknown email policy '{other}'"
            ))),
        }
    }
}

/// Field name to message. A field without an entry is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn insert(&mut self, field: Field, message: &str) {
        self.0.insert(field, message.to_string());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self
            .iter()
            .map(|(field, msg)| format!("{field}: {msg}"))
            .collect();
        f.write_str(&lines.join("\n"))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ContactFormValidator {
    pub email_policy: EmailPolicy,
}

impl ContactFormValidator {
    pub fn new(email_policy: EmailPolicy) -> Self {
        Self { email_policy }
    }

    /// Runs every field check so all problems are reported at once.
    pub fn validate(&self, draft: &ContactDraft) -> FieldErrors {
        let mut errors = FieldErrors::default();

        if let Some(msg) = validate_name(&draft.name) {
            errors.insert(Field::Name, msg);
        }
        if let Some(msg) = validate_phone(&draft.phone) {
            errors.insert(Field::Phone, msg);
        }
        if let Some(msg) = validate_email(&draft.email, self.email_policy) {
            errors.insert(Field::Email, msg);
        }

        errors
    }
}

pub fn validate_name(name: &str) -> Option<&'static str> {
    // Counted in chars, not bytes
    if name.trim().chars().count() < 2 {
        return Some(NAME_TOO_SHORT);
    }
    None
}

pub fn validate_phone(phone: &str) -> Option<&'static str> {
    let phone = phone.trim();

    if phone.is_empty() {
        return Some(PHONE_REQUIRED);
    }
    if !phone.chars().all(is_phone_char) {
        return Some(PHONE_INVALID);
    }
    None
}

pub fn validate_email(email: &str, policy: EmailPolicy) -> Option<&'static str> {
    let email = email.trim();

    if email.is_empty() {
        return match policy {
            EmailPolicy::Required => Some(EMAIL_REQUIRED),
            EmailPolicy::Optional => None,
        };
    }
    if !email.contains('@') {
        return Some(EMAIL_MISSING_AT);
    }
    None
}

fn is_phone_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '(' | ')' | '-') || c.is_whitespace()
}
