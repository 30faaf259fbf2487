//! Contact name model
//!
//! The name is a contact's identity and the address book's unique key.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ContactsError, ContactsResult};

/// A non-empty, immutable contact name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ContactName(String);

impl ContactName {
    /// Create a name, trimming surrounding whitespace
    ///
    /// # Errors
    ///
    /// Returns `InvalidName` if nothing is left after trimming.
    pub fn new(name: impl AsRef<str>) -> ContactsResult<Self> {
        let trimmed = normalize_name(name.as_ref());
        if trimmed.is_empty() {
            return Err(ContactsError::InvalidName(
                "Contact name cannot be empty".into(),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// The key a name is stored and looked up under
pub fn normalize_name(name: &str) -> &str {
    name.trim()
}

impl TryFrom<String> for ContactName {
    type Error = ContactsError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ContactName> for String {
    fn from(name: ContactName) -> Self {
        name.0
    }
}

impl AsRef<str> for ContactName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
