//! Custom error types for the contact book
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for contact book operations
#[derive(Error, Debug)]
pub enum ContactsError {
    /// A contact name was empty or otherwise unusable
    #[error("Invalid contact name: {0}")]
    InvalidName(String),

    /// Birthday text could not be parsed as DD.MM.YYYY
    #[error("Invalid date '{input}', use DD.MM.YYYY")]
    InvalidDate { input: String },

    /// A command was called with the wrong number of arguments
    #[error("Invalid number of arguments. Usage: {usage}")]
    InvalidArgumentCount { usage: &'static str },

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Validation errors for user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl ContactsError {
    /// Create a "not found" error for contacts
    pub fn contact_not_found(name: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Contact",
            identifier: name.into(),
        }
    }

    /// Create a "not found" error for phone numbers
    pub fn phone_not_found(number: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Phone",
            identifier: number.into(),
        }
    }

    /// Create a "duplicate" error for contacts
    pub fn duplicate_contact(name: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type: "Contact",
            identifier: name.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a duplicate error
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate { .. })
    }

    /// Check if the error was caused by bad user input rather than the environment
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidName(_)
                | Self::InvalidDate { .. }
                | Self::InvalidArgumentCount { .. }
                | Self::NotFound { .. }
                | Self::Duplicate { .. }
                | Self::Validation(_)
        )
    }
}

impl From<std::io::Error> for ContactsError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ContactsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for contact book operations
pub type ContactsResult<T> = Result<T, ContactsError>;
