//! Storage layer for the contact book
//!
//! Provides JSON file storage with atomic writes, automatic directory
//! creation, and the audit trail for every persisted change.

pub mod contacts;

pub use contacts::ContactRepository;

use serde::Serialize;

use crate::audit::{generate_diff, AuditEntry, AuditLogger};
use crate::config::paths::ContactPaths;
use crate::config::settings::Settings;
use crate::error::ContactsError;

/// Main storage coordinator
pub struct Storage {
    paths: ContactPaths,
    pub contacts: ContactRepository,
    audit: Option<AuditLogger>,
}

impl Storage {
    /// Create a new Storage instance with auditing enabled
    pub fn new(paths: ContactPaths) -> Result<Self, ContactsError> {
        paths.ensure_directories()?;

        Ok(Self {
            contacts: ContactRepository::new(paths.contacts_file()),
            audit: Some(AuditLogger::new(paths.audit_log())),
            paths,
        })
    }

    /// Create storage configured from user settings
    pub fn with_settings(paths: ContactPaths, settings: &Settings) -> Result<Self, ContactsError> {
        let mut storage = Self::new(paths)?;
        storage.set_audit_enabled(settings.audit_enabled);
        Ok(storage)
    }

    pub fn paths(&self) -> &ContactPaths {
        &self.paths
    }

    pub fn set_audit_enabled(&mut self, enabled: bool) {
        self.audit = enabled.then(|| AuditLogger::new(self.paths.audit_log()));
    }

    /// The audit logger, if auditing is enabled
    pub fn audit(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), ContactsError> {
        self.contacts.load()
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), ContactsError> {
        self.contacts.save()
    }

    /// Record the creation of a contact
    pub fn log_create<T: Serialize>(&self, contact: &str, entity: &T) -> Result<(), ContactsError> {
        match &self.audit {
            Some(logger) => logger.log(&AuditEntry::create(contact, entity)),
            None => Ok(()),
        }
    }

    /// Record a change to a contact, with a diff of the two snapshots
    pub fn log_update<T: Serialize>(
        &self,
        contact: &str,
        before: &T,
        after: &T,
    ) -> Result<(), ContactsError> {
        let Some(logger) = &self.audit else {
            return Ok(());
        };

        let before = serde_json::to_value(before)?;
        let after = serde_json::to_value(after)?;
        let diff = generate_diff(&before, &after);
        logger.log(&AuditEntry::update(contact, &before, &after, diff))
    }

    /// Record the deletion of a contact
    pub fn log_delete<T: Serialize>(&self, contact: &str, entity: &T) -> Result<(), ContactsError> {
        match &self.audit {
            Some(logger) => logger.log(&AuditEntry::delete(contact, entity)),
            None => Ok(()),
        }
    }
}
