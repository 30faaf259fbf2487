//! JSON export functionality
//!
//! Exports the whole address book to JSON with schema versioning.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{ContactsError, ContactsResult};
use crate::models::{AddressBook, Record};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full address book export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub contact_count: usize,

    /// Contacts in address book order
    pub contacts: Vec<Record>,
}

impl ContactExport {
    /// Snapshot an address book for export
    pub fn from_book(book: &AddressBook) -> Self {
        let contacts: Vec<Record> = book.iter().cloned().collect();

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            contact_count: contacts.len(),
            contacts,
        }
    }

    /// Rebuild an address book from an export, checking its integrity
    pub fn into_address_book(self) -> ContactsResult<AddressBook> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(ContactsError::Validation(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            )));
        }

        if self.contact_count != self.contacts.len() {
            return Err(ContactsError::Validation(format!(
                "Export claims {} contacts but contains {}",
                self.contact_count,
                self.contacts.len()
            )));
        }

        AddressBook::from_records(self.contacts)
    }
}

/// Export the address book to JSON
pub fn export_json<W: Write>(book: &AddressBook, writer: &mut W, pretty: bool) -> ContactsResult<()> {
    let export = ContactExport::from_book(book);

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| ContactsError::Export(e.to_string()))
}

/// Read a JSON export back into an address book
pub fn import_json(json_str: &str) -> ContactsResult<AddressBook> {
    let export: ContactExport =
        serde_json::from_str(json_str).map_err(|e| ContactsError::Validation(e.to_string()))?;

    export.into_address_book()
}
