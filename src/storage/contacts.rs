//! Contact repository for JSON storage
//!
//! Manages loading and saving the address book to contacts.json. Saves go
//! through a sibling temp file that replaces the target, so a failed save
//! leaves the previous contacts in place.

use std::fmt;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::PathBuf;

use crate::error::{ContactsError, ContactsResult};
use crate::models::{AddressBook, Record};

const TEMP_EXTENSION: &str = "json.tmp";

/// Serializable contact data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct ContactData {
    contacts: Vec<Record>,
}

/// Repository for address book persistence
pub struct ContactRepository {
    path: PathBuf,
    book: AddressBook,
}

impl ContactRepository {
    /// Create a repository with an empty address book
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            book: AddressBook::new(),
        }
    }

    /// Load the address book from disk, replacing the in-memory one
    ///
    /// A missing file loads as an empty address book. Unparseable JSON and
    /// duplicate or empty names are `Storage` errors.
    pub fn load(&mut self) -> ContactsResult<()> {
        let data: ContactData = match fs::read_to_string(&self.path) {
            Ok(text) => serde_json::from_str(&text).map_err(|e| self.storage_error("parse", e))?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => ContactData::default(),
            Err(e) => return Err(self.storage_error("read", e)),
        };

        let book = AddressBook::from_records(data.contacts)
            .map_err(|e| self.storage_error("load contacts from", e))?;
        self.book = book;
        Ok(())
    }

    /// Save the address book to disk in its iteration order
    pub fn save(&self) -> ContactsResult<()> {
        let data = ContactData {
            contacts: self.book.iter().cloned().collect(),
        };
        let json = serde_json::to_vec_pretty(&data)?;

        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(|e| self.storage_error("create directory for", e))?;
        }

        let temp_path = self.path.with_extension(TEMP_EXTENSION);
        let written = File::create(&temp_path)
            .and_then(|mut file| {
                file.write_all(&json)?;
                file.sync_all()
            })
            .and_then(|()| fs::rename(&temp_path, &self.path));

        if let Err(e) = written {
            let _ = fs::remove_file(&temp_path);
            return Err(self.storage_error("write", e));
        }

        Ok(())
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn book_mut(&mut self) -> &mut AddressBook {
        &mut self.book
    }

    fn storage_error(&self, action: &str, err: impl fmt::Display) -> ContactsError {
        ContactsError::Storage(format!(
            "Failed to {} {}: {}",
            action,
            self.path.display(),
            err
        ))
    }
}
