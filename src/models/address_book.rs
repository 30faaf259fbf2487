//! Address book model
//!
//! The address book maps contact names to records. Names are unique and
//! iteration follows insertion order.

use chrono::{Local, NaiveDate};
use std::collections::HashMap;

use super::name::normalize_name;
use super::record::Record;
use crate::error::{ContactsError, ContactsResult};

/// Default look-ahead window for upcoming birthdays, in days
pub const DEFAULT_UPCOMING_WINDOW: u32 = 7;

/// Name-keyed collection of contact records
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: HashMap<String, Record>,
    /// Keys in insertion order
    order: Vec<String>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an address book from records, keeping their order
    ///
    /// # Errors
    ///
    /// Returns `Duplicate` if two records share a name.
    pub fn from_records(records: impl IntoIterator<Item = Record>) -> ContactsResult<Self> {
        let mut book = Self::new();
        for record in records {
            book.add_record(record)?;
        }
        Ok(book)
    }

    /// Insert a record keyed by its name
    ///
    /// # Errors
    ///
    /// Returns `Duplicate` if a record with the same name already exists.
    /// The existing record is never overwritten.
    pub fn add_record(&mut self, record: Record) -> ContactsResult<()> {
        let key = record.name().as_str().to_string();
        if self.records.contains_key(&key) {
            return Err(ContactsError::duplicate_contact(key));
        }

        self.order.push(key.clone());
        self.records.insert(key, record);
        Ok(())
    }

    /// Look up a record; surrounding whitespace in `name` is ignored
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(normalize_name(name))
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(normalize_name(name))
    }

    /// Remove and return the record for `name`
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if there is no such contact.
    pub fn delete(&mut self, name: &str) -> ContactsResult<Record> {
        let name = normalize_name(name);
        let record = self
            .records
            .remove(name)
            .ok_or_else(|| ContactsError::contact_not_found(name))?;

        self.order.retain(|key| key != name);
        Ok(record)
    }

    /// Records whose next birthday falls within `within_days` of today
    pub fn upcoming_birthdays(&self, within_days: i64) -> Vec<&Record> {
        self.upcoming_birthdays_on(within_days, Local::now().date_naive())
    }

    /// Records with `0 <= days_to_next_birthday(reference) < within_days`
    ///
    /// A window of zero or less never matches.
    pub fn upcoming_birthdays_on(&self, within_days: i64, reference: NaiveDate) -> Vec<&Record> {
        self.iter()
            .filter(|record| {
                record
                    .days_to_next_birthday(reference)
                    .is_some_and(|days| (0..within_days).contains(&days))
            })
            .collect()
    }

    /// Iterate records in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.order.iter().filter_map(|key| self.records.get(key))
    }

    /// Consume the book, yielding records in insertion order
    pub fn into_records(mut self) -> Vec<Record> {
        self.order
            .iter()
            .filter_map(|key| self.records.remove(key))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
