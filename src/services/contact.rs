//! Contact service
//!
//! Business operations on the address book. Every successful mutation is
//! saved to disk and then recorded in the audit log. The contacts file is
//! written first, so an audit failure is reported for a change that is
//! already saved.

use chrono::{Local, NaiveDate};

use crate::error::{ContactsError, ContactsResult};
use crate::models::{AddressBook, Birthday, ContactName, Record};
use crate::storage::Storage;

/// Whether `add_contact` created a new record or extended an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    Updated,
}

/// A contact whose birthday falls inside the requested window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    pub birthday: Birthday,
    /// Date of the next anniversary
    pub next_date: NaiveDate,
    pub days_until: i64,
}

/// Result of importing contacts from an export
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub added: Vec<String>,
    /// Names that already existed and were left untouched
    pub skipped: Vec<String>,
}

/// Service for contact management
pub struct ContactService<'a> {
    storage: &'a mut Storage,
}

impl<'a> ContactService<'a> {
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    /// Create a new contact with optional phones and birthday
    ///
    /// # Errors
    ///
    /// Fails with `Duplicate` if the name is taken, and with `InvalidName` or
    /// `InvalidDate` on bad input. Nothing is stored on failure.
    pub fn create_contact(
        &mut self,
        name: &str,
        phones: &[String],
        birthday: Option<&str>,
    ) -> ContactsResult<Record> {
        let mut record = Record::new(name)?;
        for phone in phones {
            record.add_phone(phone.as_str());
        }
        if let Some(date) = birthday {
            record.set_birthday(date)?;
        }

        self.insert(record)
    }

    /// Add a contact, or append a phone to it if it already exists
    pub fn add_contact(&mut self, name: &str, phone: Option<&str>) -> ContactsResult<AddOutcome> {
        let name = ContactName::new(name)?;

        if self.find(name.as_str()).is_some() {
            if let Some(phone) = phone {
                self.update_record(name.as_str(), |record| {
                    record.add_phone(phone);
                    Ok(())
                })?;
            }
            return Ok(AddOutcome::Updated);
        }

        let mut record = Record::new(name.as_str())?;
        if let Some(phone) = phone {
            record.add_phone(phone);
        }
        self.insert(record)?;
        Ok(AddOutcome::Added)
    }

    /// Replace the first occurrence of `old` with `new` for a contact
    pub fn change_phone(&mut self, name: &str, old: &str, new: &str) -> ContactsResult<Record> {
        self.update_record(name, |record| record.edit_phone(old, new))
    }

    /// Remove every occurrence of `phone` from a contact
    pub fn remove_phone(&mut self, name: &str, phone: &str) -> ContactsResult<Record> {
        self.update_record(name, |record| {
            record.remove_phone(phone);
            Ok(())
        })
    }

    /// Set (or replace) a contact's birthday from `DD.MM.YYYY` text
    pub fn set_birthday(&mut self, name: &str, date: &str) -> ContactsResult<Record> {
        self.update_record(name, |record| record.set_birthday(date))
    }

    /// Delete a contact
    pub fn delete(&mut self, name: &str) -> ContactsResult<Record> {
        let record = self.storage.contacts.book_mut().delete(name)?;

        self.storage.contacts.save()?;
        self.storage.log_delete(record.name().as_str(), &record)?;

        Ok(record)
    }

    /// Add every contact from `book` whose name is not taken yet
    pub fn import(&mut self, book: AddressBook) -> ContactsResult<ImportSummary> {
        let mut summary = ImportSummary::default();

        for record in book.into_records() {
            let name = record.name().to_string();
            if self.find(&name).is_some() {
                summary.skipped.push(name);
            } else {
                self.insert(record)?;
                summary.added.push(name);
            }
        }

        Ok(summary)
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.storage.contacts.book().find(name)
    }

    /// Look up a contact, failing with `NotFound` on a miss
    pub fn get(&self, name: &str) -> ContactsResult<&Record> {
        self.find(name)
            .ok_or_else(|| ContactsError::contact_not_found(name))
    }

    /// All contacts in insertion order
    pub fn list(&self) -> Vec<&Record> {
        self.storage.contacts.book().iter().collect()
    }

    pub fn count(&self) -> usize {
        self.storage.contacts.book().len()
    }

    /// Contacts with a birthday in the next `within_days` days, counted from today
    pub fn upcoming_birthdays(&self, within_days: i64) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays_on(within_days, Local::now().date_naive())
    }

    /// Contacts with a birthday in the next `within_days` days from `reference`
    pub fn upcoming_birthdays_on(
        &self,
        within_days: i64,
        reference: NaiveDate,
    ) -> Vec<UpcomingBirthday> {
        self.storage
            .contacts
            .book()
            .upcoming_birthdays_on(within_days, reference)
            .into_iter()
            .filter_map(|record| {
                let birthday = *record.birthday()?;
                Some(UpcomingBirthday {
                    name: record.name().to_string(),
                    birthday,
                    next_date: birthday.next_anniversary(reference)?,
                    days_until: birthday.days_until_next(reference)?,
                })
            })
            .collect()
    }

    /// Save everything held in memory
    pub fn save(&self) -> ContactsResult<()> {
        self.storage.save_all()
    }

    /// Add a record, save, then audit
    fn insert(&mut self, record: Record) -> ContactsResult<Record> {
        self.storage.contacts.book_mut().add_record(record.clone())?;

        self.storage.contacts.save()?;
        self.storage.log_create(record.name().as_str(), &record)?;

        Ok(record)
    }

    /// Apply `change` to a contact in place, then save and audit it
    ///
    /// Nothing is written when `change` fails or leaves the record untouched.
    fn update_record<F>(&mut self, name: &str, change: F) -> ContactsResult<Record>
    where
        F: FnOnce(&mut Record) -> ContactsResult<()>,
    {
        let record = self
            .storage
            .contacts
            .book_mut()
            .find_mut(name)
            .ok_or_else(|| ContactsError::contact_not_found(name))?;

        let before = record.clone();
        change(&mut *record)?;
        let after = record.clone();

        if after != before {
            self.storage.contacts.save()?;
            self.storage.log_update(after.name().as_str(), &before, &after)?;
        }

        Ok(after)
    }
}
