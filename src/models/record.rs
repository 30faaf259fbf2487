//! Contact record model
//!
//! A record holds one contact's name, phone numbers and optional birthday,
//! and knows how far away the next birthday is.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::birthday::Birthday;
use super::name::ContactName;
use super::phone::{join_phones, Phone};
use crate::error::{ContactsError, ContactsResult};

/// One contact in the address book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Contact name, fixed at creation
    name: ContactName,

    /// Phone numbers in insertion order; duplicates are allowed
    #[serde(default)]
    phones: Vec<Phone>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday
    ///
    /// # Errors
    ///
    /// Returns `InvalidName` if `name` is empty.
    pub fn new(name: impl AsRef<str>) -> ContactsResult<Self> {
        Ok(Self {
            name: ContactName::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Append a phone number
    pub fn add_phone(&mut self, number: impl Into<String>) {
        self.phones.push(Phone::new(number));
    }

    /// Remove every phone equal to `number`; a miss is not an error
    pub fn remove_phone(&mut self, number: &str) {
        self.phones.retain(|phone| !phone.matches(number));
    }

    /// Replace the first occurrence of `old` with `new`, keeping its position
    pub fn edit_phone(&mut self, old: &str, new: impl Into<String>) -> ContactsResult<()> {
        let slot = self
            .phones
            .iter_mut()
            .find(|phone| phone.matches(old))
            .ok_or_else(|| ContactsError::phone_not_found(old))?;

        *slot = Phone::new(new);
        Ok(())
    }

    pub fn find_phone(&self, number: &str) -> Option<&Phone> {
        self.phones.iter().find(|phone| phone.matches(number))
    }

    /// Parse and store a `DD.MM.YYYY` birthday, replacing any previous one
    pub fn set_birthday(&mut self, date_text: &str) -> ContactsResult<()> {
        self.birthday = Some(Birthday::parse(date_text)?);
        Ok(())
    }

    /// Days until the next birthday counted from `reference`
    ///
    /// Returns `None` when no birthday is set.
    pub fn days_to_next_birthday(&self, reference: NaiveDate) -> Option<i64> {
        self.birthday?.days_until_next(reference)
    }

    /// One-line summary used by listings
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, phones: {}, birthday: ",
            self.name,
            join_phones(&self.phones)
        )?;
        match &self.birthday {
            Some(birthday) => write!(f, "{}", birthday),
            None => write!(f, "Not set"),
        }
    }
}
