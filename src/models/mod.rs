//! Core data models for the contact book
//!
//! This module contains the value types (names, phones, birthdays), the
//! contact record and the address book that owns all records.

pub mod address_book;
pub mod birthday;
pub mod name;
pub mod phone;
pub mod record;

pub use address_book::{AddressBook, DEFAULT_UPCOMING_WINDOW};
pub use birthday::{Birthday, BIRTHDAY_FORMAT};
pub use name::ContactName;
pub use phone::Phone;
pub use record::Record;
