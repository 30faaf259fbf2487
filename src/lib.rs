//! contact-book - Terminal contact book with birthday reminders
//!
//! This library provides the core functionality for the `contacts` binary:
//! a name-keyed address book of phone numbers and birthdays, persisted as
//! JSON and driven either by one-shot subcommands or an interactive shell.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Contact records and the address book
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer
//! - `audit`: Audit logging system
//! - `display`: Terminal formatting
//! - `export`: CSV/JSON/YAML export and import
//! - `cli`: Command handlers and the interactive shell
//!
//! # Example
//!
//! ```rust,ignore
//! use contact_book::config::{paths::ContactPaths, settings::Settings};
//! use contact_book::services::ContactService;
//! use contact_book::storage::Storage;
//!
//! let paths = ContactPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut storage = Storage::with_settings(paths, &settings)?;
//! storage.load_all()?;
//!
//! ContactService::new(&mut storage).add_contact("Alice", Some("0501234567"))?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::ContactsError;
