//! Audit logging for the contact book
//!
//! Records every create, update and delete of a contact with before/after
//! snapshots in an append-only audit log.
//!
//! # Architecture
//!
//! - `AuditEntry`: one log entry with timestamp, operation, contact name and
//!   optional before/after values.
//! - `AuditLogger`: appends entries to the log file as JSON lines (JSONL).
//! - `generate_diff`: summarizes the change between two snapshots.
//!
//! # Example
//!
//! ```rust,ignore
//! use contact_book::audit::{generate_diff, AuditEntry, AuditLogger};
//!
//! let logger = AuditLogger::new(audit_log_path);
//! let before = serde_json::to_value(&old_record)?;
//! let after = serde_json::to_value(&new_record)?;
//! let entry = AuditEntry::update("Alice", &before, &after, generate_diff(&before, &after));
//! logger.log(&entry)?;
//! ```

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
