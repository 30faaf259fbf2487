//! Export module for the contact book
//!
//! Provides complete address book export in multiple formats:
//! - CSV: one row per contact (spreadsheet-compatible)
//! - JSON: machine-readable export with schema versioning
//! - YAML: human-readable export
//!
//! JSON and YAML exports can be imported back.

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_csv;
pub use self::json::{export_json, import_json, ContactExport, EXPORT_SCHEMA_VERSION};
pub use self::yaml::{export_yaml, import_yaml};
