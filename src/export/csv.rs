//! CSV export functionality
//!
//! Writes one row per contact with phones joined by `; ` so the file opens
//! cleanly in a spreadsheet.

use std::io::Write;

use crate::error::{ContactsError, ContactsResult};
use crate::models::phone::join_phones;
use crate::models::AddressBook;

/// Export the address book to CSV
pub fn export_csv<W: Write>(book: &AddressBook, writer: W) -> ContactsResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["Name", "Phones", "Birthday"])
        .map_err(|e| ContactsError::Export(e.to_string()))?;

    for record in book.iter() {
        let birthday = record
            .birthday()
            .map(|b| b.to_string())
            .unwrap_or_default();

        csv_writer
            .write_record([
                record.name().as_str(),
                join_phones(record.phones()).as_str(),
                birthday.as_str(),
            ])
            .map_err(|e| ContactsError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| ContactsError::Export(e.to_string()))
}
