//! YAML export functionality
//!
//! Exports the address book to YAML for a human-readable backup.

use std::io::Write;

use crate::error::{ContactsError, ContactsResult};
use crate::export::json::ContactExport;
use crate::models::AddressBook;

/// Export the address book to YAML
pub fn export_yaml<W: Write>(book: &AddressBook, writer: &mut W) -> ContactsResult<()> {
    let export = ContactExport::from_book(book);

    writeln!(writer, "# Contact book export").map_err(export_err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(export_err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(export_err)?;
    writeln!(writer).map_err(export_err)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| ContactsError::Export(e.to_string()))
}

/// Read a YAML export back into an address book
pub fn import_yaml(yaml_str: &str) -> ContactsResult<AddressBook> {
    let export: ContactExport =
        serde_yaml::from_str(yaml_str).map_err(|e| ContactsError::Validation(e.to_string()))?;

    export.into_address_book()
}

fn export_err(e: std::io::Error) -> ContactsError {
    ContactsError::Export(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Record;

    #[test]
    fn test_yaml_roundtrip() {
        let mut alice = Record::new("Alice").unwrap();
        alice.add_phone("111");
        alice.set_birthday("29.02.2000").unwrap();
        let book = AddressBook::from_records(vec![alice, Record::new("Bob").unwrap()]).unwrap();

        let mut output = Vec::new();
        export_yaml(&book, &mut output).unwrap();

        let yaml = String::from_utf8(output).unwrap();
        assert!(yaml.starts_with("# Contact book export"));
        assert!(yaml.contains("name: Alice"));

        assert_eq!(import_yaml(&yaml).unwrap(), book);
    }

    #[test]
    fn test_import_rejects_duplicates() {
        let yaml = r#"
schema_version: 1.0.0
exported_at: 2024-03-10T12:00:00Z
app_version: 0.1.0
contact_count: 2
contacts:
  - name: Alice
  - name: Alice
"#;
        assert!(import_yaml(yaml).unwrap_err().is_duplicate());
    }
}
