//! CLI commands for data export and import
//!
//! Exports the whole address book to a file, and merges JSON/YAML exports
//! back in.

use clap::ValueEnum;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{ContactsError, ContactsResult};
use crate::export::{export_csv, export_json, export_yaml, import_json, import_yaml};
use crate::services::ContactService;
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (one row per contact)
    Csv,
    /// JSON format (full address book)
    Json,
    /// YAML format (full address book, human-readable)
    Yaml,
}

impl ExportFormat {
    /// Guess the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_lowercase();
        match extension.as_str() {
            "csv" => Some(Self::Csv),
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

/// Handle the export command
pub fn handle_export_command(
    storage: &Storage,
    output: PathBuf,
    format: ExportFormat,
    pretty: bool,
) -> ContactsResult<()> {
    let file = File::create(&output).map_err(|e| {
        ContactsError::Export(format!(
            "Failed to create file {}: {}",
            output.display(),
            e
        ))
    })?;
    let mut writer = BufWriter::new(file);

    let book = storage.contacts.book();
    match format {
        ExportFormat::Csv => export_csv(book, &mut writer)?,
        ExportFormat::Json => export_json(book, &mut writer, pretty)?,
        ExportFormat::Yaml => export_yaml(book, &mut writer)?,
    }
    writer.flush()?;

    println!("Exported {} contacts to: {}", book.len(), output.display());
    Ok(())
}

/// Handle the import command
///
/// Contacts whose names already exist are skipped, never overwritten.
pub fn handle_import_command(
    storage: &mut Storage,
    file: PathBuf,
    format: Option<ExportFormat>,
) -> ContactsResult<()> {
    if !file.exists() {
        return Err(ContactsError::Validation(format!(
            "File not found: {}",
            file.display()
        )));
    }

    let format = format
        .or_else(|| ExportFormat::from_path(&file))
        .unwrap_or(ExportFormat::Json);

    let content = std::fs::read_to_string(&file)?;
    let book = match format {
        ExportFormat::Json => import_json(&content)?,
        ExportFormat::Yaml => import_yaml(&content)?,
        ExportFormat::Csv => {
            return Err(ContactsError::Validation(
                "CSV files cannot be imported. Use a JSON or YAML export.".into(),
            ))
        }
    };

    let summary = ContactService::new(storage).import(book)?;

    println!("Imported {} contacts.", summary.added.len());
    if !summary.skipped.is_empty() {
        println!(
            "Skipped {} existing: {}",
            summary.skipped.len(),
            summary.skipped.join(", ")
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::ContactPaths;
    use crate::models::Record;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ContactPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            ExportFormat::from_path(Path::new("out.YML")),
            Some(ExportFormat::Yaml)
        );
        assert_eq!(
            ExportFormat::from_path(Path::new("out.json")),
            Some(ExportFormat::Json)
        );
        assert_eq!(ExportFormat::from_path(Path::new("out")), None);
    }

    #[test]
    fn test_export_then_import_into_other_book() {
        let (temp_dir, mut source) = create_test_storage();
        ContactService::new(&mut source)
            .create_contact("Alice", &["111".to_string()], Some("15.03.1990"))
            .unwrap();

        let output = temp_dir.path().join("contacts.yaml");
        handle_export_command(&source, output.clone(), ExportFormat::Yaml, false).unwrap();

        let (_other_dir, mut target) = create_test_storage();
        target
            .contacts
            .book_mut()
            .add_record(Record::new("Bob").unwrap())
            .unwrap();

        handle_import_command(&mut target, output, None).unwrap();

        let book = target.contacts.book();
        assert_eq!(book.len(), 2);
        assert_eq!(
            book.find("Alice").unwrap().to_string(),
            "Contact name: Alice, phones: 111, birthday: 15.03.1990"
        );
    }

    #[test]
    fn test_import_csv_rejected() {
        let (temp_dir, mut storage) = create_test_storage();
        let output = temp_dir.path().join("contacts.csv");
        handle_export_command(&storage, output.clone(), ExportFormat::Csv, false).unwrap();

        let err = handle_import_command(&mut storage, output, None).unwrap_err();
        assert!(err.is_user_error());
    }

    #[test]
    fn test_import_missing_file() {
        let (temp_dir, mut storage) = create_test_storage();
        let missing = temp_dir.path().join("missing.json");

        assert!(handle_import_command(&mut storage, missing, None).is_err());
    }
}
