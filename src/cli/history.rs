//! Audit history command

use crate::audit::AuditLogger;
use crate::error::ContactsResult;
use crate::storage::Storage;

/// Print the most recent audit entries, oldest first
///
/// Reads the log even when auditing is currently disabled.
pub fn handle_history_command(storage: &Storage, limit: usize) -> ContactsResult<()> {
    let logger = AuditLogger::new(storage.paths().audit_log());
    if !logger.exists() {
        println!("No history recorded yet.");
        return Ok(());
    }

    let entries = logger.read_recent(limit)?;
    if entries.is_empty() {
        println!("No history recorded yet.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }

    Ok(())
}
