//! Audit entry data structures
//!
//! Defines the operation kinds and the entry format written to the audit log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Contact was created
    Create,
    /// Contact was changed (phones or birthday)
    Update,
    /// Contact was deleted
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// A single audit log entry
///
/// Records one operation on a contact with optional before/after snapshots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    /// Name of the affected contact
    pub contact: String,

    /// JSON snapshot before the operation (updates/deletes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    /// JSON snapshot after the operation (creates/updates)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,

    /// Human-readable diff summary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff_summary: Option<String>,
}

impl AuditEntry {
    /// Create an entry for a newly added contact
    pub fn create<T: Serialize>(contact: impl Into<String>, entity: &T) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Create,
            contact: contact.into(),
            before: None,
            after: serde_json::to_value(entity).ok(),
            diff_summary: None,
        }
    }

    /// Create an entry for a changed contact
    pub fn update<T: Serialize>(
        contact: impl Into<String>,
        before: &T,
        after: &T,
        diff_summary: Option<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Update,
            contact: contact.into(),
            before: serde_json::to_value(before).ok(),
            after: serde_json::to_value(after).ok(),
            diff_summary,
        }
    }

    /// Create an entry for a deleted contact
    pub fn delete<T: Serialize>(contact: impl Into<String>, entity: &T) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Delete,
            contact: contact.into(),
            before: serde_json::to_value(entity).ok(),
            after: None,
            diff_summary: None,
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.contact
        );

        if let Some(diff) = &self.diff_summary {
            output.push_str(&format!("\n  Changes: {}", diff));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::Create.to_string(), "CREATE");
        assert_eq!(Operation::Update.to_string(), "UPDATE");
        assert_eq!(Operation::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_create_entry() {
        let entry = AuditEntry::create("Alice", &json!({"name": "Alice", "phones": []}));

        assert_eq!(entry.operation, Operation::Create);
        assert_eq!(entry.contact, "Alice");
        assert!(entry.before.is_none());
        assert!(entry.after.is_some());
    }

    #[test]
    fn test_update_entry() {
        let before = json!({"name": "Alice", "phones": ["111"]});
        let after = json!({"name": "Alice", "phones": ["222"]});

        let entry = AuditEntry::update(
            "Alice",
            &before,
            &after,
            Some("phones: [\"111\"] -> [\"222\"]".to_string()),
        );

        assert_eq!(entry.operation, Operation::Update);
        assert!(entry.before.is_some());
        assert!(entry.after.is_some());
        assert!(entry.diff_summary.is_some());
    }

    #[test]
    fn test_delete_entry() {
        let entry = AuditEntry::delete("Bob", &json!({"name": "Bob"}));

        assert_eq!(entry.operation, Operation::Delete);
        assert!(entry.before.is_some());
        assert!(entry.after.is_none());
    }

    #[test]
    fn test_serialization_skips_empty_fields() {
        let entry = AuditEntry::create("Alice", &json!({"name": "Alice"}));

        let line = serde_json::to_string(&entry).unwrap();
        assert!(line.contains("\"operation\":\"create\""));
        assert!(!line.contains("before"));

        let deserialized: AuditEntry = serde_json::from_str(&line).unwrap();
        assert_eq!(deserialized.operation, Operation::Create);
        assert_eq!(deserialized.contact, "Alice");
    }

    #[test]
    fn test_human_readable_format() {
        let entry = AuditEntry::update(
            "Alice",
            &json!({}),
            &json!({}),
            Some("birthday: (added) -> \"1990-03-15\"".to_string()),
        );

        let formatted = entry.format_human_readable();
        assert!(formatted.contains("UPDATE Alice"));
        assert!(formatted.contains("Changes: birthday"));
    }
}
