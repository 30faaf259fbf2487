//! Diff generation for audit logging
//!
//! Summarizes what changed between two contact snapshots.

use serde_json::Value;

/// Generate a human-readable diff between two JSON values
///
/// Only top-level fields are compared. Returns `None` when nothing changed.
pub fn generate_diff(before: &Value, after: &Value) -> Option<String> {
    match (before, after) {
        (Value::Object(before_obj), Value::Object(after_obj)) => {
            let mut changes = Vec::new();

            for (key, before_val) in before_obj {
                match after_obj.get(key) {
                    Some(after_val) if after_val != before_val => changes.push(format!(
                        "{}: {} -> {}",
                        key,
                        format_value(before_val),
                        format_value(after_val)
                    )),
                    Some(_) => {}
                    None => changes.push(format!(
                        "{}: {} -> (removed)",
                        key,
                        format_value(before_val)
                    )),
                }
            }

            for (key, after_val) in after_obj {
                if !before_obj.contains_key(key) {
                    changes.push(format!("{}: (added) -> {}", key, format_value(after_val)));
                }
            }

            if changes.is_empty() {
                None
            } else {
                Some(changes.join(", "))
            }
        }
        _ if before != after => Some(format!(
            "{} -> {}",
            format_value(before),
            format_value(after)
        )),
        _ => None,
    }
}

/// Format a JSON value for human-readable display
///
/// Short arrays of scalars (phone lists) are spelled out; anything else is
/// summarized by size.
fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => {
            if s.chars().count() > 50 {
                let head: String = s.chars().take(47).collect();
                format!("\"{}...\"", head)
            } else {
                format!("\"{}\"", s)
            }
        }
        Value::Array(arr) if arr.len() <= 5 && arr.iter().all(is_scalar) => {
            let items: Vec<String> = arr.iter().map(format_value).collect();
            format!("[{}]", items.join(", "))
        }
        Value::Array(arr) => format!("[{} items]", arr.len()),
        Value::Object(obj) => format!("{{{} fields}}", obj.len()),
    }
}

fn is_scalar(value: &Value) -> bool {
    !matches!(value, Value::Array(_) | Value::Object(_))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_phone_list_change() {
        let before = json!({"name": "Alice", "phones": ["111"]});
        let after = json!({"name": "Alice", "phones": ["222", "333"]});

        let diff = generate_diff(&before, &after).unwrap();
        assert_eq!(diff, "phones: [\"111\"] -> [\"222\", \"333\"]");
    }

    #[test]
    fn test_birthday_added() {
        let before = json!({"name": "Alice", "phones": []});
        let after = json!({"name": "Alice", "phones": [], "birthday": "1990-03-15"});

        let diff = generate_diff(&before, &after).unwrap();
        assert_eq!(diff, "birthday: (added) -> \"1990-03-15\"");
    }

    #[test]
    fn test_field_removed() {
        let before = json!({"name": "Test", "birthday": "1990-03-15"});
        let after = json!({"name": "Test"});

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("birthday: \"1990-03-15\" -> (removed)"));
    }

    #[test]
    fn test_no_changes() {
        let snapshot = json!({"name": "Test", "phones": ["111"]});
        assert!(generate_diff(&snapshot, &snapshot).is_none());
    }

    #[test]
    fn test_non_object_values() {
        assert_eq!(
            generate_diff(&json!(1), &json!(2)),
            Some("1 -> 2".to_string())
        );
        assert!(generate_diff(&json!("a"), &json!("a")).is_none());
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(&json!(null)), "null");
        assert_eq!(format_value(&json!(true)), "true");
        assert_eq!(format_value(&json!(42)), "42");
        assert_eq!(format_value(&json!("test")), "\"test\"");
        assert_eq!(format_value(&json!([1, 2])), "[1, 2]");
        assert_eq!(format_value(&json!([1, 2, 3, 4, 5, 6])), "[6 items]");
        assert_eq!(format_value(&json!([{"a": 1}])), "[1 items]");
        assert_eq!(format_value(&json!({"a": 1, "b": 2})), "{2 fields}");
    }

    #[test]
    fn test_long_string_truncation() {
        let diff = generate_diff(&json!({"note": "a".repeat(100)}), &json!({"note": "b"})).unwrap();
        assert!(diff.contains("...\""));
    }
}
