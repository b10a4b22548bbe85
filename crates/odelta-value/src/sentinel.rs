//! Reserved field names carried inside delta objects.
//!
//! A real field literally named like one of these keys is indistinguishable
//! from the control field once it reaches a delta. [`find_reserved`] lets a
//! caller check its data before diffing.

use crate::value::Value;

/// Array-delta key holding the array length on that side.
pub const COUNT_KEY: &str = "@@ Count";

/// Object-delta key listing the field names to delete on that side.
pub const REMOVED_KEY: &str = "@@ Removed";

/// Returns `true` if `key` is one of the reserved delta keys.
pub fn is_reserved(key: &str) -> bool {
    key == COUNT_KEY || key == REMOVED_KEY
}

/// Paths (dot-separated, array indices in decimal) of every object field in
/// `value` whose name collides with a reserved key.
pub fn find_reserved(value: &Value) -> Vec<String> {
    let mut found = Vec::new();
    collect_reserved(value, &mut String::new(), &mut found);
    found
}

fn collect_reserved(value: &Value, path: &mut String, found: &mut Vec<String>) {
    match value {
        Value::Object(fields) => {
            for (key, child) in fields {
                let len = path.len();
                push_segment(path, key);
                if is_reserved(key) {
                    found.push(path.clone());
                }
                collect_reserved(child, path, found);
                path.truncate(len);
            }
        }
        Value::Array(items) => {
            for (i, child) in items.iter().enumerate() {
                let len = path.len();
                push_segment(path, &i.to_string());
                collect_reserved(child, path, found);
                path.truncate(len);
            }
        }
        _ => {}
    }
}

fn push_segment(path: &mut String, segment: &str) {
    if !path.is_empty() {
        path.push('.');
    }
    path.push_str(segment);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reserved_names() {
        assert!(is_reserved("@@ Count"));
        assert!(is_reserved("@@ Removed"));
        assert!(!is_reserved("Count"));
        assert!(!is_reserved("@@Count"));
    }

    #[test]
    fn clean_data_has_no_collisions() {
        let v = Value::from(json!({"a": [{"b": 1}], "c": {"d": null}}));
        assert!(find_reserved(&v).is_empty());
    }

    #[test]
    fn collisions_are_reported_with_paths() {
        let v = Value::from(json!({
            "@@ Count": 1,
            "items": [{"ok": true}, {"@@ Removed": ["x"]}]
        }));
        assert_eq!(find_reserved(&v), vec!["@@ Count", "items.1.@@ Removed"]);
    }
}
