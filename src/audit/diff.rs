//! Diff generation for audit logging
//!
//! Generates human-readable diffs between the stored and the newly saved
//! version of a day record.

use serde_json::Value;

/// Generate a human-readable diff between two JSON values
///
/// Nested objects are walked so changes read as dotted paths, e.g.
/// `denominations.20.count: 0.0 -> 32.0`. Returns `None` when nothing changed.
pub fn generate_diff(before: &Value, after: &Value) -> Option<String> {
    let changes = generate_detailed_diff(before, after, "");
    if changes.is_empty() {
        None
    } else {
        Some(changes.join(", "))
    }
}

/// Format a JSON value for human-readable display
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
        Value::Array(arr) => format!("[{} items]", arr.len()),
        Value::Object(obj) => format!("{{{} fields}}", obj.len()),
    }
}

fn join_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", prefix, key)
    }
}

/// List every changed leaf as `path: before -> after`
pub fn generate_detailed_diff(before: &Value, after: &Value, prefix: &str) -> Vec<String> {
    let mut changes = Vec::new();

    match (before, after) {
        (Value::Object(before_obj), Value::Object(after_obj)) => {
            for (key, before_val) in before_obj {
                let path = join_path(prefix, key);
                match after_obj.get(key) {
                    Some(after_val) if before_val != after_val => {
                        changes.extend(generate_detailed_diff(before_val, after_val, &path));
                    }
                    Some(_) => {}
                    None => changes.push(format!(
                        "{}: {} -> (removed)",
                        path,
                        format_value(before_val)
                    )),
                }
            }

            for (key, after_val) in after_obj {
                if !before_obj.contains_key(key) {
                    changes.push(format!(
                        "{}: (added) -> {}",
                        join_path(prefix, key),
                        format_value(after_val)
                    ));
                }
            }
        }
        (Value::Array(before_arr), Value::Array(after_arr)) => {
            if before_arr.len() != after_arr.len() {
                changes.push(format!(
                    "{}: [{} items] -> [{} items]",
                    prefix,
                    before_arr.len(),
                    after_arr.len()
                ));
            } else {
                for (i, (b, a)) in before_arr.iter().zip(after_arr.iter()).enumerate() {
                    if b != a {
                        let item_prefix = format!("{}[{}]", prefix, i);
                        changes.extend(generate_detailed_diff(b, a, &item_prefix));
                    }
                }
            }
        }
        _ => {
            if before != after {
                changes.push(format!(
                    "{}: {} -> {}",
                    prefix,
                    format_value(before),
                    format_value(after)
                ));
            }
        }
    }

    changes
}
