// src/shared/json.rs
//! Conversions for string lists stored in `jsonb` columns.

use serde_json::Value;

/// Keeps the string items of a JSON array; anything else is an empty list.
pub fn list_from_json(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

/// `None` for a null column, otherwise the string items.
pub fn optional_list_from_json(value: Option<&Value>) -> Option<Vec<String>> {
    match value {
        None | Some(Value::Null) => None,
        other => Some(list_from_json(other)),
    }
}

pub fn list_to_json(items: &[String]) -> Value {
    Value::Array(items.iter().cloned().map(Value::String).collect())
}
