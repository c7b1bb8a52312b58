// src/shared/validation.rs
//! Field-level validation shared by every write command.
//!
//! Checks append human readable messages to a [`ValidationErrors`] collector
//! keyed by field name (list items use `field.index`), so one request reports
//! every problem at once instead of failing on the first.

use serde_json::Value;
use std::collections::BTreeMap;
use url::Url;

#[derive(Debug, Clone, Default, PartialEq, Eq, thiserror::Error)]
#[error("validation failed for {} field(s)", .fields.len())]
pub struct ValidationErrors {
    fields: BTreeMap<String, Vec<String>>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.fields
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn has(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn fields(&self) -> &BTreeMap<String, Vec<String>> {
        &self.fields
    }

    pub fn into_fields(self) -> BTreeMap<String, Vec<String>> {
        self.fields
    }

    /// Returns `value` when nothing was collected.
    pub fn finish<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}

fn check_length(errors: &mut ValidationErrors, field: &str, value: &str, min: usize, max: usize) {
    let len = char_len(value);
    if len < min {
        errors.add(
            field,
            format!("The {field} must be at least {min} characters."),
        );
    } else if len > max {
        errors.add(
            field,
            format!("The {field} must not be greater than {max} characters."),
        );
    }
}

/// Trimmed mandatory text with a character-length window.
pub fn required_text(
    errors: &mut ValidationErrors,
    field: &str,
    value: &str,
    min: usize,
    max: usize,
) -> String {
    let value = value.trim();
    if value.is_empty() {
        errors.add(field, format!("The {field} field is required."));
    } else {
        check_length(errors, field, value, min, max);
    }
    value.to_string()
}

/// Blank input is treated as absent.
pub fn optional_text(
    errors: &mut ValidationErrors,
    field: &str,
    value: Option<&str>,
    min: usize,
    max: usize,
) -> Option<String> {
    let value = value.map(str::trim).filter(|v| !v.is_empty())?;
    check_length(errors, field, value, min, max);
    Some(value.to_string())
}

#[derive(Debug, Clone, Copy)]
pub struct ListRule {
    pub required: bool,
    pub max_items: Option<usize>,
    pub max_item_len: usize,
}

/// Trims every item and drops blank ones before checking the bounds.
pub fn string_list(
    errors: &mut ValidationErrors,
    field: &str,
    items: &[String],
    rule: ListRule,
) -> Vec<String> {
    let cleaned: Vec<String> = items
        .iter()
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect();

    if rule.required && cleaned.is_empty() {
        errors.add(field, format!("The {field} must have at least 1 item."));
    }

    if let Some(max) = rule.max_items {
        if cleaned.len() > max {
            errors.add(
                field,
                format!("The {field} must not have more than {max} items."),
            );
        }
    }

    for (index, item) in cleaned.iter().enumerate() {
        if char_len(item) > rule.max_item_len {
            errors.add(
                format!("{field}.{index}"),
                format!(
                    "The {field}.{index} must not be greater than {} characters.",
                    rule.max_item_len
                ),
            );
        }
    }

    cleaned
}

pub fn is_http_url(value: &str) -> bool {
    Url::parse(value)
        .map(|url| matches!(url.scheme(), "http" | "https") && url.host().is_some())
        .unwrap_or(false)
}

pub fn optional_url(
    errors: &mut ValidationErrors,
    field: &str,
    value: Option<&str>,
    max: usize,
) -> Option<String> {
    let value = value.map(str::trim).filter(|v| !v.is_empty())?;

    if !is_http_url(value) {
        errors.add(field, format!("The {field} must be a valid URL."));
    } else if char_len(value) > max {
        errors.add(
            field,
            format!("The {field} must not be greater than {max} characters."),
        );
    }

    Some(value.to_string())
}

/// JSON object or nothing; `null` counts as absent.
pub fn optional_object(
    errors: &mut ValidationErrors,
    field: &str,
    value: Option<Value>,
) -> Option<Value> {
    match value {
        None | Some(Value::Null) => None,
        Some(Value::Object(map)) => Some(Value::Object(map)),
        Some(_) => {
            errors.add(field, format!("The {field} must be an object."));
            None
        }
    }
}

pub fn integer_range(errors: &mut ValidationErrors, field: &str, value: i32, min: i32, max: i32) {
    if value < min || value > max {
        errors.add(field, format!("The {field} must be between {min} and {max}."));
    }
}
