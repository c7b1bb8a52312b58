// src/shared/i18n/resolver.rs
//! Locale fallback for bilingual records.
//!
//! Entities expose their `{field}_en` / `{field}_ar` members through
//! [`Translatable`]; [`Localized`] is the single place that picks the
//! requested language, falls back to English, and finally to an empty value.

use serde_json::{Map, Value};

use super::Locale;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    List(&'a [String]),
    Json(&'a Value),
}

impl FieldValue<'_> {
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(text) => text.trim().is_empty(),
            FieldValue::List(items) => items.is_empty(),
            FieldValue::Json(value) => match value {
                Value::Null => true,
                Value::String(s) => s.is_empty(),
                Value::Array(items) => items.is_empty(),
                Value::Object(map) => map.is_empty(),
                Value::Bool(_) | Value::Number(_) => false,
            },
        }
    }
}

/// Borrowing view over the storage shapes a localized column can take.
pub trait AsFieldValue {
    fn as_field_value(&self) -> Option<FieldValue<'_>>;
}

impl AsFieldValue for String {
    fn as_field_value(&self) -> Option<FieldValue<'_>> {
        Some(FieldValue::Text(self))
    }
}

impl AsFieldValue for Option<String> {
    fn as_field_value(&self) -> Option<FieldValue<'_>> {
        self.as_deref().map(FieldValue::Text)
    }
}

impl AsFieldValue for Vec<String> {
    fn as_field_value(&self) -> Option<FieldValue<'_>> {
        Some(FieldValue::List(self))
    }
}

impl AsFieldValue for Option<Vec<String>> {
    fn as_field_value(&self) -> Option<FieldValue<'_>> {
        self.as_deref().map(FieldValue::List)
    }
}

impl AsFieldValue for Value {
    fn as_field_value(&self) -> Option<FieldValue<'_>> {
        Some(FieldValue::Json(self))
    }
}

impl AsFieldValue for Option<Value> {
    fn as_field_value(&self) -> Option<FieldValue<'_>> {
        self.as_ref().map(FieldValue::Json)
    }
}

pub trait Translatable {
    /// Raw stored value of `{field}_{locale}`, `None` when the record has no
    /// such field or the column is null.
    fn translation(&self, field: &str, locale: Locale) -> Option<FieldValue<'_>>;
}

pub trait Localized: Translatable {
    fn resolve(&self, field: &str, locale: Locale) -> Option<FieldValue<'_>> {
        self.translation(field, locale)
            .filter(|value| !value.is_empty())
            .or_else(|| self.translation(field, Locale::En))
    }

    fn text(&self, field: &str, locale: Locale) -> String {
        match self.resolve(field, locale) {
            Some(FieldValue::Text(text)) => text.to_string(),
            _ => String::new(),
        }
    }

    fn list(&self, field: &str, locale: Locale) -> Vec<String> {
        match self.resolve(field, locale) {
            Some(FieldValue::List(items)) => items.to_vec(),
            _ => Vec::new(),
        }
    }

    /// Objects and arrays come back as stored; anything else is `{}`.
    fn json(&self, field: &str, locale: Locale) -> Value {
        match self.resolve(field, locale) {
            Some(FieldValue::Json(value)) if value.is_object() || value.is_array() => {
                value.clone()
            }
            _ => Value::Object(Map::new()),
        }
    }
}

impl<T: Translatable + ?Sized> Localized for T {}

/// Declares the localized fields of a record:
///
/// ```ignore
/// translatable!(Service {
///     "title" => (title_en, title_ar),
///     "technologies" => (technologies_en, technologies_ar),
/// });
/// ```
macro_rules! translatable {
    ($ty:ty { $($field:literal => ($en:ident, $ar:ident)),+ $(,)? }) => {
        impl $crate::shared::i18n::Translatable for $ty {
            fn translation(
                &self,
                field: &str,
                locale: $crate::shared::i18n::Locale,
            ) -> Option<$crate::shared::i18n::FieldValue<'_>> {
                use $crate::shared::i18n::{AsFieldValue, Locale};

                match (field, locale) {
                    $(
                        ($field, Locale::En) => self.$en.as_field_value(),
                        ($field, Locale::Ar) => self.$ar.as_field_value(),
                    )+
                    _ => None,
                }
            }
        }
    };
}

pub(crate) use translatable;
