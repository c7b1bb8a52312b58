// src/shared/i18n/translations.rs
//! UI string catalogues embedded at build time from `lang/*.json`.

use serde_json::{Map, Value};
use std::sync::LazyLock;

use super::Locale;

static EN: LazyLock<Value> = LazyLock::new(|| parse("en", include_str!("../../../lang/en.json")));
static AR: LazyLock<Value> = LazyLock::new(|| parse("ar", include_str!("../../../lang/ar.json")));

fn parse(code: &str, raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|e| {
        tracing::error!("Invalid translation catalogue for {}: {}", code, e);
        Value::Object(Map::new())
    })
}

/// Whole catalogue for `locale`, handed to the client renderer.
pub fn translations(locale: Locale) -> &'static Value {
    match locale {
        Locale::En => &EN,
        Locale::Ar => &AR,
    }
}

/// Single entry with English fallback; an unknown key comes back unchanged.
pub fn translate(locale: Locale, key: &str) -> String {
    translations(locale)
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .or_else(|| translations(Locale::En).get(key).and_then(Value::as_str))
        .unwrap_or(key)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogues_are_objects() {
        assert!(translations(Locale::En).is_object());
        assert!(translations(Locale::Ar).is_object());
        assert!(!translations(Locale::En).as_object().unwrap().is_empty());
    }

    #[test]
    fn every_arabic_key_exists_in_english() {
        let en = translations(Locale::En).as_object().unwrap();
        for key in translations(Locale::Ar).as_object().unwrap().keys() {
            assert!(en.contains_key(key), "missing English entry for {key}");
        }
    }

    #[test]
    fn translate_uses_locale_then_english() {
        assert_eq!(translate(Locale::En, "ongoing"), "Ongoing");
        assert_eq!(translate(Locale::Ar, "ongoing"), "قيد التنفيذ");
        assert_eq!(translate(Locale::Ar, "not.a.key"), "not.a.key");
    }
}
