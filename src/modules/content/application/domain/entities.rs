use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::shared::i18n::{translatable, FieldValue, Locale, Translatable};

/// Discriminator of the generic `portfolio_content` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    Personal,
    About,
    Testimonial,
    BlogPost,
    ContactMessage,
    Service,
    Skill,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown content type: {0}")]
pub struct UnknownContentType(pub String);

impl ContentType {
    pub const ALL: [ContentType; 7] = [
        ContentType::Personal,
        ContentType::About,
        ContentType::Testimonial,
        ContentType::BlogPost,
        ContentType::ContactMessage,
        ContentType::Service,
        ContentType::Skill,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ContentType::Personal => "personal",
            ContentType::About => "about",
            ContentType::Testimonial => "testimonial",
            ContentType::BlogPost => "blog_post",
            ContentType::ContactMessage => "contact_message",
            ContentType::Service => "service",
            ContentType::Skill => "skill",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = UnknownContentType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContentType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownContentType(s.to_string()))
    }
}

/// One row of `portfolio_content`, both languages side by side.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentRecord {
    pub id: i32,
    pub key: String,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub category: Option<String>,
    pub title_en: Option<String>,
    pub title_ar: Option<String>,
    pub subtitle_en: Option<String>,
    pub subtitle_ar: Option<String>,
    pub description_en: Option<String>,
    pub description_ar: Option<String>,
    pub content_en: Option<String>,
    pub content_ar: Option<String>,
    pub metadata_en: Option<Value>,
    pub metadata_ar: Option<Value>,
    pub is_active: bool,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

translatable!(ContentRecord {
    "title" => (title_en, title_ar),
    "subtitle" => (subtitle_en, subtitle_ar),
    "description" => (description_en, description_ar),
    "content" => (content_en, content_ar),
    "metadata" => (metadata_en, metadata_ar),
});

impl ContentRecord {
    /// Looks `key` up in the localized metadata object, then in the English
    /// one, so a partially translated object still yields English values.
    pub fn metadata_value(&self, key: &str, locale: Locale) -> Option<&Value> {
        self.metadata_entry(key, locale)
            .or_else(|| self.metadata_entry(key, Locale::En))
    }

    fn metadata_entry(&self, key: &str, locale: Locale) -> Option<&Value> {
        match self.translation("metadata", locale) {
            Some(FieldValue::Json(Value::Object(map))) => map
                .get(key)
                .filter(|value| !FieldValue::Json(*value).is_empty()),
            _ => None,
        }
    }

    pub fn metadata_text(&self, key: &str, locale: Locale) -> String {
        match self.metadata_value(key, locale) {
            Some(Value::String(s)) => s.trim().to_string(),
            Some(Value::Number(n)) => n.to_string(),
            _ => String::new(),
        }
    }
}
