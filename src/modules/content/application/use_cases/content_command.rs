use serde::Deserialize;
use serde_json::Value;

use crate::modules::content::application::domain::entities::{ContentRecord, ContentType};
use crate::modules::content::application::ports::outgoing::ContentData;
use crate::shared::text::slugify;
use crate::shared::validation::{optional_object, optional_text, required_text, ValidationErrors};

/// Raw admin input for a `portfolio_content` row.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContentInput {
    #[serde(rename = "type", default)]
    pub content_type: String,
    pub key: Option<String>,
    pub category: Option<String>,
    #[serde(default)]
    pub title_en: String,
    pub title_ar: Option<String>,
    pub subtitle_en: Option<String>,
    pub subtitle_ar: Option<String>,
    pub description_en: Option<String>,
    pub description_ar: Option<String>,
    #[serde(default)]
    pub content_en: String,
    pub content_ar: Option<String>,
    pub metadata_en: Option<Value>,
    pub metadata_ar: Option<Value>,
    pub is_active: Option<bool>,
    pub sort_order: Option<i32>,
}

/// Validated content write. Construction is the only way to obtain one.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentCommand {
    key: Option<String>,
    content_type: ContentType,
    category: Option<String>,
    title_en: String,
    title_ar: Option<String>,
    subtitle_en: Option<String>,
    subtitle_ar: Option<String>,
    description_en: Option<String>,
    description_ar: Option<String>,
    content_en: String,
    content_ar: Option<String>,
    metadata_en: Option<Value>,
    metadata_ar: Option<Value>,
    is_active: Option<bool>,
    sort_order: Option<i32>,
}

impl ContentCommand {
    pub fn new(input: ContentInput) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let content_type = match input.content_type.trim() {
            "" => {
                errors.add("type", "The type field is required.");
                None
            }
            raw => match raw.parse::<ContentType>() {
                Ok(t) => Some(t),
                Err(_) => {
                    errors.add("type", "The selected type is invalid.");
                    None
                }
            },
        };

        let key = optional_text(&mut errors, "key", input.key.as_deref(), 1, 191);
        let category = optional_text(&mut errors, "category", input.category.as_deref(), 1, 100);
        let title_en = required_text(&mut errors, "title_en", &input.title_en, 1, 255);
        let title_ar = optional_text(&mut errors, "title_ar", input.title_ar.as_deref(), 1, 255);
        let subtitle_en =
            optional_text(&mut errors, "subtitle_en", input.subtitle_en.as_deref(), 1, 255);
        let subtitle_ar =
            optional_text(&mut errors, "subtitle_ar", input.subtitle_ar.as_deref(), 1, 255);
        let description_en = optional_text(
            &mut errors,
            "description_en",
            input.description_en.as_deref(),
            1,
            usize::MAX,
        );
        let description_ar = optional_text(
            &mut errors,
            "description_ar",
            input.description_ar.as_deref(),
            1,
            usize::MAX,
        );
        let content_en = required_text(&mut errors, "content_en", &input.content_en, 1, usize::MAX);
        let content_ar = optional_text(
            &mut errors,
            "content_ar",
            input.content_ar.as_deref(),
            1,
            usize::MAX,
        );
        let metadata_en = optional_object(&mut errors, "metadata_en", input.metadata_en);
        let metadata_ar = optional_object(&mut errors, "metadata_ar", input.metadata_ar);

        if input.sort_order.is_some_and(|order| order < 0) {
            errors.add("sort_order", "The sort_order must be at least 0.");
        }

        let content_type = match content_type {
            Some(t) if errors.is_empty() => t,
            _ => return Err(errors),
        };

        Ok(Self {
            key,
            content_type,
            category,
            title_en,
            title_ar,
            subtitle_en,
            subtitle_ar,
            description_en,
            description_ar,
            content_en,
            content_ar,
            metadata_en,
            metadata_ar,
            is_active: input.is_active,
            sort_order: input.sort_order,
        })
    }

    pub fn content_type(&self) -> ContentType {
        self.content_type
    }

    /// Key used when none was supplied on create: `{type}-{slug(title_en)}`.
    pub fn default_key(&self) -> String {
        let slug = slugify(&self.title_en);
        if slug.is_empty() {
            format!("{}-{}", self.content_type, uuid::Uuid::new_v4().simple())
        } else {
            format!("{}-{}", self.content_type, slug)
        }
    }

    pub fn into_create_data(self) -> ContentData {
        let key = self.key.clone().unwrap_or_else(|| self.default_key());
        self.into_data(key, true, 0)
    }

    /// Omitted key, flag and order keep the values of `current`.
    pub fn into_update_data(self, current: &ContentRecord) -> ContentData {
        let key = self.key.clone().unwrap_or_else(|| current.key.clone());
        self.into_data(key, current.is_active, current.sort_order)
    }

    fn into_data(self, key: String, is_active: bool, sort_order: i32) -> ContentData {
        ContentData {
            key,
            content_type: self.content_type,
            category: self.category,
            title_en: Some(self.title_en),
            title_ar: self.title_ar,
            subtitle_en: self.subtitle_en,
            subtitle_ar: self.subtitle_ar,
            description_en: self.description_en,
            description_ar: self.description_ar,
            content_en: Some(self.content_en),
            content_ar: self.content_ar,
            metadata_en: self.metadata_en,
            metadata_ar: self.metadata_ar,
            is_active: self.is_active.unwrap_or(is_active),
            sort_order: self.sort_order.unwrap_or(sort_order),
        }
    }
}
