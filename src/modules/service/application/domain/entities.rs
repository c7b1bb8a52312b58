use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::shared::i18n::{translatable, Locale, Localized};

/// One row of `services`, both languages side by side.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceRecord {
    pub id: i32,
    pub slug: String,
    pub icon: String,
    pub title_en: String,
    pub title_ar: Option<String>,
    pub description_en: String,
    pub description_ar: Option<String>,
    pub technologies_en: Vec<String>,
    pub technologies_ar: Option<Vec<String>>,
    pub features_en: Vec<String>,
    pub features_ar: Option<Vec<String>>,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub sort_order: i32,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

translatable!(ServiceRecord {
    "title" => (title_en, title_ar),
    "description" => (description_en, description_ar),
    "technologies" => (technologies_en, technologies_ar),
    "features" => (features_en, features_ar),
});

/// A service resolved for one locale, as public pages show it.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ServiceView {
    pub id: i32,
    pub slug: String,
    pub icon: String,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub features: Vec<String>,
    pub image_url: Option<String>,
    pub sort_order: i32,
}

impl ServiceView {
    pub fn localize(record: &ServiceRecord, locale: Locale) -> Self {
        Self {
            id: record.id,
            slug: record.slug.clone(),
            icon: record.icon.clone(),
            title: record.text("title", locale),
            description: record.text("description", locale),
            technologies: record.list("technologies", locale),
            features: record.list("features", locale),
            image_url: record.image_url.clone(),
            sort_order: record.sort_order,
        }
    }
}
