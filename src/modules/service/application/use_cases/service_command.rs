use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;

use crate::modules::service::application::domain::ServiceRecord;
use crate::modules::service::application::ports::outgoing::ServiceData;
use crate::shared::text::slugify;
use crate::shared::validation::{
    integer_range, optional_url, required_text, string_list, ListRule, ValidationErrors,
};

static ICON_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9\-_]+$").expect("valid icon pattern"));

const TECHNOLOGIES: ListRule = ListRule {
    required: true,
    max_items: None,
    max_item_len: 100,
};

const FEATURES: ListRule = ListRule {
    required: false,
    max_items: None,
    max_item_len: 255,
};

/// Admin form for a service.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServiceInput {
    #[serde(default)]
    pub title_en: String,
    #[serde(default)]
    pub title_ar: String,
    #[serde(default)]
    pub description_en: String,
    #[serde(default)]
    pub description_ar: String,
    #[serde(default)]
    pub technologies_en: Vec<String>,
    #[serde(default)]
    pub technologies_ar: Vec<String>,
    #[serde(default)]
    pub features_en: Vec<String>,
    #[serde(default)]
    pub features_ar: Vec<String>,
    #[serde(default)]
    pub icon: String,
    pub image_url: Option<String>,
    pub is_active: Option<bool>,
    pub sort_order: Option<i32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceCommand {
    slug: String,
    title_en: String,
    title_ar: String,
    description_en: String,
    description_ar: String,
    technologies_en: Vec<String>,
    technologies_ar: Vec<String>,
    features_en: Vec<String>,
    features_ar: Vec<String>,
    icon: String,
    image_url: Option<String>,
    is_active: Option<bool>,
    sort_order: Option<i32>,
}

impl ServiceCommand {
    pub fn new(input: ServiceInput) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let title_en = required_text(&mut errors, "title_en", &input.title_en, 2, 255);
        let title_ar = required_text(&mut errors, "title_ar", &input.title_ar, 2, 255);
        let description_en =
            required_text(&mut errors, "description_en", &input.description_en, 10, 1000);
        let description_ar =
            required_text(&mut errors, "description_ar", &input.description_ar, 10, 1000);
        let technologies_en =
            string_list(&mut errors, "technologies_en", &input.technologies_en, TECHNOLOGIES);
        let technologies_ar =
            string_list(&mut errors, "technologies_ar", &input.technologies_ar, TECHNOLOGIES);
        let features_en = string_list(&mut errors, "features_en", &input.features_en, FEATURES);
        let features_ar = string_list(&mut errors, "features_ar", &input.features_ar, FEATURES);

        let icon = required_text(&mut errors, "icon", &input.icon, 1, 50);
        if !icon.is_empty() && !ICON_RE.is_match(&icon) {
            errors.add("icon", "The icon format is invalid.");
        }

        let image_url = optional_url(&mut errors, "image_url", input.image_url.as_deref(), 500);

        if let Some(order) = input.sort_order {
            integer_range(&mut errors, "sort_order", order, 0, 999);
        }

        let slug = slugify(&title_en);
        if slug.is_empty() && !errors.has("title_en") {
            errors.add("title_en", "The title_en must contain letters or digits.");
        }

        errors.finish(Self {
            slug,
            title_en,
            title_ar,
            description_en,
            description_ar,
            technologies_en,
            technologies_ar,
            features_en,
            features_ar,
            icon,
            image_url,
            is_active: input.is_active,
            sort_order: input.sort_order,
        })
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn into_create_data(self) -> ServiceData {
        let slug = self.slug.clone();
        self.into_data(slug, true, 0)
    }

    /// The slug only follows the English title when that title changed.
    pub fn into_update_data(self, current: &ServiceRecord) -> ServiceData {
        let slug = if self.title_en == current.title_en {
            current.slug.clone()
        } else {
            self.slug.clone()
        };
        self.into_data(slug, current.is_active, current.sort_order)
    }

    fn into_data(self, slug: String, is_active: bool, sort_order: i32) -> ServiceData {
        ServiceData {
            slug,
            icon: self.icon,
            title_en: self.title_en,
            title_ar: Some(self.title_ar),
            description_en: self.description_en,
            description_ar: Some(self.description_ar),
            technologies_en: self.technologies_en,
            technologies_ar: Some(self.technologies_ar),
            features_en: self.features_en,
            features_ar: Some(self.features_ar),
            image_url: self.image_url,
            is_active: self.is_active.unwrap_or(is_active),
            sort_order: self.sort_order.unwrap_or(sort_order),
        }
    }
}
