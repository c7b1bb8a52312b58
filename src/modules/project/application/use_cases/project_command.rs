use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::modules::project::application::domain::{ProjectCategory, ProjectRecord};
use crate::modules::project::application::ports::outgoing::{LinkUpdate, ProjectData};
use crate::shared::text::slugify;
use crate::shared::validation::{
    integer_range, is_http_url, optional_object, optional_text, optional_url,
    required_text, string_list, ListRule, ValidationErrors,
};

const TECHNOLOGIES: ListRule = ListRule {
    required: true,
    max_items: None,
    max_item_len: 100,
};

const OPTIONAL_TECHNOLOGIES: ListRule = ListRule {
    required: false,
    ..TECHNOLOGIES
};

const NOTES: ListRule = ListRule {
    required: false,
    max_items: None,
    max_item_len: 255,
};

const IMAGES: ListRule = ListRule {
    required: false,
    max_items: Some(10),
    max_item_len: 500,
};

const TAGS: ListRule = ListRule {
    required: false,
    max_items: Some(10),
    max_item_len: 50,
};

/// Admin form for a project.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectInput {
    #[serde(default)]
    pub title_en: String,
    pub title_ar: Option<String>,
    #[serde(default)]
    pub description_en: String,
    pub description_ar: Option<String>,
    pub content_en: Option<String>,
    pub content_ar: Option<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub technologies_en: Vec<String>,
    pub technologies_ar: Option<Vec<String>>,
    pub challenges_en: Option<Vec<String>>,
    pub challenges_ar: Option<Vec<String>>,
    pub solutions_en: Option<Vec<String>>,
    pub solutions_ar: Option<Vec<String>>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub demo_url: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub metadata: Option<Value>,
    /// `YYYY-MM-DD`.
    pub completed_at: Option<String>,
    pub is_featured: Option<bool>,
    pub is_active: Option<bool>,
    pub sort_order: Option<i32>,
    pub service_ids: Option<Vec<i32>>,
    pub skill_ids: Option<Vec<i32>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectCommand {
    slug: String,
    category: ProjectCategory,
    title_en: String,
    title_ar: Option<String>,
    description_en: String,
    description_ar: Option<String>,
    content_en: Option<String>,
    content_ar: Option<String>,
    technologies_en: Vec<String>,
    technologies_ar: Option<Vec<String>>,
    challenges_en: Option<Vec<String>>,
    challenges_ar: Option<Vec<String>>,
    solutions_en: Option<Vec<String>>,
    solutions_ar: Option<Vec<String>>,
    github_url: Option<String>,
    live_url: Option<String>,
    demo_url: Option<String>,
    images: Vec<String>,
    tags: Vec<String>,
    metadata: Value,
    completed_at: Option<NaiveDate>,
    is_featured: Option<bool>,
    is_active: Option<bool>,
    sort_order: Option<i32>,
    links: LinkUpdate,
}

/// Blank lists are stored as null.
fn optional_list(
    errors: &mut ValidationErrors,
    field: &str,
    items: Option<&[String]>,
    rule: ListRule,
) -> Option<Vec<String>> {
    let cleaned = string_list(errors, field, items?, rule);
    (!cleaned.is_empty()).then_some(cleaned)
}

fn completion_date(
    errors: &mut ValidationErrors,
    value: Option<&str>,
    today: NaiveDate,
) -> Option<NaiveDate> {
    let raw = value.map(str::trim).filter(|v| !v.is_empty())?;

    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) if date > today => {
            errors.add(
                "completed_at",
                "The completed_at must be a date before or equal to today.",
            );
            None
        }
        Ok(date) => Some(date),
        Err(_) => {
            errors.add("completed_at", "The completed_at is not a valid date.");
            None
        }
    }
}

fn unique_ids(ids: Option<Vec<i32>>) -> Option<Vec<i32>> {
    ids.map(|mut ids| {
        ids.sort_unstable();
        ids.dedup();
        ids
    })
}

impl ProjectCommand {
    /// `today` bounds `completed_at`.
    pub fn new(input: ProjectInput, today: NaiveDate) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let title_en = required_text(&mut errors, "title_en", &input.title_en, 2, 255);
        let title_ar = optional_text(&mut errors, "title_ar", input.title_ar.as_deref(), 2, 255);
        let description_en =
            required_text(&mut errors, "description_en", &input.description_en, 10, 500);
        let description_ar = optional_text(
            &mut errors,
            "description_ar",
            input.description_ar.as_deref(),
            10,
            500,
        );
        let content_en =
            optional_text(&mut errors, "content_en", input.content_en.as_deref(), 1, 5000);
        let content_ar =
            optional_text(&mut errors, "content_ar", input.content_ar.as_deref(), 1, 5000);

        let category = match input.category.trim() {
            "" => {
                errors.add("category", "The category field is required.");
                None
            }
            raw => match raw.parse::<ProjectCategory>() {
                Ok(category) => Some(category),
                Err(_) => {
                    errors.add("category", "The selected category is invalid.");
                    None
                }
            },
        };

        let technologies_en =
            string_list(&mut errors, "technologies_en", &input.technologies_en, TECHNOLOGIES);
        let technologies_ar = optional_list(
            &mut errors,
            "technologies_ar",
            input.technologies_ar.as_deref(),
            OPTIONAL_TECHNOLOGIES,
        );
        let challenges_en =
            optional_list(&mut errors, "challenges_en", input.challenges_en.as_deref(), NOTES);
        let challenges_ar =
            optional_list(&mut errors, "challenges_ar", input.challenges_ar.as_deref(), NOTES);
        let solutions_en =
            optional_list(&mut errors, "solutions_en", input.solutions_en.as_deref(), NOTES);
        let solutions_ar =
            optional_list(&mut errors, "solutions_ar", input.solutions_ar.as_deref(), NOTES);

        let github_url = optional_url(&mut errors, "github_url", input.github_url.as_deref(), 500);
        let live_url = optional_url(&mut errors, "live_url", input.live_url.as_deref(), 500);
        let demo_url = optional_url(&mut errors, "demo_url", input.demo_url.as_deref(), 500);

        let images = string_list(&mut errors, "images", &input.images, IMAGES);
        for (index, image) in images.iter().enumerate() {
            if !(image.starts_with('/') || is_http_url(image)) {
                errors.add(
                    format!("images.{index}"),
                    format!("The images.{index} must be a valid URL or path."),
                );
            }
        }

        let tags = string_list(&mut errors, "tags", &input.tags, TAGS);
        let metadata = optional_object(&mut errors, "metadata", input.metadata)
            .unwrap_or_else(|| Value::Object(Map::new()));
        let completed_at = completion_date(&mut errors, input.completed_at.as_deref(), today);

        if let Some(order) = input.sort_order {
            integer_range(&mut errors, "sort_order", order, 0, 999);
        }

        let slug = slugify(&title_en);
        if slug.is_empty() && !errors.has("title_en") {
            errors.add("title_en", "The title_en must contain letters or digits.");
        }

        let category = match category {
            Some(category) if errors.is_empty() => category,
            _ => return Err(errors),
        };

        Ok(Self {
            slug,
            category,
            title_en,
            title_ar,
            description_en,
            description_ar,
            content_en,
            content_ar,
            technologies_en,
            technologies_ar,
            challenges_en,
            challenges_ar,
            solutions_en,
            solutions_ar,
            github_url,
            live_url,
            demo_url,
            images,
            tags,
            metadata,
            completed_at,
            is_featured: input.is_featured,
            is_active: input.is_active,
            sort_order: input.sort_order,
            links: LinkUpdate {
                service_ids: unique_ids(input.service_ids),
                skill_ids: unique_ids(input.skill_ids),
            },
        })
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn links(&self) -> &LinkUpdate {
        &self.links
    }

    pub fn into_create_data(self) -> (ProjectData, LinkUpdate) {
        let slug = self.slug.clone();
        self.into_parts(slug, true, false, 0)
    }

    /// The slug only follows the English title when that title changed;
    /// omitted flags and order keep the values of `current`. An omitted id
    /// list is an empty set, so the update clears that association.
    pub fn into_update_data(mut self, current: &ProjectRecord) -> (ProjectData, LinkUpdate) {
        let slug = if self.title_en == current.title_en {
            current.slug.clone()
        } else {
            self.slug.clone()
        };
        self.links = LinkUpdate {
            service_ids: Some(self.links.service_ids.take().unwrap_or_default()),
            skill_ids: Some(self.links.skill_ids.take().unwrap_or_default()),
        };
        self.into_parts(slug, current.is_active, current.is_featured, current.sort_order)
    }

    fn into_parts(
        self,
        slug: String,
        is_active: bool,
        is_featured: bool,
        sort_order: i32,
    ) -> (ProjectData, LinkUpdate) {
        let data = ProjectData {
            slug,
            category: self.category,
            is_featured: self.is_featured.unwrap_or(is_featured),
            is_active: self.is_active.unwrap_or(is_active),
            sort_order: self.sort_order.unwrap_or(sort_order),
            completed_at: self.completed_at,
            title_en: self.title_en,
            title_ar: self.title_ar,
            description_en: self.description_en,
            description_ar: self.description_ar,
            content_en: self.content_en,
            content_ar: self.content_ar,
            technologies_en: self.technologies_en,
            technologies_ar: self.technologies_ar,
            challenges_en: self.challenges_en,
            challenges_ar: self.challenges_ar,
            solutions_en: self.solutions_en,
            solutions_ar: self.solutions_ar,
            github_url: self.github_url,
            live_url: self.live_url,
            demo_url: self.demo_url,
            images: self.images,
            tags: self.tags,
            metadata: self.metadata,
        };

        (data, self.links)
    }
}
