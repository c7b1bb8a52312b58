use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

use crate::shared::i18n::{translatable, translate, Locale, Localized};

pub const DEFAULT_PROJECT_IMAGE: &str = "/images/projects/default.jpg";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ProjectCategory {
    Web,
    Ai,
    Iot,
    Mobile,
    Desktop,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown project category: {0}")]
pub struct UnknownCategory(pub String);

impl ProjectCategory {
    pub const ALL: [ProjectCategory; 5] = [
        ProjectCategory::Web,
        ProjectCategory::Ai,
        ProjectCategory::Iot,
        ProjectCategory::Mobile,
        ProjectCategory::Desktop,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ProjectCategory::Web => "web",
            ProjectCategory::Ai => "ai",
            ProjectCategory::Iot => "iot",
            ProjectCategory::Mobile => "mobile",
            ProjectCategory::Desktop => "desktop",
        }
    }
}

impl fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// One row of `projects`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectRecord {
    pub id: i32,
    pub slug: String,
    pub category: ProjectCategory,
    pub is_featured: bool,
    pub is_active: bool,
    pub sort_order: i32,
    pub completed_at: Option<NaiveDate>,
    pub title_en: String,
    pub title_ar: Option<String>,
    pub description_en: String,
    pub description_ar: Option<String>,
    pub content_en: Option<String>,
    pub content_ar: Option<String>,
    pub technologies_en: Vec<String>,
    pub technologies_ar: Option<Vec<String>>,
    pub challenges_en: Option<Vec<String>>,
    pub challenges_ar: Option<Vec<String>>,
    pub solutions_en: Option<Vec<String>>,
    pub solutions_ar: Option<Vec<String>>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub demo_url: Option<String>,
    pub images: Vec<String>,
    pub thumbnail_url: Option<String>,
    pub tags: Vec<String>,
    pub metadata: Value,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

translatable!(ProjectRecord {
    "title" => (title_en, title_ar),
    "description" => (description_en, description_ar),
    "content" => (content_en, content_ar),
    "technologies" => (technologies_en, technologies_ar),
    "challenges" => (challenges_en, challenges_ar),
    "solutions" => (solutions_en, solutions_ar),
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UrlType {
    Live,
    Demo,
    Github,
    None,
}

impl ProjectRecord {
    /// Thumbnail, else the first gallery image, else the placeholder.
    pub fn primary_image_url(&self) -> String {
        self.thumbnail_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .or_else(|| self.images.first().map(String::as_str))
            .unwrap_or(DEFAULT_PROJECT_IMAGE)
            .to_string()
    }

    /// `Mon YYYY`, or the localized "Ongoing" for unfinished work.
    pub fn completion_date(&self, locale: Locale) -> String {
        match self.completed_at {
            Some(date) => date.format("%b %Y").to_string(),
            None => translate(locale, "ongoing"),
        }
    }

    pub fn primary_link(&self) -> (String, UrlType) {
        let candidates = [
            (&self.live_url, UrlType::Live),
            (&self.demo_url, UrlType::Demo),
            (&self.github_url, UrlType::Github),
        ];

        candidates
            .into_iter()
            .find_map(|(url, kind)| {
                url.as_deref()
                    .filter(|u| !u.is_empty())
                    .map(|u| (u.to_string(), kind))
            })
            .unwrap_or_else(|| ("#".to_string(), UrlType::None))
    }
}

/// A project resolved for one locale, with its presentation fields.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ProjectCard {
    pub id: i32,
    pub slug: String,
    pub category: ProjectCategory,
    pub is_featured: bool,
    pub sort_order: i32,
    pub completed_at: Option<NaiveDate>,
    pub title: String,
    pub description: String,
    pub content: String,
    pub technologies: Vec<String>,
    pub challenges: Vec<String>,
    pub solutions: Vec<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub demo_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub images: Vec<String>,
    pub tags: Vec<String>,
    #[schema(value_type = Object)]
    pub metadata: Value,
    pub primary_image_url: String,
    pub completion_date: String,
    pub url: String,
    pub url_type: UrlType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProjectCard {
    pub fn localize(record: &ProjectRecord, locale: Locale) -> Self {
        let (url, url_type) = record.primary_link();

        Self {
            id: record.id,
            slug: record.slug.clone(),
            category: record.category,
            is_featured: record.is_featured,
            sort_order: record.sort_order,
            completed_at: record.completed_at,
            title: record.text("title", locale),
            description: record.text("description", locale),
            content: record.text("content", locale),
            technologies: record.list("technologies", locale),
            challenges: record.list("challenges", locale),
            solutions: record.list("solutions", locale),
            github_url: record.github_url.clone(),
            live_url: record.live_url.clone(),
            demo_url: record.demo_url.clone(),
            thumbnail_url: record.thumbnail_url.clone(),
            images: record.images.clone(),
            tags: record.tags.clone(),
            metadata: record.metadata.clone(),
            primary_image_url: record.primary_image_url(),
            completion_date: record.completion_date(locale),
            url,
            url_type,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use serde_json::json;

    pub fn project(id: i32) -> ProjectRecord {
        ProjectRecord {
            id,
            slug: format!("project-{id}"),
            category: ProjectCategory::Web,
            is_featured: false,
            is_active: true,
            sort_order: 0,
            completed_at: None,
            title_en: format!("Project {id}"),
            title_ar: None,
            description_en: "A project worth showing".to_string(),
            description_ar: None,
            content_en: None,
            content_ar: None,
            technologies_en: vec!["Rust".to_string()],
            technologies_ar: None,
            challenges_en: None,
            challenges_ar: None,
            solutions_en: None,
            solutions_ar: None,
            github_url: None,
            live_url: None,
            demo_url: None,
            images: vec![],
            thumbnail_url: None,
            tags: vec![],
            metadata: json!({}),
            is_deleted: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn category_parses_closed_set() {
        assert_eq!("iot".parse::<ProjectCategory>(), Ok(ProjectCategory::Iot));
        assert_eq!(
            "games".parse::<ProjectCategory>(),
            Err(UnknownCategory("games".to_string()))
        );
        assert_eq!(ProjectCategory::Ai.to_string(), "ai");
    }

    #[test]
    fn primary_image_prefers_thumbnail_then_gallery() {
        let mut record = project(1);
        assert_eq!(record.primary_image_url(), DEFAULT_PROJECT_IMAGE);

        record.images = vec!["/img/a.png".to_string(), "/img/b.png".to_string()];
        assert_eq!(record.primary_image_url(), "/img/a.png");

        record.thumbnail_url = Some("/storage/projects/t.png".to_string());
        assert_eq!(record.primary_image_url(), "/storage/projects/t.png");
    }

    #[test]
    fn completion_date_formats_month_or_ongoing() {
        let mut record = project(1);
        assert_eq!(record.completion_date(Locale::En), "Ongoing");
        assert_eq!(record.completion_date(Locale::Ar), "قيد التنفيذ");

        record.completed_at = NaiveDate::from_ymd_opt(2024, 3, 15);
        assert_eq!(record.completion_date(Locale::En), "Mar 2024");
    }

    #[test]
    fn primary_link_order_is_live_demo_github() {
        let mut record = project(1);
        assert_eq!(record.primary_link(), ("#".to_string(), UrlType::None));

        record.github_url = Some("https://github.com/x/y".to_string());
        assert_eq!(record.primary_link().1, UrlType::Github);

        record.demo_url = Some("https://demo.example.com".to_string());
        assert_eq!(record.primary_link().1, UrlType::Demo);

        record.live_url = Some("https://example.com".to_string());
        assert_eq!(
            record.primary_link(),
            ("https://example.com".to_string(), UrlType::Live)
        );
    }

    #[test]
    fn card_resolves_arabic_with_fallback() {
        let mut record = project(2);
        record.title_ar = Some("مشروع".to_string());
        record.challenges_en = Some(vec!["Latency".to_string()]);
        record.challenges_ar = Some(vec![]);

        let card = ProjectCard::localize(&record, Locale::Ar);

        assert_eq!(card.title, "مشروع");
        assert_eq!(card.description, "A project worth showing");
        assert_eq!(card.content, "");
        assert_eq!(card.challenges, vec!["Latency"]);
        assert!(card.solutions.is_empty());
    }
}
