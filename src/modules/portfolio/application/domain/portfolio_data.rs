use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

use crate::modules::content::application::domain::entities::ContentRecord;
use crate::modules::content::application::domain::portfolio_entry::{
    BlogPost, PersonalProfile, PortfolioEntry, Testimonial,
};
use crate::modules::project::application::domain::{ProjectCategory, ProjectRecord};
use crate::modules::service::application::domain::{ServiceRecord, ServiceView};
use crate::modules::skill::application::domain::{SkillRecord, SkillView};
use crate::modules::statistic::application::domain::{StatisticRecord, StatisticView};
use crate::shared::i18n::{Locale, Localized};

pub const ACADEMIC_BACKGROUND_KEY: &str = "academic_background";
pub const EXPERTISE_AREAS_KEY: &str = "expertise_areas";

pub const DEFAULT_ACADEMIC_BACKGROUND: &str =
    "Studying Information Technology with a focus on Artificial Intelligence and Smart City technologies.";

pub const DEFAULT_EXPERTISE_AREAS: [&str; 8] = [
    "AI & Machine Learning",
    "Web Development (Frontend & Backend)",
    "Embedded Systems & IoT",
    "Database Design",
    "Data Analysis & NLP",
    "DevOps & CI/CD",
    "API Integration",
    "Algorithms and Problem Solving",
];

/// Owner details shown in the hero, footer and contact blocks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub summary: String,
    pub location: String,
    pub email: String,
    pub phone: String,
    pub github: String,
    pub linkedin: String,
    pub instagram: String,
    pub portfolio_website: String,
}

impl Default for PersonalInfo {
    fn default() -> Self {
        Self {
            name: "Ziad Hassan".to_string(),
            title: "Software Engineer".to_string(),
            summary: "Software Engineer specializing in building scalable and efficient software solutions.".to_string(),
            location: "Alexandria, Egypt".to_string(),
            email: "zeyad.h.abaza@gmail.com".to_string(),
            phone: "+20 100 640 3927".to_string(),
            github: "https://github.com/Ziad-Abaza".to_string(),
            linkedin: "https://www.linkedin.com/in/ziad-h-abaza-82276331b".to_string(),
            instagram: "https://instagram.com/3_p0ox".to_string(),
            portfolio_website: "https://ziad-abaza.github.io/Portfolio/index.html".to_string(),
        }
    }
}

impl PersonalInfo {
    /// Each empty profile field is replaced by its default on its own.
    pub fn from_profile(profile: Option<PersonalProfile>) -> Self {
        let defaults = Self::default();
        let Some(p) = profile else {
            return defaults;
        };

        Self {
            name: or_default(p.name, defaults.name),
            title: or_default(p.title, defaults.title),
            summary: or_default(p.summary, defaults.summary),
            location: or_default(p.location, defaults.location),
            email: or_default(p.email, defaults.email),
            phone: or_default(p.phone, defaults.phone),
            github: or_default(p.github, defaults.github),
            linkedin: or_default(p.linkedin, defaults.linkedin),
            instagram: or_default(p.instagram, defaults.instagram),
            portfolio_website: or_default(p.portfolio_website, defaults.portfolio_website),
        }
    }
}

fn or_default(value: String, default: String) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        default
    } else {
        trimmed.to_string()
    }
}

/// The project fields the portfolio pages render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectSummary {
    pub id: i32,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub category: ProjectCategory,
    pub technologies: Vec<String>,
    pub created_at: String,
    pub thumbnail_url: Option<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub is_featured: bool,
    pub primary_image_url: String,
}

impl ProjectSummary {
    pub fn localize(record: &ProjectRecord, locale: Locale) -> Self {
        Self {
            id: record.id,
            slug: record.slug.clone(),
            title: record.text("title", locale),
            description: record.text("description", locale),
            category: record.category,
            technologies: record.list("technologies", locale),
            created_at: record.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            thumbnail_url: record.thumbnail_url.clone(),
            github_url: record.github_url.clone(),
            live_url: record.live_url.clone(),
            is_featured: record.is_featured,
            primary_image_url: record.primary_image_url(),
        }
    }
}

/// Rows read for one portfolio payload, before localization.
#[derive(Debug, Clone, Default)]
pub struct PortfolioSources {
    pub services: Vec<ServiceRecord>,
    pub projects: Vec<ProjectRecord>,
    pub skills: Vec<SkillRecord>,
    pub statistics: Vec<StatisticRecord>,
    pub personal: Option<ContentRecord>,
    pub academic_background: Option<ContentRecord>,
    pub expertise_areas: Option<ContentRecord>,
    pub testimonials: Vec<ContentRecord>,
    pub recent_posts: Vec<ContentRecord>,
}

/// Payload shared by every public portfolio page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioData {
    #[serde(flatten)]
    pub personal_info: PersonalInfo,
    pub expertise_areas: Vec<String>,
    pub services: Vec<ServiceView>,
    pub projects: Vec<ProjectSummary>,
    pub technical_skills: BTreeMap<String, Vec<String>>,
    pub skills: Vec<SkillView>,
    pub statistics: BTreeMap<String, i64>,
    pub statistic_cards: Vec<StatisticView>,
    pub academic_background: String,
    pub testimonials: Vec<Testimonial>,
    pub recent_posts: Vec<BlogPost>,
}

impl PortfolioData {
    pub fn assemble(sources: PortfolioSources, locale: Locale) -> Self {
        let personal_info = PersonalInfo::from_profile(
            sources
                .personal
                .as_ref()
                .and_then(|record| PortfolioEntry::from_record(record, locale).into_personal()),
        );

        Self {
            personal_info,
            expertise_areas: expertise_areas(sources.expertise_areas.as_ref(), locale),
            services: sources
                .services
                .iter()
                .map(|s| ServiceView::localize(s, locale))
                .collect(),
            projects: sources
                .projects
                .iter()
                .map(|p| ProjectSummary::localize(p, locale))
                .collect(),
            technical_skills: group_skills(&sources.skills, locale),
            skills: sources
                .skills
                .iter()
                .map(|s| SkillView::localize(s, locale))
                .collect(),
            statistics: sources
                .statistics
                .iter()
                .map(|s| (s.key.clone(), s.value))
                .collect(),
            statistic_cards: sources
                .statistics
                .iter()
                .map(|s| StatisticView::localize(s, locale))
                .collect(),
            academic_background: academic_background(
                sources.academic_background.as_ref(),
                locale,
            ),
            testimonials: sources
                .testimonials
                .iter()
                .filter_map(|t| PortfolioEntry::from_record(t, locale).into_testimonial())
                .collect(),
            recent_posts: sources
                .recent_posts
                .iter()
                .filter_map(|p| PortfolioEntry::from_record(p, locale).into_blog_post())
                .collect(),
        }
    }
}

/// Category → skill names, keeping the incoming order inside each category.
fn group_skills(skills: &[SkillRecord], locale: Locale) -> BTreeMap<String, Vec<String>> {
    let mut grouped: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for skill in skills {
        grouped
            .entry(skill.category.clone())
            .or_default()
            .push(skill.text("name", locale));
    }
    grouped
}

fn academic_background(record: Option<&ContentRecord>, locale: Locale) -> String {
    record
        .map(|r| {
            let content = r.text("content", locale);
            if content.trim().is_empty() {
                r.text("description", locale)
            } else {
                content
            }
        })
        .filter(|text| !text.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_ACADEMIC_BACKGROUND.to_string())
}

/// Metadata holding a string array wins, then content holding a JSON string
/// array. Anything else yields the default list.
fn expertise_areas(record: Option<&ContentRecord>, locale: Locale) -> Vec<String> {
    record
        .and_then(|r| {
            string_array(&r.json("metadata", locale)).or_else(|| {
                serde_json::from_str::<Value>(&r.text("content", locale))
                    .ok()
                    .and_then(|value| string_array(&value))
            })
        })
        .unwrap_or_else(|| {
            DEFAULT_EXPERTISE_AREAS
                .iter()
                .map(|area| area.to_string())
                .collect()
        })
}

fn string_array(value: &Value) -> Option<Vec<String>> {
    let items = value.as_array()?;
    if items.is_empty() {
        return None;
    }
    items
        .iter()
        .map(|item| item.as_str().map(str::to_string))
        .collect()
}
