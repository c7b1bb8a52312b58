use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use super::entities::{ContentRecord, ContentType};
use crate::shared::i18n::{Locale, Localized};

pub const DEFAULT_RATING: u8 = 5;
pub const ANONYMOUS: &str = "Anonymous";
pub const NOT_AVAILABLE: &str = "N/A";

/// A `portfolio_content` row read through its type, with the fields that
/// type actually carries. Text is already resolved for the request locale.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PortfolioEntry {
    Personal(PersonalProfile),
    Testimonial(Testimonial),
    BlogPost(BlogPost),
    ContactMessage(ContactMessage),
    Section(Section),
}

impl PortfolioEntry {
    pub fn from_record(record: &ContentRecord, locale: Locale) -> Self {
        match record.content_type {
            ContentType::Personal => {
                PortfolioEntry::Personal(PersonalProfile::from_record(record, locale))
            }
            ContentType::Testimonial => {
                PortfolioEntry::Testimonial(Testimonial::from_record(record, locale))
            }
            ContentType::BlogPost => PortfolioEntry::BlogPost(BlogPost::from_record(record, locale)),
            ContentType::ContactMessage => {
                PortfolioEntry::ContactMessage(ContactMessage::from_record(record))
            }
            ContentType::About | ContentType::Service | ContentType::Skill => {
                PortfolioEntry::Section(Section::from_record(record, locale))
            }
        }
    }

    pub fn into_personal(self) -> Option<PersonalProfile> {
        match self {
            PortfolioEntry::Personal(profile) => Some(profile),
            _ => None,
        }
    }

    pub fn into_testimonial(self) -> Option<Testimonial> {
        match self {
            PortfolioEntry::Testimonial(testimonial) => Some(testimonial),
            _ => None,
        }
    }

    pub fn into_blog_post(self) -> Option<BlogPost> {
        match self {
            PortfolioEntry::BlogPost(post) => Some(post),
            _ => None,
        }
    }

    pub fn into_contact_message(self) -> Option<ContactMessage> {
        match self {
            PortfolioEntry::ContactMessage(message) => Some(message),
            _ => None,
        }
    }
}

/// Admin view of a row: the stored columns plus their typed reading.
#[derive(Debug, Clone, Serialize)]
pub struct ContentDetail {
    #[serde(flatten)]
    pub record: ContentRecord,
    pub entry: PortfolioEntry,
}

impl From<ContentRecord> for ContentDetail {
    fn from(record: ContentRecord) -> Self {
        let entry = PortfolioEntry::from_record(&record, Locale::En);
        Self { record, entry }
    }
}

fn content_or_description(record: &ContentRecord, locale: Locale) -> String {
    let content = record.text("content", locale);
    if content.trim().is_empty() {
        record.text("description", locale)
    } else {
        content
    }
}

/// Owner details. Empty strings mean "not provided"; callers decide the
/// fallback.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PersonalProfile {
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

impl PersonalProfile {
    fn from_record(record: &ContentRecord, locale: Locale) -> Self {
        Self {
            name: record.text("title", locale),
            title: record.text("subtitle", locale),
            summary: content_or_description(record, locale),
            location: record.metadata_text("location", locale),
            email: record.metadata_text("email", locale),
            phone: record.metadata_text("phone", locale),
            github: record.metadata_text("github", locale),
            linkedin: record.metadata_text("linkedin", locale),
            instagram: record.metadata_text("instagram", locale),
            portfolio_website: record.metadata_text("portfolio_website", locale),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Testimonial {
    pub id: i32,
    pub name: String,
    pub position: String,
    pub content: String,
    pub rating: u8,
}

impl Testimonial {
    fn from_record(record: &ContentRecord, locale: Locale) -> Self {
        Self {
            id: record.id,
            name: record.text("title", locale),
            position: record.text("subtitle", locale),
            content: content_or_description(record, locale),
            rating: rating(record.metadata_value("rating", locale)),
        }
    }
}

/// Ratings are 1..=5; missing or unreadable values count as 5.
fn rating(value: Option<&Value>) -> u8 {
    let raw = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match raw {
        Some(r) if r.is_finite() => r.round().clamp(1.0, 5.0) as u8,
        _ => DEFAULT_RATING,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlogPost {
    pub id: i32,
    pub title: String,
    pub date: String,
    pub excerpt: String,
    pub category: String,
}

impl BlogPost {
    fn from_record(record: &ContentRecord, locale: Locale) -> Self {
        Self {
            id: record.id,
            title: record.text("title", locale),
            date: record.created_at.format("%Y-%m-%d").to_string(),
            excerpt: record.text("description", locale),
            category: record.category.clone().unwrap_or_default(),
        }
    }
}

/// A stored contact form submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactMessage {
    pub id: i32,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub content: String,
    pub is_active: bool,
    pub received_at: DateTime<Utc>,
}

fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

impl ContactMessage {
    fn from_record(record: &ContentRecord) -> Self {
        let locale = Locale::En;
        Self {
            id: record.id,
            name: non_empty(record.text("title", locale)),
            email: non_empty(record.metadata_text("email", locale)),
            phone: non_empty(record.metadata_text("phone", locale)),
            subject: non_empty(record.text("subtitle", locale)),
            content: content_or_description(record, locale),
            is_active: record.is_active,
            received_at: record.created_at,
        }
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(ANONYMOUS)
    }

    pub fn display_email(&self) -> &str {
        self.email.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    pub fn received_at_display(&self) -> String {
        self.received_at.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

/// About/service/skill blurbs managed from the admin content screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub id: i32,
    pub key: String,
    pub kind: ContentType,
    pub category: Option<String>,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub content: String,
    pub metadata: Value,
}

impl Section {
    fn from_record(record: &ContentRecord, locale: Locale) -> Self {
        Self {
            id: record.id,
            key: record.key.clone(),
            kind: record.content_type,
            category: record.category.clone(),
            title: record.text("title", locale),
            subtitle: record.text("subtitle", locale),
            description: record.text("description", locale),
            content: record.text("content", locale),
            metadata: record.json("metadata", locale),
        }
    }
}
