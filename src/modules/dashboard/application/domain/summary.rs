use serde::Serialize;

use crate::modules::content::application::domain::ContactMessage;
use crate::modules::project::application::domain::{ProjectCategory, ProjectRecord};
use crate::shared::i18n::{Locale, Localized};
use crate::shared::text::truncate;

pub const RECENT_LIMIT: u64 = 5;
pub const MESSAGE_PREVIEW_LENGTH: usize = 50;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DashboardStats {
    pub services: u64,
    pub projects: u64,
    pub skills: u64,
    pub messages: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecentProject {
    pub id: i32,
    pub title: String,
    pub category: ProjectCategory,
    pub updated_at: String,
}

impl From<&ProjectRecord> for RecentProject {
    fn from(record: &ProjectRecord) -> Self {
        Self {
            id: record.id,
            title: record.text("title", Locale::En),
            category: record.category,
            updated_at: record.updated_at.format("%b %d, %Y").to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecentMessage {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub created_at: String,
    pub preview: String,
}

impl From<ContactMessage> for RecentMessage {
    fn from(message: ContactMessage) -> Self {
        Self {
            id: message.id,
            name: message.display_name().to_string(),
            email: message.display_email().to_string(),
            created_at: message.received_at_display(),
            preview: truncate(&message.content, MESSAGE_PREVIEW_LENGTH),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub stats: DashboardStats,
    pub recent_projects: Vec<RecentProject>,
    pub recent_messages: Vec<RecentMessage>,
}
