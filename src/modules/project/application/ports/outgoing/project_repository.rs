// src/modules/project/application/ports/outgoing/project_repository.rs

use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::Value;

use crate::modules::project::application::domain::{ProjectCategory, ProjectRecord};

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

/// Every writable column of `projects` except the thumbnail, which only the
/// upload flow changes.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectData {
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
    pub tags: Vec<String>,
    pub metadata: Value,
}

/// Pivot replacement. `None` leaves that association untouched; creates
/// pass `None` for lists the form omitted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinkUpdate {
    pub service_ids: Option<Vec<i32>>,
    pub skill_ids: Option<Vec<i32>>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectRepositoryError {
    #[error("Project not found")]
    NotFound,

    #[error("Slug already exists")]
    SlugAlreadyExists,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (Command-side)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Row and links are written in one transaction.
    async fn create(
        &self,
        data: ProjectData,
        links: LinkUpdate,
    ) -> Result<ProjectRecord, ProjectRepositoryError>;

    /// Row and links are written in one transaction.
    async fn update(
        &self,
        id: i32,
        data: ProjectData,
        links: LinkUpdate,
    ) -> Result<ProjectRecord, ProjectRepositoryError>;

    async fn toggle_active(&self, id: i32) -> Result<ProjectRecord, ProjectRepositoryError>;

    async fn toggle_featured(&self, id: i32) -> Result<ProjectRecord, ProjectRepositoryError>;

    async fn set_thumbnail(
        &self,
        id: i32,
        url: &str,
    ) -> Result<ProjectRecord, ProjectRepositoryError>;
}
