// src/modules/project/application/ports/outgoing/project_query.rs

use async_trait::async_trait;

use crate::modules::project::application::domain::{ProjectCategory, ProjectRecord};
use crate::shared::pagination::{PageRequest, PageResult, Trashed};

//
// ──────────────────────────────────────────────────────────
// Query DTOs
// ──────────────────────────────────────────────────────────
//

/// Criteria for project listings. Every set criterion narrows the result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectListFilter {
    pub search: Option<String>,
    pub category: Option<ProjectCategory>,
    pub featured: Option<bool>,
    pub trashed: Trashed,
    /// Public listings see only active rows.
    pub active_only: bool,
}

/// Ids currently linked to a project through the pivot tables.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct ProjectLinks {
    pub service_ids: Vec<i32>,
    pub skill_ids: Vec<i32>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectQueryError {
    #[error("Project not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (Read-side)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ProjectQuery: Send + Sync {
    /// `sort_order ASC, completed_at DESC NULLS LAST, id DESC`.
    async fn list(
        &self,
        filter: ProjectListFilter,
        page: PageRequest,
    ) -> Result<PageResult<ProjectRecord>, ProjectQueryError>;

    /// Active projects newest first: `completed_at DESC NULLS LAST, id DESC`.
    async fn list_latest_active(&self) -> Result<Vec<ProjectRecord>, ProjectQueryError>;

    /// Active projects linked to a service, newest first.
    async fn list_active_for_service(
        &self,
        service_id: i32,
        limit: u64,
    ) -> Result<Vec<ProjectRecord>, ProjectQueryError>;

    async fn recently_updated_active(
        &self,
        limit: u64,
    ) -> Result<Vec<ProjectRecord>, ProjectQueryError>;

    /// Admin read of a row that is not soft-deleted.
    async fn get_by_id(&self, id: i32) -> Result<ProjectRecord, ProjectQueryError>;

    async fn links(&self, id: i32) -> Result<ProjectLinks, ProjectQueryError>;

    /// Categories of non-deleted projects, without empty values.
    async fn distinct_categories(&self) -> Result<Vec<String>, ProjectQueryError>;

    async fn count_active(&self) -> Result<u64, ProjectQueryError>;
}
