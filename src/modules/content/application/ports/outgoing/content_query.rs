// src/modules/content/application/ports/outgoing/content_query.rs

use async_trait::async_trait;

use crate::modules::content::application::domain::entities::{ContentRecord, ContentType};
use crate::shared::pagination::{PageRequest, PageResult};

//
// ──────────────────────────────────────────────────────────
// Query DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ContentSort {
    /// `sort_order ASC, id ASC`
    #[default]
    Display,
    /// `created_at DESC, id DESC`
    Newest,
}

#[derive(Debug, Clone, Default)]
pub struct ContentListFilter {
    pub search: Option<String>,
    pub content_type: Option<ContentType>,
    pub sort: ContentSort,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContentQueryError {
    #[error("Content not found")]
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
pub trait ContentQuery: Send + Sync {
    /// Admin read, active or not.
    async fn get_by_id(&self, id: i32) -> Result<ContentRecord, ContentQueryError>;

    async fn find_active_by_key(&self, key: &str)
        -> Result<Option<ContentRecord>, ContentQueryError>;

    /// Active rows of one type in display order.
    async fn list_active_by_type(
        &self,
        content_type: ContentType,
        limit: Option<u64>,
    ) -> Result<Vec<ContentRecord>, ContentQueryError>;

    /// Active rows of one type, newest first.
    async fn latest_active_by_type(
        &self,
        content_type: ContentType,
        limit: u64,
    ) -> Result<Vec<ContentRecord>, ContentQueryError>;

    /// Every row of the type, active or not.
    async fn count_by_type(&self, content_type: ContentType) -> Result<u64, ContentQueryError>;

    async fn list(
        &self,
        filter: ContentListFilter,
        page: PageRequest,
    ) -> Result<PageResult<ContentRecord>, ContentQueryError>;
}
