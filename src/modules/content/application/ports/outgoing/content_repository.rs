// src/modules/content/application/ports/outgoing/content_repository.rs

use async_trait::async_trait;
use serde_json::Value;

use crate::modules::content::application::domain::entities::{ContentRecord, ContentType};

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

/// Full replacement of a `portfolio_content` row. Updates overwrite every
/// column, so callers start from the current record when editing.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentData {
    pub key: String,
    pub content_type: ContentType,
    pub category: Option<String>,
    pub title_en: Option<String>,
    pub title_ar: Option<String>,
    pub subtitle_en: Option<String>,
    pub subtitle_ar: Option<String>,
    pub description_en: Option<String>,
    pub description_ar: Option<String>,
    pub content_en: Option<String>,
    pub content_ar: Option<String>,
    pub metadata_en: Option<Value>,
    pub metadata_ar: Option<Value>,
    pub is_active: bool,
    pub sort_order: i32,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContentRepositoryError {
    #[error("Content not found")]
    NotFound,

    /// Unique `key` violated.
    #[error("Key already exists")]
    KeyAlreadyExists,

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
pub trait ContentRepository: Send + Sync {
    async fn create(&self, data: ContentData) -> Result<ContentRecord, ContentRepositoryError>;

    async fn update(
        &self,
        id: i32,
        data: ContentData,
    ) -> Result<ContentRecord, ContentRepositoryError>;

    /// Hard delete. With `only_type` set, a row of another type counts as
    /// missing.
    async fn delete(
        &self,
        id: i32,
        only_type: Option<ContentType>,
    ) -> Result<(), ContentRepositoryError>;
}
