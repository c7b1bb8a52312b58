// src/modules/service/application/ports/outgoing/service_repository.rs

use async_trait::async_trait;

use crate::modules::service::application::domain::ServiceRecord;

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

/// Every writable column of a `services` row.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceData {
    pub slug: String,
    pub icon: String,
    pub title_en: String,
    pub title_ar: Option<String>,
    pub description_en: String,
    pub description_ar: Option<String>,
    pub technologies_en: Vec<String>,
    pub technologies_ar: Option<Vec<String>>,
    pub features_en: Vec<String>,
    pub features_ar: Option<Vec<String>>,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub sort_order: i32,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ServiceRepositoryError {
    #[error("Service not found")]
    NotFound,

    #[error("Slug already exists")]
    SlugAlreadyExists,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (Command-side)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ServiceRepository: Send + Sync {
    async fn create(&self, data: ServiceData) -> Result<ServiceRecord, ServiceRepositoryError>;

    async fn update(
        &self,
        id: i32,
        data: ServiceData,
    ) -> Result<ServiceRecord, ServiceRepositoryError>;

    /// Flips `is_active` in a single statement.
    async fn toggle_active(&self, id: i32) -> Result<ServiceRecord, ServiceRepositoryError>;
}
