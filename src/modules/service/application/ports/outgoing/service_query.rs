// src/modules/service/application/ports/outgoing/service_query.rs

use async_trait::async_trait;

use crate::modules::service::application::domain::ServiceRecord;
use crate::shared::pagination::{PageRequest, PageResult, Trashed};

//
// ──────────────────────────────────────────────────────────
// Query DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default)]
pub struct ServiceListFilter {
    pub search: Option<String>,
    pub trashed: Trashed,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ServiceQueryError {
    #[error("Service not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (Read-side)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ServiceQuery: Send + Sync {
    /// Active, not deleted, `sort_order ASC, id ASC`.
    async fn list_active(&self) -> Result<Vec<ServiceRecord>, ServiceQueryError>;

    /// Admin listing, inactive rows included.
    async fn list(
        &self,
        filter: ServiceListFilter,
        page: PageRequest,
    ) -> Result<PageResult<ServiceRecord>, ServiceQueryError>;

    /// Admin read of a row that is not soft-deleted.
    async fn get_by_id(&self, id: i32) -> Result<ServiceRecord, ServiceQueryError>;

    async fn get_active_by_slug(&self, slug: &str) -> Result<ServiceRecord, ServiceQueryError>;

    /// Other active services in display order.
    async fn related_active(
        &self,
        exclude_id: i32,
        limit: u64,
    ) -> Result<Vec<ServiceRecord>, ServiceQueryError>;

    /// The subset of `ids` that exist, deleted rows included.
    async fn existing_ids(&self, ids: &[i32]) -> Result<Vec<i32>, ServiceQueryError>;

    async fn count_active(&self) -> Result<u64, ServiceQueryError>;
}
