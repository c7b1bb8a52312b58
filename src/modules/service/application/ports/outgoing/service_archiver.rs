// src/modules/service/application/ports/outgoing/service_archiver.rs

use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ServiceArchiverError {
    /// Missing, or not in the state the operation expects.
    #[error("Service not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ServiceArchiver: Send + Sync {
    async fn soft_delete(&self, id: i32) -> Result<(), ServiceArchiverError>;

    async fn restore(&self, id: i32) -> Result<(), ServiceArchiverError>;

    /// Removes the row; pivot links go with it through the foreign key.
    async fn hard_delete(&self, id: i32) -> Result<(), ServiceArchiverError>;
}
