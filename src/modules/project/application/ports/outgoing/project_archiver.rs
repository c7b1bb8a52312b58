// src/modules/project/application/ports/outgoing/project_archiver.rs

use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectArchiverError {
    #[error("Project not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ProjectArchiver: Send + Sync {
    async fn soft_delete(&self, id: i32) -> Result<(), ProjectArchiverError>;

    async fn restore(&self, id: i32) -> Result<(), ProjectArchiverError>;

    /// Removes the row; pivot links go with it through the cascade.
    async fn hard_delete(&self, id: i32) -> Result<(), ProjectArchiverError>;
}
