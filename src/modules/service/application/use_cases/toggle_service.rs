use tracing::info;

use crate::modules::service::application::domain::ServiceRecord;
use crate::modules::service::application::ports::outgoing::{
    ServiceRepository, ServiceRepositoryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ToggleServiceError {
    #[error("Service not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait::async_trait]
pub trait IToggleServiceUseCase: Send + Sync {
    async fn execute(&self, id: i32) -> Result<ServiceRecord, ToggleServiceError>;
}

#[derive(Debug, Clone)]
pub struct ToggleServiceUseCase<R>
where
    R: ServiceRepository,
{
    repository: R,
}

impl<R> ToggleServiceUseCase<R>
where
    R: ServiceRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl<R> IToggleServiceUseCase for ToggleServiceUseCase<R>
where
    R: ServiceRepository + Send + Sync,
{
    async fn execute(&self, id: i32) -> Result<ServiceRecord, ToggleServiceError> {
        let record = self.repository.toggle_active(id).await.map_err(|e| match e {
            ServiceRepositoryError::NotFound => ToggleServiceError::NotFound,
            other => ToggleServiceError::RepositoryError(other.to_string()),
        })?;

        info!(id, is_active = record.is_active, "Service status toggled");
        Ok(record)
    }
}
