use tracing::info;

use super::service_command::ServiceCommand;
use crate::modules::service::application::domain::ServiceRecord;
use crate::modules::service::application::ports::outgoing::{
    ServiceQuery, ServiceQueryError, ServiceRepository, ServiceRepositoryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateServiceError {
    #[error("Service not found")]
    NotFound,

    #[error("Slug already exists")]
    SlugAlreadyExists,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait::async_trait]
pub trait IUpdateServiceUseCase: Send + Sync {
    async fn execute(
        &self,
        id: i32,
        command: ServiceCommand,
    ) -> Result<ServiceRecord, UpdateServiceError>;
}

#[derive(Debug, Clone)]
pub struct UpdateServiceUseCase<Q, R>
where
    Q: ServiceQuery,
    R: ServiceRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> UpdateServiceUseCase<Q, R>
where
    Q: ServiceQuery,
    R: ServiceRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait::async_trait]
impl<Q, R> IUpdateServiceUseCase for UpdateServiceUseCase<Q, R>
where
    Q: ServiceQuery + Send + Sync,
    R: ServiceRepository + Send + Sync,
{
    async fn execute(
        &self,
        id: i32,
        command: ServiceCommand,
    ) -> Result<ServiceRecord, UpdateServiceError> {
        let current = self.query.get_by_id(id).await.map_err(|e| match e {
            ServiceQueryError::NotFound => UpdateServiceError::NotFound,
            other => UpdateServiceError::RepositoryError(other.to_string()),
        })?;

        let updated = self
            .repository
            .update(id, command.into_update_data(&current))
            .await
            .map_err(|e| match e {
                ServiceRepositoryError::NotFound => UpdateServiceError::NotFound,
                ServiceRepositoryError::SlugAlreadyExists => UpdateServiceError::SlugAlreadyExists,
                other => UpdateServiceError::RepositoryError(other.to_string()),
            })?;

        info!("Service {} updated", updated.id);
        Ok(updated)
    }
}
