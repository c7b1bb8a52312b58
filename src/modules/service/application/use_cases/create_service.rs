use tracing::info;

use super::service_command::ServiceCommand;
use crate::modules::service::application::domain::ServiceRecord;
use crate::modules::service::application::ports::outgoing::{
    ServiceRepository, ServiceRepositoryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateServiceError {
    #[error("Slug already exists")]
    SlugAlreadyExists,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait::async_trait]
pub trait ICreateServiceUseCase: Send + Sync {
    async fn execute(&self, command: ServiceCommand) -> Result<ServiceRecord, CreateServiceError>;
}

#[derive(Debug, Clone)]
pub struct CreateServiceUseCase<R>
where
    R: ServiceRepository,
{
    repository: R,
}

impl<R> CreateServiceUseCase<R>
where
    R: ServiceRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl<R> ICreateServiceUseCase for CreateServiceUseCase<R>
where
    R: ServiceRepository + Send + Sync,
{
    async fn execute(&self, command: ServiceCommand) -> Result<ServiceRecord, CreateServiceError> {
        let created = self
            .repository
            .create(command.into_create_data())
            .await
            .map_err(|e| match e {
                ServiceRepositoryError::SlugAlreadyExists => CreateServiceError::SlugAlreadyExists,
                other => CreateServiceError::RepositoryError(other.to_string()),
            })?;

        info!("Service {} created ({})", created.id, created.slug);
        Ok(created)
    }
}
