use tracing::info;

use super::content_command::ContentCommand;
use crate::modules::content::application::domain::entities::ContentRecord;
use crate::modules::content::application::ports::outgoing::{
    ContentRepository, ContentRepositoryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateContentError {
    #[error("Key already exists")]
    KeyAlreadyExists,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait::async_trait]
pub trait ICreateContentUseCase: Send + Sync {
    async fn execute(&self, command: ContentCommand) -> Result<ContentRecord, CreateContentError>;
}

#[derive(Debug, Clone)]
pub struct CreateContentUseCase<R>
where
    R: ContentRepository,
{
    repository: R,
}

impl<R> CreateContentUseCase<R>
where
    R: ContentRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl<R> ICreateContentUseCase for CreateContentUseCase<R>
where
    R: ContentRepository + Send + Sync,
{
    async fn execute(&self, command: ContentCommand) -> Result<ContentRecord, CreateContentError> {
        let created = self
            .repository
            .create(command.into_create_data())
            .await
            .map_err(|e| match e {
                ContentRepositoryError::KeyAlreadyExists => CreateContentError::KeyAlreadyExists,
                other => CreateContentError::RepositoryError(other.to_string()),
            })?;

        info!("Portfolio content {} created ({})", created.id, created.key);
        Ok(created)
    }
}
