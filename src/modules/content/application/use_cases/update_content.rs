use tracing::info;

use super::content_command::ContentCommand;
use crate::modules::content::application::domain::entities::ContentRecord;
use crate::modules::content::application::ports::outgoing::{
    ContentQuery, ContentQueryError, ContentRepository, ContentRepositoryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateContentError {
    #[error("Content not found")]
    NotFound,

    #[error("Key already exists")]
    KeyAlreadyExists,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait::async_trait]
pub trait IUpdateContentUseCase: Send + Sync {
    async fn execute(
        &self,
        id: i32,
        command: ContentCommand,
    ) -> Result<ContentRecord, UpdateContentError>;
}

#[derive(Debug, Clone)]
pub struct UpdateContentUseCase<Q, R>
where
    Q: ContentQuery,
    R: ContentRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> UpdateContentUseCase<Q, R>
where
    Q: ContentQuery,
    R: ContentRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait::async_trait]
impl<Q, R> IUpdateContentUseCase for UpdateContentUseCase<Q, R>
where
    Q: ContentQuery + Send + Sync,
    R: ContentRepository + Send + Sync,
{
    async fn execute(
        &self,
        id: i32,
        command: ContentCommand,
    ) -> Result<ContentRecord, UpdateContentError> {
        let current = self.query.get_by_id(id).await.map_err(|e| match e {
            ContentQueryError::NotFound => UpdateContentError::NotFound,
            other => UpdateContentError::RepositoryError(other.to_string()),
        })?;

        let updated = self
            .repository
            .update(id, command.into_update_data(&current))
            .await
            .map_err(|e| match e {
                ContentRepositoryError::NotFound => UpdateContentError::NotFound,
                ContentRepositoryError::KeyAlreadyExists => UpdateContentError::KeyAlreadyExists,
                other => UpdateContentError::RepositoryError(other.to_string()),
            })?;

        info!("Portfolio content {} updated", updated.id);
        Ok(updated)
    }
}
