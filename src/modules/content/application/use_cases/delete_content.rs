use tracing::info;

use crate::modules::content::application::ports::outgoing::{
    ContentRepository, ContentRepositoryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteContentError {
    #[error("Content not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait::async_trait]
pub trait IDeleteContentUseCase: Send + Sync {
    async fn execute(&self, id: i32) -> Result<(), DeleteContentError>;
}

#[derive(Debug, Clone)]
pub struct DeleteContentUseCase<R>
where
    R: ContentRepository,
{
    repository: R,
}

impl<R> DeleteContentUseCase<R>
where
    R: ContentRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl<R> IDeleteContentUseCase for DeleteContentUseCase<R>
where
    R: ContentRepository + Send + Sync,
{
    async fn execute(&self, id: i32) -> Result<(), DeleteContentError> {
        self.repository
            .delete(id, None)
            .await
            .map_err(|e| match e {
                ContentRepositoryError::NotFound => DeleteContentError::NotFound,
                other => DeleteContentError::RepositoryError(other.to_string()),
            })?;

        info!("Portfolio content {} deleted", id);
        Ok(())
    }
}
