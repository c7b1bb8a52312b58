use tracing::info;

use crate::modules::content::application::domain::ContentType;
use crate::modules::content::application::ports::outgoing::{
    ContentRepository, ContentRepositoryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteMessageError {
    #[error("Message not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait::async_trait]
pub trait IDeleteMessageUseCase: Send + Sync {
    async fn execute(&self, id: i32) -> Result<(), DeleteMessageError>;
}

#[derive(Debug, Clone)]
pub struct DeleteMessageUseCase<R>
where
    R: ContentRepository,
{
    repository: R,
}

impl<R> DeleteMessageUseCase<R>
where
    R: ContentRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl<R> IDeleteMessageUseCase for DeleteMessageUseCase<R>
where
    R: ContentRepository + Send + Sync,
{
    async fn execute(&self, id: i32) -> Result<(), DeleteMessageError> {
        self.repository
            .delete(id, Some(ContentType::ContactMessage))
            .await
            .map_err(|e| match e {
                ContentRepositoryError::NotFound => DeleteMessageError::NotFound,
                other => DeleteMessageError::RepositoryError(other.to_string()),
            })?;

        info!(id, "Contact message deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::content::application::ports::outgoing::mocks::MockContentRepositoryMock;

    #[tokio::test]
    async fn deletes_only_contact_messages() {
        let mut repo = MockContentRepositoryMock::new();
        repo.expect_delete()
            .withf(|id, only_type| *id == 4 && *only_type == Some(ContentType::ContactMessage))
            .returning(|_, _| Ok(()));

        assert!(DeleteMessageUseCase::new(repo).execute(4).await.is_ok());
    }

    #[tokio::test]
    async fn missing_message_is_not_found() {
        let mut repo = MockContentRepositoryMock::new();
        repo.expect_delete()
            .returning(|_, _| Err(ContentRepositoryError::NotFound));

        let result = DeleteMessageUseCase::new(repo).execute(4).await;
        assert!(matches!(result, Err(DeleteMessageError::NotFound)));
    }
}
