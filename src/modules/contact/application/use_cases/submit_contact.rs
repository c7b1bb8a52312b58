use tracing::info;

use crate::modules::contact::application::domain::ContactForm;
use crate::modules::content::application::ports::outgoing::ContentRepository;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SubmitContactError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait::async_trait]
pub trait ISubmitContactUseCase: Send + Sync {
    async fn execute(&self, form: ContactForm) -> Result<(), SubmitContactError>;
}

#[derive(Debug, Clone)]
pub struct SubmitContactUseCase<R>
where
    R: ContentRepository,
{
    repository: R,
}

impl<R> SubmitContactUseCase<R>
where
    R: ContentRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl<R> ISubmitContactUseCase for SubmitContactUseCase<R>
where
    R: ContentRepository + Send + Sync,
{
    async fn execute(&self, form: ContactForm) -> Result<(), SubmitContactError> {
        let stored = self
            .repository
            .create(form.into_content_data())
            .await
            .map_err(|e| SubmitContactError::RepositoryError(e.to_string()))?;

        info!(id = stored.id, "Contact message stored");
        Ok(())
    }
}
