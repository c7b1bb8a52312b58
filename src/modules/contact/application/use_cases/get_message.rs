use crate::modules::contact::application::domain::MessageDetail;
use crate::modules::content::application::domain::PortfolioEntry;
use crate::modules::content::application::ports::outgoing::{ContentQuery, ContentQueryError};
use crate::shared::i18n::Locale;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetMessageError {
    #[error("Message not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait::async_trait]
pub trait IGetMessageUseCase: Send + Sync {
    async fn execute(&self, id: i32) -> Result<MessageDetail, GetMessageError>;
}

#[derive(Debug, Clone)]
pub struct GetMessageUseCase<Q>
where
    Q: ContentQuery,
{
    query: Q,
}

impl<Q> GetMessageUseCase<Q>
where
    Q: ContentQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait::async_trait]
impl<Q> IGetMessageUseCase for GetMessageUseCase<Q>
where
    Q: ContentQuery + Send + Sync,
{
    async fn execute(&self, id: i32) -> Result<MessageDetail, GetMessageError> {
        let record = self.query.get_by_id(id).await.map_err(|e| match e {
            ContentQueryError::NotFound => GetMessageError::NotFound,
            other => GetMessageError::RepositoryError(other.to_string()),
        })?;

        PortfolioEntry::from_record(&record, Locale::En)
            .into_contact_message()
            .map(MessageDetail::from)
            .ok_or(GetMessageError::NotFound)
    }
}
