use crate::modules::content::application::domain::entities::ContentRecord;
use crate::modules::content::application::ports::outgoing::{ContentQuery, ContentQueryError};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetContentError {
    #[error("Content not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ContentQueryError> for GetContentError {
    fn from(e: ContentQueryError) -> Self {
        match e {
            ContentQueryError::NotFound => GetContentError::NotFound,
            other => GetContentError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait::async_trait]
pub trait IGetContentUseCase: Send + Sync {
    async fn execute(&self, id: i32) -> Result<ContentRecord, GetContentError>;
}

#[derive(Debug, Clone)]
pub struct GetContentUseCase<Q>
where
    Q: ContentQuery,
{
    query: Q,
}

impl<Q> GetContentUseCase<Q>
where
    Q: ContentQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait::async_trait]
impl<Q> IGetContentUseCase for GetContentUseCase<Q>
where
    Q: ContentQuery + Send + Sync,
{
    async fn execute(&self, id: i32) -> Result<ContentRecord, GetContentError> {
        Ok(self.query.get_by_id(id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::content::application::domain::entities::tests::record;
    use crate::modules::content::application::domain::entities::ContentType;
    use crate::modules::content::application::ports::outgoing::mocks::MockContentQueryMock;

    #[tokio::test]
    async fn returns_record() {
        let mut query = MockContentQueryMock::new();
        query
            .expect_get_by_id()
            .withf(|id| *id == 1)
            .returning(|_| Ok(record(ContentType::About)));

        let result = GetContentUseCase::new(query).execute(1).await.unwrap();
        assert_eq!(result.content_type, ContentType::About);
    }

    #[tokio::test]
    async fn missing_row_is_not_found() {
        let mut query = MockContentQueryMock::new();
        query
            .expect_get_by_id()
            .returning(|_| Err(ContentQueryError::NotFound));

        let result = GetContentUseCase::new(query).execute(9).await;
        assert!(matches!(result, Err(GetContentError::NotFound)));
    }
}
