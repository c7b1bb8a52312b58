use crate::modules::content::application::domain::entities::ContentRecord;
use crate::modules::content::application::ports::outgoing::{ContentListFilter, ContentQuery};
use crate::shared::pagination::{PageRequest, PageResult};

pub const ADMIN_CONTENT_PER_PAGE: u32 = 15;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListContentError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait::async_trait]
pub trait IListContentUseCase: Send + Sync {
    async fn execute(
        &self,
        filter: ContentListFilter,
        page: PageRequest,
    ) -> Result<PageResult<ContentRecord>, ListContentError>;
}

#[derive(Debug, Clone)]
pub struct ListContentUseCase<Q>
where
    Q: ContentQuery,
{
    query: Q,
}

impl<Q> ListContentUseCase<Q>
where
    Q: ContentQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait::async_trait]
impl<Q> IListContentUseCase for ListContentUseCase<Q>
where
    Q: ContentQuery + Send + Sync,
{
    async fn execute(
        &self,
        filter: ContentListFilter,
        page: PageRequest,
    ) -> Result<PageResult<ContentRecord>, ListContentError> {
        self.query
            .list(filter, page)
            .await
            .map_err(|e| ListContentError::RepositoryError(e.to_string()))
    }
}
