use crate::modules::contact::application::domain::MessageSummary;
use crate::modules::content::application::domain::{ContentType, PortfolioEntry};
use crate::modules::content::application::ports::outgoing::{
    ContentListFilter, ContentQuery, ContentSort,
};
use crate::shared::i18n::Locale;
use crate::shared::pagination::{PageRequest, PageResult};

pub const MESSAGES_PER_PAGE: u32 = 10;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListMessagesError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait::async_trait]
pub trait IListMessagesUseCase: Send + Sync {
    async fn execute(&self, page: PageRequest)
        -> Result<PageResult<MessageSummary>, ListMessagesError>;
}

#[derive(Debug, Clone)]
pub struct ListMessagesUseCase<Q>
where
    Q: ContentQuery,
{
    query: Q,
}

impl<Q> ListMessagesUseCase<Q>
where
    Q: ContentQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait::async_trait]
impl<Q> IListMessagesUseCase for ListMessagesUseCase<Q>
where
    Q: ContentQuery + Send + Sync,
{
    async fn execute(
        &self,
        page: PageRequest,
    ) -> Result<PageResult<MessageSummary>, ListMessagesError> {
        let filter = ContentListFilter {
            search: None,
            content_type: Some(ContentType::ContactMessage),
            sort: ContentSort::Newest,
        };

        let records = self
            .query
            .list(filter, page)
            .await
            .map_err(|e| ListMessagesError::RepositoryError(e.to_string()))?;

        Ok(records.filter_map(|record| {
            PortfolioEntry::from_record(&record, Locale::En)
                .into_contact_message()
                .map(MessageSummary::from)
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::content::application::domain::entities::tests::record;
    use crate::modules::content::application::ports::outgoing::mocks::MockContentQueryMock;

    #[tokio::test]
    async fn lists_newest_contact_messages() {
        let mut query = MockContentQueryMock::new();
        query
            .expect_list()
            .withf(|filter, page| {
                filter.content_type == Some(ContentType::ContactMessage)
                    && filter.sort == ContentSort::Newest
                    && page.per_page == MESSAGES_PER_PAGE
            })
            .returning(|_, page| {
                Ok(PageResult {
                    items: vec![record(ContentType::ContactMessage)],
                    page: page.page,
                    per_page: page.per_page,
                    total: 1,
                })
            });

        let page = PageRequest::new(None, None, MESSAGES_PER_PAGE);
        let result = ListMessagesUseCase::new(query).execute(page).await.unwrap();

        assert_eq!(result.total, 1);
        assert_eq!(result.items[0].name, "Title");
    }
}
