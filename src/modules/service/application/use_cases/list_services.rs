use crate::modules::service::application::domain::ServiceRecord;
use crate::modules::service::application::ports::outgoing::{ServiceListFilter, ServiceQuery};
use crate::shared::pagination::{PageRequest, PageResult};

pub const ADMIN_SERVICES_PER_PAGE: u32 = 15;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListServicesError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait::async_trait]
pub trait IListServicesUseCase: Send + Sync {
    async fn execute(
        &self,
        filter: ServiceListFilter,
        page: PageRequest,
    ) -> Result<PageResult<ServiceRecord>, ListServicesError>;
}

#[derive(Debug, Clone)]
pub struct ListServicesUseCase<Q>
where
    Q: ServiceQuery,
{
    query: Q,
}

impl<Q> ListServicesUseCase<Q>
where
    Q: ServiceQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait::async_trait]
impl<Q> IListServicesUseCase for ListServicesUseCase<Q>
where
    Q: ServiceQuery + Send + Sync,
{
    async fn execute(
        &self,
        filter: ServiceListFilter,
        page: PageRequest,
    ) -> Result<PageResult<ServiceRecord>, ListServicesError> {
        self.query
            .list(filter, page)
            .await
            .map_err(|e| ListServicesError::RepositoryError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::service::application::domain::entities::tests::service;
    use crate::modules::service::application::ports::outgoing::mocks::MockServiceQueryMock;
    use crate::modules::service::application::ports::outgoing::ServiceQueryError;
    use crate::shared::pagination::Trashed;

    #[tokio::test]
    async fn passes_filter_through() {
        let mut query = MockServiceQueryMock::new();
        query
            .expect_list()
            .withf(|filter, page| {
                filter.search.as_deref() == Some("web")
                    && filter.trashed == Trashed::Only
                    && page.per_page == ADMIN_SERVICES_PER_PAGE
            })
            .returning(|_, page| {
                Ok(PageResult {
                    items: vec![service(1)],
                    page: page.page,
                    per_page: page.per_page,
                    total: 1,
                })
            });

        let filter = ServiceListFilter {
            search: Some("web".to_string()),
            trashed: Trashed::Only,
        };
        let page = PageRequest::new(None, None, ADMIN_SERVICES_PER_PAGE);

        let result = ListServicesUseCase::new(query).execute(filter, page).await.unwrap();
        assert_eq!(result.total, 1);
    }

    #[tokio::test]
    async fn maps_query_error() {
        let mut query = MockServiceQueryMock::new();
        query
            .expect_list()
            .returning(|_, _| Err(ServiceQueryError::DatabaseError("down".to_string())));

        let result = ListServicesUseCase::new(query)
            .execute(ServiceListFilter::default(), PageRequest::new(None, None, 15))
            .await;

        assert!(matches!(result, Err(ListServicesError::RepositoryError(_))));
    }
}
