use crate::modules::service::application::domain::ServiceView;
use crate::modules::service::application::ports::outgoing::ServiceQuery;
use crate::shared::i18n::Locale;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListPublicServicesError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait::async_trait]
pub trait IListPublicServicesUseCase: Send + Sync {
    async fn execute(&self, locale: Locale) -> Result<Vec<ServiceView>, ListPublicServicesError>;
}

#[derive(Debug, Clone)]
pub struct ListPublicServicesUseCase<Q>
where
    Q: ServiceQuery,
{
    query: Q,
}

impl<Q> ListPublicServicesUseCase<Q>
where
    Q: ServiceQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait::async_trait]
impl<Q> IListPublicServicesUseCase for ListPublicServicesUseCase<Q>
where
    Q: ServiceQuery + Send + Sync,
{
    async fn execute(&self, locale: Locale) -> Result<Vec<ServiceView>, ListPublicServicesError> {
        let records = self
            .query
            .list_active()
            .await
            .map_err(|e| ListPublicServicesError::RepositoryError(e.to_string()))?;

        Ok(records
            .iter()
            .map(|record| ServiceView::localize(record, locale))
            .collect())
    }
}
