use crate::modules::service::application::domain::ServiceRecord;
use crate::modules::service::application::ports::outgoing::{ServiceQuery, ServiceQueryError};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetServiceError {
    #[error("Service not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait::async_trait]
pub trait IGetServiceUseCase: Send + Sync {
    async fn execute(&self, id: i32) -> Result<ServiceRecord, GetServiceError>;
}

#[derive(Debug, Clone)]
pub struct GetServiceUseCase<Q>
where
    Q: ServiceQuery,
{
    query: Q,
}

impl<Q> GetServiceUseCase<Q>
where
    Q: ServiceQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait::async_trait]
impl<Q> IGetServiceUseCase for GetServiceUseCase<Q>
where
    Q: ServiceQuery + Send + Sync,
{
    async fn execute(&self, id: i32) -> Result<ServiceRecord, GetServiceError> {
        self.query.get_by_id(id).await.map_err(|e| match e {
            ServiceQueryError::NotFound => GetServiceError::NotFound,
            other => GetServiceError::RepositoryError(other.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::service::application::ports::outgoing::mocks::MockServiceQueryMock;

    #[tokio::test]
    async fn missing_service_is_not_found() {
        let mut query = MockServiceQueryMock::new();
        query
            .expect_get_by_id()
            .returning(|_| Err(ServiceQueryError::NotFound));

        let result = GetServiceUseCase::new(query).execute(9).await;
        assert!(matches!(result, Err(GetServiceError::NotFound)));
    }
}
