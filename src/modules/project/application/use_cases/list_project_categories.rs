use crate::modules::project::application::ports::outgoing::ProjectQuery;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListProjectCategoriesError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait::async_trait]
pub trait IListProjectCategoriesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<String>, ListProjectCategoriesError>;
}

#[derive(Debug, Clone)]
pub struct ListProjectCategoriesUseCase<Q>
where
    Q: ProjectQuery,
{
    query: Q,
}

impl<Q> ListProjectCategoriesUseCase<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait::async_trait]
impl<Q> IListProjectCategoriesUseCase for ListProjectCategoriesUseCase<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<String>, ListProjectCategoriesError> {
        self.query
            .distinct_categories()
            .await
            .map_err(|e| ListProjectCategoriesError::RepositoryError(e.to_string()))
    }
}
