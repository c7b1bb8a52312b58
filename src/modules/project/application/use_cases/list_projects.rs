use crate::modules::project::application::domain::ProjectRecord;
use crate::modules::project::application::ports::outgoing::{ProjectListFilter, ProjectQuery};
use crate::shared::pagination::{PageRequest, PageResult};

pub const ADMIN_PROJECTS_PER_PAGE: u32 = 15;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListProjectsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait::async_trait]
pub trait IListProjectsUseCase: Send + Sync {
    async fn execute(
        &self,
        filter: ProjectListFilter,
        page: PageRequest,
    ) -> Result<PageResult<ProjectRecord>, ListProjectsError>;
}

#[derive(Debug, Clone)]
pub struct ListProjectsUseCase<Q>
where
    Q: ProjectQuery,
{
    query: Q,
}

impl<Q> ListProjectsUseCase<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait::async_trait]
impl<Q> IListProjectsUseCase for ListProjectsUseCase<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(
        &self,
        filter: ProjectListFilter,
        page: PageRequest,
    ) -> Result<PageResult<ProjectRecord>, ListProjectsError> {
        self.query
            .list(
                ProjectListFilter {
                    active_only: false,
                    ..filter
                },
                page,
            )
            .await
            .map_err(|e| ListProjectsError::RepositoryError(e.to_string()))
    }
}
