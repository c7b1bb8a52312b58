use crate::modules::project::application::domain::ProjectCard;
use crate::modules::project::application::ports::outgoing::{ProjectListFilter, ProjectQuery};
use crate::shared::i18n::Locale;
use crate::shared::pagination::{PageRequest, PageResult, Trashed};

pub const PUBLIC_PROJECTS_PER_PAGE: u32 = 15;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListPublicProjectsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait::async_trait]
pub trait IListPublicProjectsUseCase: Send + Sync {
    async fn execute(
        &self,
        filter: ProjectListFilter,
        page: PageRequest,
        locale: Locale,
    ) -> Result<PageResult<ProjectCard>, ListPublicProjectsError>;
}

#[derive(Debug, Clone)]
pub struct ListPublicProjectsUseCase<Q>
where
    Q: ProjectQuery,
{
    query: Q,
}

impl<Q> ListPublicProjectsUseCase<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait::async_trait]
impl<Q> IListPublicProjectsUseCase for ListPublicProjectsUseCase<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(
        &self,
        filter: ProjectListFilter,
        page: PageRequest,
        locale: Locale,
    ) -> Result<PageResult<ProjectCard>, ListPublicProjectsError> {
        let filter = ProjectListFilter {
            trashed: Trashed::Without,
            active_only: true,
            ..filter
        };

        let records = self
            .query
            .list(filter, page)
            .await
            .map_err(|e| ListPublicProjectsError::RepositoryError(e.to_string()))?;

        Ok(records.map(|record| ProjectCard::localize(&record, locale)))
    }
}
