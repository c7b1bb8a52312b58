use serde::Serialize;

use crate::modules::project::application::domain::ProjectRecord;
use crate::modules::project::application::ports::outgoing::{
    ProjectLinks, ProjectQuery, ProjectQueryError,
};

/// A project with the ids of its linked services and skills, for editing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectDetail {
    #[serde(flatten)]
    pub project: ProjectRecord,
    #[serde(flatten)]
    pub links: ProjectLinks,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetProjectError {
    #[error("Project not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ProjectQueryError> for GetProjectError {
    fn from(e: ProjectQueryError) -> Self {
        match e {
            ProjectQueryError::NotFound => GetProjectError::NotFound,
            other => GetProjectError::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait::async_trait]
pub trait IGetProjectUseCase: Send + Sync {
    async fn execute(&self, id: i32) -> Result<ProjectDetail, GetProjectError>;
}

#[derive(Debug, Clone)]
pub struct GetProjectUseCase<Q>
where
    Q: ProjectQuery,
{
    query: Q,
}

impl<Q> GetProjectUseCase<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait::async_trait]
impl<Q> IGetProjectUseCase for GetProjectUseCase<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(&self, id: i32) -> Result<ProjectDetail, GetProjectError> {
        let project = self.query.get_by_id(id).await?;
        let links = self.query.links(id).await?;

        Ok(ProjectDetail { project, links })
    }
}
