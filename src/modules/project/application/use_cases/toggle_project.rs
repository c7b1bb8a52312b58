use tracing::info;

use crate::modules::project::application::domain::ProjectRecord;
use crate::modules::project::application::ports::outgoing::{
    ProjectRepository, ProjectRepositoryError,
};

/// Boolean columns an admin can flip in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectFlag {
    Active,
    Featured,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ToggleProjectError {
    #[error("Project not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait::async_trait]
pub trait IToggleProjectUseCase: Send + Sync {
    async fn execute(&self, id: i32, flag: ProjectFlag)
        -> Result<ProjectRecord, ToggleProjectError>;
}

#[derive(Debug, Clone)]
pub struct ToggleProjectUseCase<R>
where
    R: ProjectRepository,
{
    repository: R,
}

impl<R> ToggleProjectUseCase<R>
where
    R: ProjectRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl<R> IToggleProjectUseCase for ToggleProjectUseCase<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(
        &self,
        id: i32,
        flag: ProjectFlag,
    ) -> Result<ProjectRecord, ToggleProjectError> {
        let result = match flag {
            ProjectFlag::Active => self.repository.toggle_active(id).await,
            ProjectFlag::Featured => self.repository.toggle_featured(id).await,
        };

        let record = result.map_err(|e| match e {
            ProjectRepositoryError::NotFound => ToggleProjectError::NotFound,
            other => ToggleProjectError::RepositoryError(other.to_string()),
        })?;

        info!(
            id,
            ?flag,
            is_active = record.is_active,
            is_featured = record.is_featured,
            "Project flag toggled"
        );
        Ok(record)
    }
}
