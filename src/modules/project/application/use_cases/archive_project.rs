use tracing::info;

use crate::modules::project::application::ports::outgoing::{
    ProjectArchiver, ProjectArchiverError,
};
use crate::shared::pagination::ArchiveAction;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ArchiveProjectError {
    #[error("Project not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait::async_trait]
pub trait IArchiveProjectUseCase: Send + Sync {
    async fn execute(&self, id: i32, action: ArchiveAction) -> Result<(), ArchiveProjectError>;
}

#[derive(Debug, Clone)]
pub struct ArchiveProjectUseCase<A>
where
    A: ProjectArchiver,
{
    archiver: A,
}

impl<A> ArchiveProjectUseCase<A>
where
    A: ProjectArchiver,
{
    pub fn new(archiver: A) -> Self {
        Self { archiver }
    }
}

#[async_trait::async_trait]
impl<A> IArchiveProjectUseCase for ArchiveProjectUseCase<A>
where
    A: ProjectArchiver + Send + Sync,
{
    async fn execute(&self, id: i32, action: ArchiveAction) -> Result<(), ArchiveProjectError> {
        let result = match action {
            ArchiveAction::SoftDelete => self.archiver.soft_delete(id).await,
            ArchiveAction::Restore => self.archiver.restore(id).await,
            ArchiveAction::Force => self.archiver.hard_delete(id).await,
        };

        result.map_err(|e| match e {
            ProjectArchiverError::NotFound => ArchiveProjectError::NotFound,
            other => ArchiveProjectError::RepositoryError(other.to_string()),
        })?;

        info!(id, ?action, "Project archive state changed");
        Ok(())
    }
}
