use tracing::info;

use crate::modules::service::application::ports::outgoing::{
    ServiceArchiver, ServiceArchiverError,
};
use crate::shared::pagination::ArchiveAction;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ArchiveServiceError {
    #[error("Service not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait::async_trait]
pub trait IArchiveServiceUseCase: Send + Sync {
    async fn execute(&self, id: i32, action: ArchiveAction) -> Result<(), ArchiveServiceError>;
}

#[derive(Debug, Clone)]
pub struct ArchiveServiceUseCase<A>
where
    A: ServiceArchiver,
{
    archiver: A,
}

impl<A> ArchiveServiceUseCase<A>
where
    A: ServiceArchiver,
{
    pub fn new(archiver: A) -> Self {
        Self { archiver }
    }
}

#[async_trait::async_trait]
impl<A> IArchiveServiceUseCase for ArchiveServiceUseCase<A>
where
    A: ServiceArchiver + Send + Sync,
{
    async fn execute(&self, id: i32, action: ArchiveAction) -> Result<(), ArchiveServiceError> {
        let result = match action {
            ArchiveAction::SoftDelete => self.archiver.soft_delete(id).await,
            ArchiveAction::Restore => self.archiver.restore(id).await,
            ArchiveAction::Force => self.archiver.hard_delete(id).await,
        };

        result.map_err(|e| match e {
            ServiceArchiverError::NotFound => ArchiveServiceError::NotFound,
            other => ArchiveServiceError::RepositoryError(other.to_string()),
        })?;

        info!(id, ?action, "Service archive state changed");
        Ok(())
    }
}
