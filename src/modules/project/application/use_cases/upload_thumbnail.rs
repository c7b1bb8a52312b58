use std::sync::Arc;
use tracing::{info, warn};

use crate::modules::media::application::domain::{UploadPolicy, UploadRejection};
use crate::modules::media::application::ports::outgoing::FileStorage;
use crate::modules::project::application::domain::ProjectRecord;
use crate::modules::project::application::ports::outgoing::{
    ProjectQuery, ProjectQueryError, ProjectRepository, ProjectRepositoryError,
};

/// Storage directory for project thumbnails.
pub const THUMBNAIL_DIR: &str = "projects";

#[derive(Debug, Clone, thiserror::Error)]
pub enum UploadThumbnailError {
    #[error("Project not found")]
    NotFound,

    #[error("Upload rejected: {0}")]
    Rejected(UploadRejection),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait::async_trait]
pub trait IUploadThumbnailUseCase: Send + Sync {
    async fn execute(
        &self,
        id: i32,
        content_type: Option<&str>,
        bytes: &[u8],
    ) -> Result<ProjectRecord, UploadThumbnailError>;
}

#[derive(Clone)]
pub struct UploadThumbnailUseCase<Q, R>
where
    Q: ProjectQuery,
    R: ProjectRepository,
{
    query: Q,
    repository: R,
    storage: Arc<dyn FileStorage>,
    policy: UploadPolicy,
}

impl<Q, R> UploadThumbnailUseCase<Q, R>
where
    Q: ProjectQuery,
    R: ProjectRepository,
{
    pub fn new(query: Q, repository: R, storage: Arc<dyn FileStorage>) -> Self {
        Self {
            query,
            repository,
            storage,
            policy: UploadPolicy::thumbnails(),
        }
    }

    async fn discard(&self, url: &str) {
        if let Err(e) = self.storage.delete(url).await {
            warn!("Failed to remove thumbnail {}: {}", url, e);
        }
    }
}

#[async_trait::async_trait]
impl<Q, R> IUploadThumbnailUseCase for UploadThumbnailUseCase<Q, R>
where
    Q: ProjectQuery + Send + Sync,
    R: ProjectRepository + Send + Sync,
{
    async fn execute(
        &self,
        id: i32,
        content_type: Option<&str>,
        bytes: &[u8],
    ) -> Result<ProjectRecord, UploadThumbnailError> {
        let current = self.query.get_by_id(id).await.map_err(|e| match e {
            ProjectQueryError::NotFound => UploadThumbnailError::NotFound,
            other => UploadThumbnailError::RepositoryError(other.to_string()),
        })?;

        let kind = self.policy.check(content_type, bytes).map_err(|rejection| {
            warn!(id, %rejection, "Thumbnail upload rejected");
            UploadThumbnailError::Rejected(rejection)
        })?;

        let url = self
            .storage
            .store(THUMBNAIL_DIR, kind, bytes)
            .await
            .map_err(|e| UploadThumbnailError::StorageError(e.to_string()))?;

        // New file first, row second; the old file goes last.
        let updated = match self.repository.set_thumbnail(id, &url).await {
            Ok(updated) => updated,
            Err(e) => {
                self.discard(&url).await;
                return Err(match e {
                    ProjectRepositoryError::NotFound => UploadThumbnailError::NotFound,
                    other => UploadThumbnailError::RepositoryError(other.to_string()),
                });
            }
        };

        if let Some(previous) = current.thumbnail_url.as_deref() {
            if previous != url && self.storage.owns(previous) {
                self.discard(previous).await;
            }
        }

        info!(id, url = %url, "Project thumbnail replaced");
        Ok(updated)
    }
}
