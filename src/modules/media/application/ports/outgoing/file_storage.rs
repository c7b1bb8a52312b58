// src/modules/media/application/ports/outgoing/file_storage.rs

use async_trait::async_trait;

use crate::modules::media::application::domain::{ImageKind, StoredPath};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FileStorageError {
    #[error("File not found")]
    NotFound,

    /// The URL does not point into this store.
    #[error("File is not managed by this storage")]
    NotOwned,

    #[error("Storage I/O error: {0}")]
    Io(String),
}

#[async_trait]
pub trait FileStorage: Send + Sync {
    /// Persists `bytes` under a fresh name in `dir` and returns its public URL.
    async fn store(
        &self,
        dir: &str,
        kind: ImageKind,
        bytes: &[u8],
    ) -> Result<String, FileStorageError>;

    async fn delete(&self, public_url: &str) -> Result<(), FileStorageError>;

    /// Whether `public_url` was issued by [`FileStorage::store`].
    fn owns(&self, public_url: &str) -> bool;

    async fn read(&self, path: &StoredPath) -> Result<Vec<u8>, FileStorageError>;
}
