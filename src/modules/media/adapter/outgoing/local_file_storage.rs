// src/modules/media/adapter/outgoing/local_file_storage.rs

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

use crate::modules::media::application::domain::{ImageKind, StoredPath};
use crate::modules::media::application::ports::outgoing::file_storage::{
    FileStorage, FileStorageError,
};

/// Files under `{root}/{dir}/{uuid}.{ext}`, served as `{public_prefix}/{dir}/{file}`.
#[derive(Debug, Clone)]
pub struct LocalFileStorage {
    root: PathBuf,
    public_prefix: String,
}

impl LocalFileStorage {
    pub fn new(root: impl Into<PathBuf>, public_prefix: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            public_prefix: public_prefix.into(),
        }
    }

    fn full_path(&self, path: &StoredPath) -> PathBuf {
        self.root.join(path.dir()).join(path.file())
    }
}

fn map_io_err(e: std::io::Error) -> FileStorageError {
    if e.kind() == ErrorKind::NotFound {
        FileStorageError::NotFound
    } else {
        FileStorageError::Io(e.to_string())
    }
}

async fn write_atomically(target: &Path, bytes: &[u8]) -> Result<(), std::io::Error> {
    let tmp = target.with_extension("tmp");

    tokio::fs::write(&tmp, bytes).await?;

    if let Err(e) = tokio::fs::rename(&tmp, target).await {
        let _ = tokio::fs::remove_file(&tmp).await;
        return Err(e);
    }

    Ok(())
}

#[async_trait]
impl FileStorage for LocalFileStorage {
    async fn store(
        &self,
        dir: &str,
        kind: ImageKind,
        bytes: &[u8],
    ) -> Result<String, FileStorageError> {
        let file = format!("{}.{}", Uuid::new_v4(), kind.extension());
        let path = StoredPath::parse(dir, &file)
            .ok_or_else(|| FileStorageError::Io(format!("invalid storage directory: {dir}")))?;

        tokio::fs::create_dir_all(self.root.join(path.dir()))
            .await
            .map_err(map_io_err)?;

        let target = self.full_path(&path);
        write_atomically(&target, bytes)
            .await
            .map_err(|e| FileStorageError::Io(e.to_string()))?;

        debug!(path = %target.display(), size = bytes.len(), "Stored upload");
        Ok(path.public_url(&self.public_prefix))
    }

    async fn delete(&self, public_url: &str) -> Result<(), FileStorageError> {
        let path = StoredPath::from_public_url(public_url, &self.public_prefix)
            .ok_or(FileStorageError::NotOwned)?;

        tokio::fs::remove_file(self.full_path(&path))
            .await
            .map_err(map_io_err)
    }

    fn owns(&self, public_url: &str) -> bool {
        StoredPath::from_public_url(public_url, &self.public_prefix).is_some()
    }

    async fn read(&self, path: &StoredPath) -> Result<Vec<u8>, FileStorageError> {
        tokio::fs::read(self.full_path(path)).await.map_err(map_io_err)
    }
}
