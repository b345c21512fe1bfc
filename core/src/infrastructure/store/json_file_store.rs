use std::path::{Path, PathBuf};

use serde::{Serialize, de::DeserializeOwned};
use tokio::sync::Mutex;
use tracing::error;

use crate::domain::common::entities::app_errors::CoreError;

/// One JSON document on disk, rewritten as a full snapshot on every change.
///
/// Read-modify-write cycles are serialized by an async mutex, and each
/// snapshot is written to a temporary file then renamed over the original,
/// so readers never observe a half-written document. The lock only covers
/// this process.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the document. A missing file reads as `T::default()`.
    pub async fn read<T>(&self) -> Result<T, CoreError>
    where
        T: DeserializeOwned + Default,
    {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(T::default()),
            Err(e) => {
                error!("Failed to read {}: {}", self.path.display(), e);
                return Err(CoreError::StorageError(format!("failed to read store: {}", e)));
            }
        };

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(T::default());
        }

        serde_json::from_slice(&bytes).map_err(|e| {
            error!("Failed to parse {}: {}", self.path.display(), e);
            CoreError::StorageError(format!("corrupt store: {}", e))
        })
    }

    /// Applies `change` to the current document and commits the result.
    /// Nothing is written when `change` fails.
    pub async fn update<T, R, F>(&self, change: F) -> Result<R, CoreError>
    where
        T: DeserializeOwned + Serialize + Default + Send,
        F: FnOnce(&mut T) -> Result<R, CoreError> + Send,
        R: Send,
    {
        let _guard = self.write_lock.lock().await;

        let mut document: T = self.read().await?;
        let result = change(&mut document)?;
        self.write(&document).await?;

        Ok(result)
    }

    async fn write<T>(&self, document: &T) -> Result<(), CoreError>
    where
        T: Serialize,
    {
        let bytes = serde_json::to_vec_pretty(document).map_err(|e| {
            error!("Failed to serialize {}: {}", self.path.display(), e);
            CoreError::InternalServerError
        })?;

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                error!("Failed to create {}: {}", parent.display(), e);
                CoreError::StorageError(format!("failed to create data directory: {}", e))
            })?;
        }

        let mut tmp_path = self.path.clone().into_os_string();
        tmp_path.push(".tmp");
        let tmp_path = PathBuf::from(tmp_path);

        tokio::fs::write(&tmp_path, bytes).await.map_err(|e| {
            error!("Failed to write {}: {}", tmp_path.display(), e);
            CoreError::StorageError(format!("failed to write store: {}", e))
        })?;

        tokio::fs::rename(&tmp_path, &self.path).await.map_err(|e| {
            error!("Failed to replace {}: {}", self.path.display(), e);
            CoreError::StorageError(format!("failed to write store: {}", e))
        })
    }
}
