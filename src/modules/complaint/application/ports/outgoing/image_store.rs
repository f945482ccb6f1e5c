use async_trait::async_trait;
use std::path::PathBuf;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ImageStoreError {
    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    IoError(String),
}

#[derive(Debug, Clone)]
pub struct StoredFile {
    pub filename: String,
    /// Storage-relative path, as persisted in the metadata row.
    pub path: String,
    pub size: i64,
}

/// Filesystem boundary for attachment bytes. Callers never touch paths
/// outside this port.
#[async_trait]
pub trait ImageStore: Send + Sync {
    async fn store(&self, filename: &str, data: &[u8]) -> Result<StoredFile, ImageStoreError>;

    /// Absolute path of a stored file, after checking that it exists.
    async fn open(&self, path: &str) -> Result<PathBuf, ImageStoreError>;

    /// Removing a file that is already gone is not an error.
    async fn remove(&self, path: &str) -> Result<(), ImageStoreError>;
}
