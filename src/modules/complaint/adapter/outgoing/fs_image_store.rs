use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;
use tracing::warn;

use crate::complaint::application::ports::outgoing::{ImageStore, ImageStoreError, StoredFile};

/// Attachment bytes on local disk under a single root directory. The rows in
/// `complaint_images` keep paths relative to this root, so the directory can
/// move between environments without touching the database.
#[derive(Clone)]
pub struct FsImageStore {
    root: PathBuf,
}

impl FsImageStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Creates the upload directory if it is not there yet.
    pub async fn ensure_root(&self) -> Result<(), ImageStoreError> {
        fs::create_dir_all(&self.root).await.map_err(map_io_err)
    }

    fn absolute(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }
}

#[async_trait]
impl ImageStore for FsImageStore {
    async fn store(&self, filename: &str, data: &[u8]) -> Result<StoredFile, ImageStoreError> {
        let target = self.absolute(filename);

        if let Err(e) = fs::write(&target, data).await {
            // a partial file must not survive a failed write
            let _ = fs::remove_file(&target).await;
            return Err(map_io_err(e));
        }

        Ok(StoredFile {
            filename: filename.to_string(),
            path: filename.to_string(),
            size: data.len() as i64,
        })
    }

    async fn open(&self, path: &str) -> Result<PathBuf, ImageStoreError> {
        let target = self.absolute(path);

        match fs::metadata(&target).await {
            Ok(meta) if meta.is_file() => Ok(target),
            Ok(_) => Err(ImageStoreError::NotFound(path.to_string())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(ImageStoreError::NotFound(path.to_string()))
            }
            Err(e) => Err(map_io_err(e)),
        }
    }

    async fn remove(&self, path: &str) -> Result<(), ImageStoreError> {
        let target = self.absolute(path);

        match fs::remove_file(&target).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!(path, "File already absent");
                Ok(())
            }
            Err(e) => Err(map_io_err(e)),
        }
    }
}

fn map_io_err(err: std::io::Error) -> ImageStoreError {
    ImageStoreError::IoError(err.to_string())
}
