use async_trait::async_trait;
use std::path::PathBuf;
use tracing::warn;
use uuid::Uuid;

use crate::complaint::application::ports::outgoing::{
    ComplaintQuery, ComplaintQueryError, ImageStore, ImageStoreError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetComplaintImageError {
    /// Unknown filename, someone else's attachment, or a missing backing file.
    #[error("Image not found")]
    NotFound,

    #[error("Query error: {0}")]
    QueryError(#[from] ComplaintQueryError),

    #[error("Storage error: {0}")]
    StoreError(ImageStoreError),
}

/// An attachment resolved to a readable file on disk.
#[derive(Debug, Clone)]
pub struct ImageFile {
    pub path: PathBuf,
    pub original_name: String,
}

#[async_trait]
pub trait IGetComplaintImageUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: Uuid,
        filename: &str,
    ) -> Result<ImageFile, GetComplaintImageError>;
}

pub struct GetComplaintImageUseCase<Q, S>
where
    Q: ComplaintQuery + Send + Sync,
    S: ImageStore + Send + Sync,
{
    query: Q,
    store: S,
}

impl<Q, S> GetComplaintImageUseCase<Q, S>
where
    Q: ComplaintQuery + Send + Sync,
    S: ImageStore + Send + Sync,
{
    pub fn new(query: Q, store: S) -> Self {
        Self { query, store }
    }
}

#[async_trait]
impl<Q, S> IGetComplaintImageUseCase for GetComplaintImageUseCase<Q, S>
where
    Q: ComplaintQuery + Send + Sync,
    S: ImageStore + Send + Sync,
{
    async fn execute(
        &self,
        user_id: Uuid,
        filename: &str,
    ) -> Result<ImageFile, GetComplaintImageError> {
        let image = self
            .query
            .find_image_for_user(user_id, filename)
            .await?
            .ok_or(GetComplaintImageError::NotFound)?;

        let path = match self.store.open(&image.path).await {
            Ok(path) => path,
            Err(ImageStoreError::NotFound(path)) => {
                warn!(path = %path, "Attachment metadata points at a missing file");
                return Err(GetComplaintImageError::NotFound);
            }
            Err(e) => return Err(GetComplaintImageError::StoreError(e)),
        };

        Ok(ImageFile {
            path,
            original_name: image.original_name,
        })
    }
}
