use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use crate::complaint::application::domain::{upload_policy, Complaint, NewComplaint};
use crate::complaint::application::ports::outgoing::{
    ComplaintRepository, ComplaintRepositoryError, ImageStore, ImageStoreError, NewImage,
};

/// One uploaded file, already read off the wire.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub original_name: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateComplaintError {
    /// Upload policy violation, reported with the policy message.
    #[error("{0}")]
    UploadRejected(String),

    #[error("Storage error: {0}")]
    StoreError(ImageStoreError),

    #[error("Repository error: {0}")]
    RepositoryError(#[from] ComplaintRepositoryError),
}

#[async_trait]
pub trait ICreateComplaintUseCase: Send + Sync {
    async fn execute(
        &self,
        complaint: NewComplaint,
        images: Vec<UploadedImage>,
    ) -> Result<Complaint, CreateComplaintError>;
}

pub struct CreateComplaintUseCase<R, S>
where
    R: ComplaintRepository + Send + Sync,
    S: ImageStore + Send + Sync,
{
    repository: R,
    store: S,
}

impl<R, S> CreateComplaintUseCase<R, S>
where
    R: ComplaintRepository + Send + Sync,
    S: ImageStore + Send + Sync,
{
    pub fn new(repository: R, store: S) -> Self {
        Self { repository, store }
    }

    /// Best-effort cleanup of files stored before the request failed.
    async fn discard(&self, stored: &[NewImage]) {
        for image in stored {
            if let Err(e) = self.store.remove(&image.path).await {
                warn!(path = %image.path, error = %e, "Orphaned upload could not be removed");
            }
        }
    }
}

#[async_trait]
impl<R, S> ICreateComplaintUseCase for CreateComplaintUseCase<R, S>
where
    R: ComplaintRepository + Send + Sync,
    S: ImageStore + Send + Sync,
{
    async fn execute(
        &self,
        complaint: NewComplaint,
        images: Vec<UploadedImage>,
    ) -> Result<Complaint, CreateComplaintError> {
        if images.len() > upload_policy::MAX_FILES {
            return Err(CreateComplaintError::UploadRejected(
                upload_policy::TOO_MANY_FILES_MESSAGE.to_string(),
            ));
        }

        let mut stored: Vec<NewImage> = Vec::with_capacity(images.len());

        for image in &images {
            if image.data.len() > upload_policy::MAX_FILE_BYTES {
                self.discard(&stored).await;
                return Err(CreateComplaintError::UploadRejected(
                    upload_policy::FILE_TOO_LARGE_MESSAGE.to_string(),
                ));
            }

            let Some(ext) = upload_policy::extension_for(&image.content_type) else {
                self.discard(&stored).await;
                return Err(CreateComplaintError::UploadRejected(
                    upload_policy::UNSUPPORTED_TYPE_MESSAGE.to_string(),
                ));
            };

            let filename = format!("{}{}", Uuid::new_v4().simple(), ext);

            match self.store.store(&filename, &image.data).await {
                Ok(file) => stored.push(NewImage {
                    filename: file.filename,
                    original_name: image.original_name.clone(),
                    path: file.path,
                    size: file.size,
                }),
                Err(e) => {
                    self.discard(&stored).await;
                    return Err(CreateComplaintError::StoreError(e));
                }
            }
        }

        match self.repository.create(complaint, stored.clone()).await {
            Ok(created) => {
                info!(
                    ticket_id = %created.ticket_id,
                    images = created.images.len(),
                    "Complaint filed"
                );
                Ok(created)
            }
            Err(e) => {
                self.discard(&stored).await;
                Err(e.into())
            }
        }
    }
}
