use async_trait::async_trait;
use uuid::Uuid;

use crate::complaint::application::domain::{Complaint, NewComplaint};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ComplaintRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Image not attached to complaint")]
    ImageNotFound,
}

/// Metadata of one stored attachment, recorded alongside the complaint row.
#[derive(Debug, Clone)]
pub struct NewImage {
    pub filename: String,
    pub original_name: String,
    pub path: String,
    pub size: i64,
}

#[async_trait]
pub trait ComplaintRepository: Send + Sync {
    /// Draws the next ticket sequence atomically and persists the complaint
    /// plus its attachment metadata in one transaction.
    async fn create(
        &self,
        complaint: NewComplaint,
        images: Vec<NewImage>,
    ) -> Result<Complaint, ComplaintRepositoryError>;

    /// Deletes one attachment row and refreshes the complaint's
    /// `updated_at`. `ImageNotFound` when no row matched.
    async fn delete_image(
        &self,
        complaint_id: Uuid,
        filename: &str,
    ) -> Result<(), ComplaintRepositoryError>;
}
