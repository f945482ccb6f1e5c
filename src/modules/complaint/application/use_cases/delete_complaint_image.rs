use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::complaint::application::ports::outgoing::{
    ComplaintQuery, ComplaintQueryError, ComplaintRepository, ComplaintRepositoryError, ImageStore,
    ImageStoreError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteComplaintImageError {
    #[error("Complaint not found")]
    ComplaintNotFound,

    #[error("Image not found in complaint")]
    ImageNotFound,

    #[error("Query error: {0}")]
    QueryError(#[from] ComplaintQueryError),

    #[error("Storage error: {0}")]
    StoreError(#[from] ImageStoreError),

    #[error("Repository error: {0}")]
    RepositoryError(ComplaintRepositoryError),
}

impl From<ComplaintRepositoryError> for DeleteComplaintImageError {
    fn from(err: ComplaintRepositoryError) -> Self {
        match err {
            ComplaintRepositoryError::ImageNotFound => DeleteComplaintImageError::ImageNotFound,
            other => DeleteComplaintImageError::RepositoryError(other),
        }
    }
}

#[async_trait]
pub trait IDeleteComplaintImageUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: Uuid,
        complaint_id: Uuid,
        filename: &str,
    ) -> Result<(), DeleteComplaintImageError>;
}

/// Detaches one image from a complaint the caller owns. The backing file
/// goes first, then the metadata row; a file that is already gone does
/// not block the detach.
pub struct DeleteComplaintImageUseCase<Q, R, S>
where
    Q: ComplaintQuery + Send + Sync,
    R: ComplaintRepository + Send + Sync,
    S: ImageStore + Send + Sync,
{
    query: Q,
    repository: R,
    store: S,
}

impl<Q, R, S> DeleteComplaintImageUseCase<Q, R, S>
where
    Q: ComplaintQuery + Send + Sync,
    R: ComplaintRepository + Send + Sync,
    S: ImageStore + Send + Sync,
{
    pub fn new(query: Q, repository: R, store: S) -> Self {
        Self {
            query,
            repository,
            store,
        }
    }
}

#[async_trait]
impl<Q, R, S> IDeleteComplaintImageUseCase for DeleteComplaintImageUseCase<Q, R, S>
where
    Q: ComplaintQuery + Send + Sync,
    R: ComplaintRepository + Send + Sync,
    S: ImageStore + Send + Sync,
{
    async fn execute(
        &self,
        user_id: Uuid,
        complaint_id: Uuid,
        filename: &str,
    ) -> Result<(), DeleteComplaintImageError> {
        let complaint = self
            .query
            .find_for_user(user_id, complaint_id)
            .await?
            .ok_or(DeleteComplaintImageError::ComplaintNotFound)?;

        let image = complaint
            .images
            .iter()
            .find(|i| i.filename == filename)
            .ok_or(DeleteComplaintImageError::ImageNotFound)?;

        self.store.remove(&image.path).await?;
        self.repository.delete_image(complaint_id, filename).await?;

        info!(ticket_id = %complaint.ticket_id, "Complaint image removed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::path::PathBuf;
    use std::sync::Mutex;

    use crate::complaint::application::domain::{
        Category, Complaint, ComplaintImage, NewComplaint, Priority, Status,
    };
    use crate::complaint::application::ports::outgoing::{
        NewImage, PageRequest, PageResult, StoredFile,
    };

    fn complaint_with_image(user_id: Uuid, filename: &str) -> Complaint {
        let now = Utc::now();
        Complaint {
            id: Uuid::new_v4(),
            ticket_id: "COMP20250012".to_string(),
            user_id,
            category: Category::Accessibility,
            priority: Priority::Low,
            status: Status::Pending,
            title: "Broken pavement".to_string(),
            description: "Pavement slabs are missing near the bus stop.".to_string(),
            location: None,
            admin_notes: None,
            images: vec![ComplaintImage {
                filename: filename.to_string(),
                original_name: "pavement.jpg".to_string(),
                path: format!("complaints/{filename}"),
                size: 2048,
                uploaded_at: now,
            }],
            created_at: now,
            updated_at: now,
        }
    }

    struct MockQuery {
        result: Result<Option<Complaint>, ComplaintQueryError>,
    }

    #[async_trait]
    impl ComplaintQuery for MockQuery {
        async fn find_for_user(
            &self,
            _user_id: Uuid,
            _complaint_id: Uuid,
        ) -> Result<Option<Complaint>, ComplaintQueryError> {
            self.result.clone()
        }

        async fn list_for_user(
            &self,
            _user_id: Uuid,
            _page: PageRequest,
        ) -> Result<PageResult<Complaint>, ComplaintQueryError> {
            unimplemented!("not used")
        }

        async fn search_for_user(
            &self,
            _user_id: Uuid,
            _query: &str,
        ) -> Result<Vec<Complaint>, ComplaintQueryError> {
            unimplemented!("not used")
        }

        async fn find_image_for_user(
            &self,
            _user_id: Uuid,
            _filename: &str,
        ) -> Result<Option<ComplaintImage>, ComplaintQueryError> {
            unimplemented!("not used")
        }
    }

    struct MockRepository {
        result: Result<(), ComplaintRepositoryError>,
    }

    #[async_trait]
    impl ComplaintRepository for MockRepository {
        async fn create(
            &self,
            _complaint: NewComplaint,
            _images: Vec<NewImage>,
        ) -> Result<Complaint, ComplaintRepositoryError> {
            unimplemented!("not used")
        }

        async fn delete_image(
            &self,
            _complaint_id: Uuid,
            _filename: &str,
        ) -> Result<(), ComplaintRepositoryError> {
            self.result.clone()
        }
    }

    #[derive(Default)]
    struct RecordingStore {
        removed: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl ImageStore for RecordingStore {
        async fn store(&self, _filename: &str, _data: &[u8]) -> Result<StoredFile, ImageStoreError> {
            unimplemented!("not used")
        }

        async fn open(&self, _path: &str) -> Result<PathBuf, ImageStoreError> {
            unimplemented!("not used")
        }

        async fn remove(&self, path: &str) -> Result<(), ImageStoreError> {
            self.removed.lock().unwrap().push(path.to_string());
            Ok(())
        }
    }

    #[tokio::test]
    async fn removes_file_and_metadata() {
        let user_id = Uuid::new_v4();
        let uc = DeleteComplaintImageUseCase::new(
            MockQuery {
                result: Ok(Some(complaint_with_image(user_id, "abc123.jpg"))),
            },
            MockRepository { result: Ok(()) },
            RecordingStore::default(),
        );

        uc.execute(user_id, Uuid::new_v4(), "abc123.jpg")
            .await
            .unwrap();

        assert_eq!(
            *uc.store.removed.lock().unwrap(),
            vec!["complaints/abc123.jpg".to_string()]
        );
    }

    #[tokio::test]
    async fn unknown_complaint_is_not_found() {
        let uc = DeleteComplaintImageUseCase::new(
            MockQuery { result: Ok(None) },
            MockRepository { result: Ok(()) },
            RecordingStore::default(),
        );

        let err = uc
            .execute(Uuid::new_v4(), Uuid::new_v4(), "abc123.jpg")
            .await
            .unwrap_err();

        assert!(matches!(err, DeleteComplaintImageError::ComplaintNotFound));
        assert!(uc.store.removed.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn unattached_filename_is_image_not_found() {
        let user_id = Uuid::new_v4();
        let uc = DeleteComplaintImageUseCase::new(
            MockQuery {
                result: Ok(Some(complaint_with_image(user_id, "abc123.jpg"))),
            },
            MockRepository { result: Ok(()) },
            RecordingStore::default(),
        );

        let err = uc
            .execute(user_id, Uuid::new_v4(), "other.jpg")
            .await
            .unwrap_err();

        assert!(matches!(err, DeleteComplaintImageError::ImageNotFound));
        assert_eq!(err.to_string(), "Image not found in complaint");
        assert!(uc.store.removed.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn repository_race_maps_to_image_not_found() {
        let user_id = Uuid::new_v4();
        let uc = DeleteComplaintImageUseCase::new(
            MockQuery {
                result: Ok(Some(complaint_with_image(user_id, "abc123.jpg"))),
            },
            MockRepository {
                result: Err(ComplaintRepositoryError::ImageNotFound),
            },
            RecordingStore::default(),
        );

        let err = uc
            .execute(user_id, Uuid::new_v4(), "abc123.jpg")
            .await
            .unwrap_err();

        assert!(matches!(err, DeleteComplaintImageError::ImageNotFound));
    }

    #[tokio::test]
    async fn repository_error_propagates() {
        let user_id = Uuid::new_v4();
        let uc = DeleteComplaintImageUseCase::new(
            MockQuery {
                result: Ok(Some(complaint_with_image(user_id, "abc123.jpg"))),
            },
            MockRepository {
                result: Err(ComplaintRepositoryError::DatabaseError("down".to_string())),
            },
            RecordingStore::default(),
        );

        let err = uc
            .execute(user_id, Uuid::new_v4(), "abc123.jpg")
            .await
            .unwrap_err();

        assert!(matches!(err, DeleteComplaintImageError::RepositoryError(_)));
    }
}
