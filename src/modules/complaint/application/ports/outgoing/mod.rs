pub mod complaint_query;
pub mod complaint_repository;
pub mod image_store;

pub use complaint_query::{ComplaintQuery, ComplaintQueryError, PageRequest, PageResult};
pub use complaint_repository::{ComplaintRepository, ComplaintRepositoryError, NewImage};
pub use image_store::{ImageStore, ImageStoreError, StoredFile};
