pub mod directory_query;
pub mod directory_repository;

pub use directory_query::{DirectoryQuery, DirectoryQueryError};
pub use directory_repository::{DirectoryRepository, DirectoryRepositoryError};
