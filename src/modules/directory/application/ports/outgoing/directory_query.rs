use async_trait::async_trait;

use crate::directory::application::domain::{PincodeEntry, SectorRecord};

#[derive(Debug, Clone, thiserror::Error)]
pub enum DirectoryQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[async_trait]
pub trait DirectoryQuery: Send + Sync {
    async fn find_by_code(&self, code: &str)
        -> Result<Option<PincodeEntry>, DirectoryQueryError>;

    async fn list_sectors(&self) -> Result<Vec<SectorRecord>, DirectoryQueryError>;

    async fn find_sector(&self, name: &str)
        -> Result<Option<SectorRecord>, DirectoryQueryError>;

    async fn list_by_sector(&self, sector: &str)
        -> Result<Vec<PincodeEntry>, DirectoryQueryError>;

    /// Case-insensitive substring search over code, area name and sector
    /// name, capped at `limit` rows in database order.
    async fn search(&self, query: &str, limit: u64)
        -> Result<Vec<PincodeEntry>, DirectoryQueryError>;

    async fn count_codes(&self) -> Result<u64, DirectoryQueryError>;
}
