use async_trait::async_trait;

use crate::directory::application::domain::{PincodeEntry, SectorRecord};

#[derive(Debug, Clone, thiserror::Error)]
pub enum DirectoryRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait DirectoryRepository: Send + Sync {
    /// Wipes both directory tables and bulk-loads the given mappings and
    /// their derived sector aggregates.
    async fn replace_all(
        &self,
        entries: Vec<PincodeEntry>,
        sectors: Vec<SectorRecord>,
    ) -> Result<(), DirectoryRepositoryError>;
}
