use async_trait::async_trait;

use crate::directory::application::domain::PincodeEntry;
use crate::directory::application::ports::outgoing::{DirectoryQuery, DirectoryQueryError};

/// Upper bound on search results, matching the public API contract.
pub const SEARCH_LIMIT: u64 = 10;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SearchDirectoryError {
    #[error("Query error: {0}")]
    QueryError(#[from] DirectoryQueryError),
}

#[async_trait]
pub trait ISearchDirectoryUseCase: Send + Sync {
    async fn execute(&self, query: &str) -> Result<Vec<PincodeEntry>, SearchDirectoryError>;
}

pub struct SearchDirectoryUseCase<Q>
where
    Q: DirectoryQuery + Send + Sync,
{
    query: Q,
}

impl<Q> SearchDirectoryUseCase<Q>
where
    Q: DirectoryQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ISearchDirectoryUseCase for SearchDirectoryUseCase<Q>
where
    Q: DirectoryQuery + Send + Sync,
{
    async fn execute(&self, query: &str) -> Result<Vec<PincodeEntry>, SearchDirectoryError> {
        Ok(self.query.search(query.trim(), SEARCH_LIMIT).await?)
    }
}
