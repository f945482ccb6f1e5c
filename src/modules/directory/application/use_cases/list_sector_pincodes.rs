use async_trait::async_trait;

use crate::directory::application::domain::PincodeEntry;
use crate::directory::application::ports::outgoing::{DirectoryQuery, DirectoryQueryError};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListSectorPincodesError {
    #[error("Sector not found")]
    SectorNotFound,

    #[error("Query error: {0}")]
    QueryError(#[from] DirectoryQueryError),
}

/// Mappings of one sector. Unlike the users-by-sector listing, asking for an
/// unknown sector here is an error.
#[async_trait]
pub trait IListSectorPincodesUseCase: Send + Sync {
    async fn execute(&self, sector: &str) -> Result<Vec<PincodeEntry>, ListSectorPincodesError>;
}

pub struct ListSectorPincodesUseCase<Q>
where
    Q: DirectoryQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListSectorPincodesUseCase<Q>
where
    Q: DirectoryQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IListSectorPincodesUseCase for ListSectorPincodesUseCase<Q>
where
    Q: DirectoryQuery + Send + Sync,
{
    async fn execute(&self, sector: &str) -> Result<Vec<PincodeEntry>, ListSectorPincodesError> {
        let sector = sector.trim();

        if self.query.find_sector(sector).await?.is_none() {
            return Err(ListSectorPincodesError::SectorNotFound);
        }

        Ok(self.query.list_by_sector(sector).await?)
    }
}
