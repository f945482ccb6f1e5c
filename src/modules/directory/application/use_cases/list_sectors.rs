use async_trait::async_trait;

use crate::directory::application::domain::SectorRecord;
use crate::directory::application::ports::outgoing::{DirectoryQuery, DirectoryQueryError};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListSectorsError {
    #[error("Query error: {0}")]
    QueryError(#[from] DirectoryQueryError),
}

#[async_trait]
pub trait IListSectorsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<SectorRecord>, ListSectorsError>;
}

pub struct ListSectorsUseCase<Q>
where
    Q: DirectoryQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListSectorsUseCase<Q>
where
    Q: DirectoryQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IListSectorsUseCase for ListSectorsUseCase<Q>
where
    Q: DirectoryQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<SectorRecord>, ListSectorsError> {
        Ok(self.query.list_sectors().await?)
    }
}
