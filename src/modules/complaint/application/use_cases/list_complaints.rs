use async_trait::async_trait;
use uuid::Uuid;

use crate::complaint::application::domain::Complaint;
use crate::complaint::application::ports::outgoing::{
    ComplaintQuery, ComplaintQueryError, PageRequest, PageResult,
};

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 10;
pub const MAX_LIMIT: u64 = 100;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListComplaintsError {
    #[error("Query error: {0}")]
    QueryError(#[from] ComplaintQueryError),
}

#[async_trait]
pub trait IListComplaintsUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: Uuid,
        page: Option<u64>,
        limit: Option<u64>,
    ) -> Result<PageResult<Complaint>, ListComplaintsError>;
}

/// Lists the caller's complaints, newest first. Out-of-range paging
/// parameters are clamped rather than rejected.
pub struct ListComplaintsUseCase<Q>
where
    Q: ComplaintQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListComplaintsUseCase<Q>
where
    Q: ComplaintQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IListComplaintsUseCase for ListComplaintsUseCase<Q>
where
    Q: ComplaintQuery + Send + Sync,
{
    async fn execute(
        &self,
        user_id: Uuid,
        page: Option<u64>,
        limit: Option<u64>,
    ) -> Result<PageResult<Complaint>, ListComplaintsError> {
        let page = page.unwrap_or(DEFAULT_PAGE).max(1);
        let limit = limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);

        let result = self
            .query
            .list_for_user(user_id, PageRequest { page, limit })
            .await?;

        Ok(result)
    }
}
