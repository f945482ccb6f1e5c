use async_trait::async_trait;
use uuid::Uuid;

use crate::complaint::application::domain::Complaint;
use crate::complaint::application::ports::outgoing::{ComplaintQuery, ComplaintQueryError};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetComplaintError {
    /// Covers both unknown ids and complaints owned by someone else.
    #[error("Complaint not found")]
    NotFound,

    #[error("Query error: {0}")]
    QueryError(#[from] ComplaintQueryError),
}

#[async_trait]
pub trait IGetComplaintUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: Uuid,
        complaint_id: Uuid,
    ) -> Result<Complaint, GetComplaintError>;
}

pub struct GetComplaintUseCase<Q>
where
    Q: ComplaintQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetComplaintUseCase<Q>
where
    Q: ComplaintQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IGetComplaintUseCase for GetComplaintUseCase<Q>
where
    Q: ComplaintQuery + Send + Sync,
{
    async fn execute(
        &self,
        user_id: Uuid,
        complaint_id: Uuid,
    ) -> Result<Complaint, GetComplaintError> {
        self.query
            .find_for_user(user_id, complaint_id)
            .await?
            .ok_or(GetComplaintError::NotFound)
    }
}
