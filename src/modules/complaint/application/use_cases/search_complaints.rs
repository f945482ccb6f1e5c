use async_trait::async_trait;
use uuid::Uuid;

use crate::complaint::application::domain::Complaint;
use crate::complaint::application::ports::outgoing::{ComplaintQuery, ComplaintQueryError};

#[derive(Debug, Clone, thiserror::Error)]
pub enum SearchComplaintsError {
    #[error("Search query is required")]
    MissingQuery,

    #[error("Query error: {0}")]
    QueryError(#[from] ComplaintQueryError),
}

#[async_trait]
pub trait ISearchComplaintsUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: Uuid,
        query: &str,
    ) -> Result<Vec<Complaint>, SearchComplaintsError>;
}

/// Searches the caller's complaints by ticket id, title or description.
pub struct SearchComplaintsUseCase<Q>
where
    Q: ComplaintQuery + Send + Sync,
{
    query: Q,
}

impl<Q> SearchComplaintsUseCase<Q>
where
    Q: ComplaintQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ISearchComplaintsUseCase for SearchComplaintsUseCase<Q>
where
    Q: ComplaintQuery + Send + Sync,
{
    async fn execute(
        &self,
        user_id: Uuid,
        query: &str,
    ) -> Result<Vec<Complaint>, SearchComplaintsError> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Err(SearchComplaintsError::MissingQuery);
        }

        let matches = self.query.search_for_user(user_id, trimmed).await?;
        Ok(matches)
    }
}
