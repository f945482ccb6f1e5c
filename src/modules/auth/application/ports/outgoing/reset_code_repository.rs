use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// One pending password-reset challenge for a user. The code itself is never
/// stored, only its SHA-256 hex digest.
#[derive(Debug, Clone)]
pub struct ResetCodeRecord {
    pub user_id: Uuid,
    pub code_hash: String,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ResetCodeRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ResetCodeRepository: Send + Sync {
    /// Inserts the record, replacing any previous code for the same user.
    async fn save_code(&self, record: ResetCodeRecord) -> Result<(), ResetCodeRepositoryError>;

    async fn find_by_user(
        &self,
        user_id: Uuid,
    ) -> Result<Option<ResetCodeRecord>, ResetCodeRepositoryError>;

    async fn delete_for_user(&self, user_id: Uuid) -> Result<(), ResetCodeRepositoryError>;
}
