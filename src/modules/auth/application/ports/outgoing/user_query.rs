// application/ports/outgoing/user_query.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::auth::application::domain::Language;

/// Result DTO for user queries
/// Contains all user data needed for read operations
#[derive(Debug, Clone)]
pub struct UserQueryResult {
    pub id: Uuid,
    pub id_number: String,
    pub mobile_number: String,
    pub password_hash: String,
    pub uid: String,
    pub pincode: String,
    pub sector: String,
    pub language: Language,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserQuery: Send + Sync {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<UserQueryResult>, UserQueryError>;
    async fn find_by_id_number(
        &self,
        id_number: &str,
    ) -> Result<Option<UserQueryResult>, UserQueryError>;
    async fn find_by_mobile_number(
        &self,
        mobile_number: &str,
    ) -> Result<Option<UserQueryResult>, UserQueryError>;
    async fn find_by_sector(&self, sector: &str) -> Result<Vec<UserQueryResult>, UserQueryError>;
}
