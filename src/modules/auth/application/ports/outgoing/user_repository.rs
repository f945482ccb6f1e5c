use crate::auth::application::domain::{Language, User};
use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, user: User) -> Result<User, UserRepositoryError>;

    async fn update_language(
        &self,
        user_id: Uuid,
        language: Language,
    ) -> Result<User, UserRepositoryError>;

    async fn update_password(
        &self,
        user_id: Uuid,
        new_password_hash: String,
    ) -> Result<(), UserRepositoryError>;
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    /// Unique violation on id_number or mobile_number.
    #[error("User already exists")]
    DuplicateIdentity,

    /// Unique violation on the generated uid; callers may regenerate and retry.
    #[error("Generated uid already taken")]
    DuplicateUid,

    #[error("User not found")]
    UserNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}
