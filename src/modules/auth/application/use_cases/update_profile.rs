use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::{Language, User};
use crate::auth::application::ports::outgoing::{UserRepository, UserRepositoryError};

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateProfileError {
    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(UserRepositoryError),
}

impl From<UserRepositoryError> for UpdateProfileError {
    fn from(e: UserRepositoryError) -> Self {
        match e {
            UserRepositoryError::UserNotFound => UpdateProfileError::UserNotFound,
            other => UpdateProfileError::RepositoryError(other),
        }
    }
}

/// Language is the only profile field users may change themselves.
#[async_trait]
pub trait IUpdateProfileUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid, language: Language)
        -> Result<User, UpdateProfileError>;
}

pub struct UpdateProfileUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    repository: R,
}

impl<R> UpdateProfileUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IUpdateProfileUseCase for UpdateProfileUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: Uuid,
        language: Language,
    ) -> Result<User, UpdateProfileError> {
        let user = self.repository.update_language(user_id, language).await?;
        Ok(user)
    }
}
