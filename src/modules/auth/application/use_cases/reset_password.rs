use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Deserializer};
use tracing::warn;

use crate::auth::application::domain::validators;
use crate::auth::application::ports::outgoing::{
    HashError, PasswordHasher, ResetCodeRepository, ResetCodeRepositoryError, UserQuery,
    UserQueryError, UserRepository, UserRepositoryError,
};
use crate::auth::application::use_cases::request_password_reset::hash_reset_code;

// ====================== Reset Password Request ====================
#[derive(Debug, Clone)]
pub struct ResetPasswordRequest {
    id_number: String,
    reset_code: String,
    new_password: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ResetPasswordRequestError {
    #[error("ID number must be exactly 12 digits")]
    InvalidIdNumber,

    #[error("Reset code must be 6 digits")]
    InvalidResetCodeFormat,

    #[error("Password must be at least 8 characters")]
    PasswordTooShort,

    #[error("Password must be at most 128 characters")]
    PasswordTooLong,
}

impl ResetPasswordRequest {
    pub fn new(
        id_number: String,
        reset_code: String,
        new_password: String,
    ) -> Result<Self, ResetPasswordRequestError> {
        let id_number = id_number.trim().to_string();
        if !validators::is_valid_id_number(&id_number) {
            return Err(ResetPasswordRequestError::InvalidIdNumber);
        }

        let reset_code = reset_code.trim().to_string();
        if !validators::is_valid_reset_code(&reset_code) {
            return Err(ResetPasswordRequestError::InvalidResetCodeFormat);
        }

        if new_password.chars().count() < 8 {
            return Err(ResetPasswordRequestError::PasswordTooShort);
        }
        if new_password.chars().count() > 128 {
            return Err(ResetPasswordRequestError::PasswordTooLong);
        }

        Ok(Self {
            id_number,
            reset_code,
            new_password,
        })
    }

    pub fn id_number(&self) -> &str {
        &self.id_number
    }

    pub fn reset_code(&self) -> &str {
        &self.reset_code
    }

    pub fn new_password(&self) -> &str {
        &self.new_password
    }
}

impl<'de> Deserialize<'de> for ResetPasswordRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct ResetPasswordRequestHelper {
            id_number: String,
            reset_code: String,
            new_password: String,
        }

        let helper = ResetPasswordRequestHelper::deserialize(deserializer)?;
        ResetPasswordRequest::new(helper.id_number, helper.reset_code, helper.new_password)
            .map_err(serde::de::Error::custom)
    }
}

// ========================== Reset Error ===========================
#[derive(Debug, Clone, thiserror::Error)]
pub enum ResetPasswordError {
    #[error("User not found")]
    UserNotFound,

    #[error("Invalid or expired reset code")]
    InvalidResetCode,

    #[error("Password hashing failed: {0}")]
    HashingFailed(#[from] HashError),

    #[error("Query error: {0}")]
    QueryError(#[from] UserQueryError),

    #[error("Repository error: {0}")]
    RepositoryError(UserRepositoryError),

    #[error("Reset code store error: {0}")]
    CodeStoreError(#[from] ResetCodeRepositoryError),
}

// ===================== Reset Password Use Case ====================
#[async_trait]
pub trait IResetPasswordUseCase: Send + Sync {
    async fn execute(&self, request: ResetPasswordRequest) -> Result<(), ResetPasswordError>;
}

pub struct ResetPasswordUseCase<Q, R, C>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
    C: ResetCodeRepository + Send + Sync,
{
    query: Q,
    repository: R,
    reset_codes: C,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl<Q, R, C> ResetPasswordUseCase<Q, R, C>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
    C: ResetCodeRepository + Send + Sync,
{
    pub fn new(
        query: Q,
        repository: R,
        reset_codes: C,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    ) -> Self {
        Self {
            query,
            repository,
            reset_codes,
            password_hasher,
        }
    }
}

#[async_trait]
impl<Q, R, C> IResetPasswordUseCase for ResetPasswordUseCase<Q, R, C>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
    C: ResetCodeRepository + Send + Sync,
{
    async fn execute(&self, request: ResetPasswordRequest) -> Result<(), ResetPasswordError> {
        let user = self
            .query
            .find_by_id_number(request.id_number())
            .await?
            .ok_or(ResetPasswordError::UserNotFound)?;

        let record = self
            .reset_codes
            .find_by_user(user.id)
            .await?
            .ok_or(ResetPasswordError::InvalidResetCode)?;

        if record.expires_at < Utc::now() {
            self.reset_codes.delete_for_user(user.id).await?;
            return Err(ResetPasswordError::InvalidResetCode);
        }

        // A mismatch leaves the stored code in place so the legitimate
        // holder can still use it before it expires.
        if hash_reset_code(request.reset_code()) != record.code_hash {
            return Err(ResetPasswordError::InvalidResetCode);
        }

        let new_hash = self
            .password_hasher
            .hash_password(request.new_password())
            .await?;

        self.repository
            .update_password(user.id, new_hash)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => ResetPasswordError::UserNotFound,
                other => ResetPasswordError::RepositoryError(other),
            })?;

        // Codes are single use. A failure here leaves a spent code
        // behind until its expiry, which is tolerable.
        if let Err(e) = self.reset_codes.delete_for_user(user.id).await {
            warn!(error = %e, "failed to discard spent reset code");
        }

        Ok(())
    }
}
