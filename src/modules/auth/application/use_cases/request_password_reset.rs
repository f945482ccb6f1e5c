use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Deserializer};
use sha2::{Digest, Sha256};

use crate::auth::application::domain::validators;
use crate::auth::application::ports::outgoing::{
    ResetCodeRecord, ResetCodeRepository, ResetCodeRepositoryError, UserQuery, UserQueryError,
};

pub const DEFAULT_RESET_CODE_TTL_MINUTES: i64 = 10;

/// Codes are stored hashed so a leaked table does not leak usable codes.
pub(crate) fn hash_reset_code(code: &str) -> String {
    format!("{:x}", Sha256::digest(code.as_bytes()))
}

// ===================== Forgot Password Request ====================
#[derive(Debug, Clone)]
pub struct ForgotPasswordRequest {
    id_number: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ForgotPasswordRequestError {
    #[error("ID number must be exactly 12 digits")]
    InvalidIdNumber,
}

impl ForgotPasswordRequest {
    pub fn new(id_number: String) -> Result<Self, ForgotPasswordRequestError> {
        let id_number = id_number.trim().to_string();
        if !validators::is_valid_id_number(&id_number) {
            return Err(ForgotPasswordRequestError::InvalidIdNumber);
        }
        Ok(Self { id_number })
    }

    pub fn id_number(&self) -> &str {
        &self.id_number
    }
}

impl<'de> Deserialize<'de> for ForgotPasswordRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct ForgotPasswordRequestHelper {
            id_number: String,
        }

        let helper = ForgotPasswordRequestHelper::deserialize(deserializer)?;
        ForgotPasswordRequest::new(helper.id_number).map_err(serde::de::Error::custom)
    }
}

// ========================== Error / Output ========================
#[derive(Debug, Clone, thiserror::Error)]
pub enum RequestPasswordResetError {
    #[error("User not found")]
    UserNotFound,

    #[error("Query error: {0}")]
    QueryError(#[from] UserQueryError),

    #[error("Repository error: {0}")]
    RepositoryError(#[from] ResetCodeRepositoryError),
}

/// The code is returned to the caller because no SMS gateway is wired
/// up. A delivery channel would replace this field, not add to it.
#[derive(Debug, Clone)]
pub struct PasswordResetChallenge {
    pub reset_code: String,
    pub expires_at: DateTime<Utc>,
}

// ================ Request Password Reset Use Case =================
#[async_trait]
pub trait IRequestPasswordResetUseCase: Send + Sync {
    async fn execute(
        &self,
        request: ForgotPasswordRequest,
    ) -> Result<PasswordResetChallenge, RequestPasswordResetError>;
}

pub struct RequestPasswordResetUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: ResetCodeRepository + Send + Sync,
{
    query: Q,
    repository: R,
    code_ttl: Duration,
}

impl<Q, R> RequestPasswordResetUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: ResetCodeRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R, ttl_minutes: i64) -> Self {
        Self {
            query,
            repository,
            code_ttl: Duration::minutes(ttl_minutes),
        }
    }
}

#[async_trait]
impl<Q, R> IRequestPasswordResetUseCase for RequestPasswordResetUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: ResetCodeRepository + Send + Sync,
{
    async fn execute(
        &self,
        request: ForgotPasswordRequest,
    ) -> Result<PasswordResetChallenge, RequestPasswordResetError> {
        let user = self
            .query
            .find_by_id_number(request.id_number())
            .await?
            .ok_or(RequestPasswordResetError::UserNotFound)?;

        let reset_code = generate_reset_code();
        let expires_at = Utc::now() + self.code_ttl;

        // Overwrites any earlier code for this user.
        self.repository
            .save_code(ResetCodeRecord {
                user_id: user.id,
                code_hash: hash_reset_code(&reset_code),
                expires_at,
            })
            .await?;

        Ok(PasswordResetChallenge {
            reset_code,
            expires_at,
        })
    }
}

fn generate_reset_code() -> String {
    let code: u32 = rand::thread_rng().gen_range(100000..=999999);
    code.to_string()
}
