use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Deserializer};

use crate::auth::application::domain::validators;
use crate::auth::application::ports::outgoing::{
    HashError, PasswordHasher, TokenError, TokenProvider, UserQuery, UserQueryError,
    UserQueryResult,
};

// ========================= Login Request =========================
/// Validated login request - can be deserialized directly from JSON
#[derive(Debug, Clone)]
pub struct LoginRequest {
    id_number: String,
    password: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginRequestError {
    #[error("ID number must be exactly 12 digits")]
    InvalidIdNumber,

    #[error("Password is required")]
    EmptyPassword,
}

impl LoginRequest {
    pub fn new(id_number: String, password: String) -> Result<Self, LoginRequestError> {
        let id_number = id_number.trim().to_string();
        if !validators::is_valid_id_number(&id_number) {
            return Err(LoginRequestError::InvalidIdNumber);
        }

        if password.is_empty() {
            return Err(LoginRequestError::EmptyPassword);
        }

        Ok(Self {
            id_number,
            password,
        })
    }

    pub fn id_number(&self) -> &str {
        &self.id_number
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

// Custom deserialization that validates during parsing
impl<'de> Deserialize<'de> for LoginRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct LoginRequestHelper {
            id_number: String,
            password: String,
        }

        let helper = LoginRequestHelper::deserialize(deserializer)?;
        LoginRequest::new(helper.id_number, helper.password).map_err(serde::de::Error::custom)
    }
}

// ====================== Login Error =============================
#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password verification failed: {0}")]
    VerificationFailed(#[from] HashError),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(#[from] TokenError),

    #[error("Query error: {0}")]
    QueryError(#[from] UserQueryError),
}

// ====================== Login Output ============================
#[derive(Debug, Clone)]
pub struct LoginOutput {
    pub token: String,
    pub user: UserQueryResult,
}

// ===================== Login User Use Case ======================
#[async_trait]
pub trait ILoginUserUseCase: Send + Sync {
    async fn execute(&self, request: LoginRequest) -> Result<LoginOutput, LoginError>;
}

pub struct LoginUserUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl<Q> LoginUserUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(
        query: Q,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            query,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q> ILoginUserUseCase for LoginUserUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, request: LoginRequest) -> Result<LoginOutput, LoginError> {
        // Unknown id numbers and wrong passwords are indistinguishable
        // to the caller.
        let user = self
            .query
            .find_by_id_number(request.id_number())
            .await?
            .ok_or(LoginError::InvalidCredentials)?;

        let is_valid = self
            .password_hasher
            .verify_password(request.password(), &user.password_hash)
            .await?;

        if !is_valid {
            return Err(LoginError::InvalidCredentials);
        }

        let token = self
            .token_provider
            .generate_access_token(user.id, user.is_verified)?;

        Ok(LoginOutput { token, user })
    }
}
