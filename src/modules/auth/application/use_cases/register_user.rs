use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use rand::Rng;
use serde::{Deserialize, Deserializer};
use tracing::warn;
use uuid::Uuid;

use crate::auth::application::domain::validators;
use crate::auth::application::domain::{Language, User};
use crate::auth::application::ports::outgoing::{
    HashError, PasswordHasher, TokenError, TokenProvider, UserQuery, UserQueryError,
    UserRepository, UserRepositoryError,
};
use crate::directory::application::ports::outgoing::{DirectoryQuery, DirectoryQueryError};

/// Attempts at generating a unique uid before giving up.
const MAX_UID_ATTEMPTS: usize = 3;

// ========================= Register Request =========================
/// Validated registration request - can be deserialized directly from JSON
#[derive(Debug, Clone)]
pub struct RegisterRequest {
    id_number: String,
    mobile_number: String,
    password: String,
    pincode: String,
    language: Language,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum RegisterRequestError {
    #[error("ID number must be exactly 12 digits")]
    InvalidIdNumber,

    #[error("Mobile number must be exactly 10 digits")]
    InvalidMobileNumber,

    #[error("Password must be at least 8 characters")]
    PasswordTooShort,

    #[error("Password must be at most 128 characters")]
    PasswordTooLong,

    #[error("Pincode must be 6 digits")]
    InvalidPincode,

    #[error("Unsupported language: {0}")]
    InvalidLanguage(String),
}

impl RegisterRequest {
    pub fn new(
        id_number: String,
        mobile_number: String,
        password: String,
        pincode: String,
        language: Option<String>,
    ) -> Result<Self, RegisterRequestError> {
        let id_number = id_number.trim().to_string();
        if !validators::is_valid_id_number(&id_number) {
            return Err(RegisterRequestError::InvalidIdNumber);
        }

        let mobile_number = mobile_number.trim().to_string();
        if !validators::is_valid_mobile_number(&mobile_number) {
            return Err(RegisterRequestError::InvalidMobileNumber);
        }

        if password.chars().count() < 8 {
            return Err(RegisterRequestError::PasswordTooShort);
        }
        if password.chars().count() > 128 {
            return Err(RegisterRequestError::PasswordTooLong);
        }

        let pincode = pincode.trim().to_string();
        if !validators::is_valid_pincode(&pincode) {
            return Err(RegisterRequestError::InvalidPincode);
        }

        let language = match language.as_deref().map(str::trim) {
            None | Some("") => Language::default(),
            Some(code) => Language::from_str(code)
                .map_err(|e| RegisterRequestError::InvalidLanguage(e.0))?,
        };

        Ok(Self {
            id_number,
            mobile_number,
            password,
            pincode,
            language,
        })
    }

    pub fn id_number(&self) -> &str {
        &self.id_number
    }

    pub fn mobile_number(&self) -> &str {
        &self.mobile_number
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn pincode(&self) -> &str {
        &self.pincode
    }

    pub fn language(&self) -> Language {
        self.language
    }
}

// Custom deserialization that validates during parsing
impl<'de> Deserialize<'de> for RegisterRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct RegisterRequestHelper {
            id_number: String,
            mobile_number: String,
            password: String,
            pincode: String,
            language: Option<String>,
        }

        let helper = RegisterRequestHelper::deserialize(deserializer)?;
        RegisterRequest::new(
            helper.id_number,
            helper.mobile_number,
            helper.password,
            helper.pincode,
            helper.language,
        )
        .map_err(serde::de::Error::custom)
    }
}

// ====================== Register Error =============================
#[derive(Debug, Clone, thiserror::Error)]
pub enum RegisterError {
    #[error("User already exists with this ID or mobile number")]
    DuplicateIdentity,

    #[error("Invalid pincode. Please check your area pincode.")]
    UnknownPincode,

    #[error("Could not allocate a unique uid")]
    UidGenerationFailed,

    #[error("Password hashing failed: {0}")]
    HashingFailed(#[from] HashError),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(#[from] TokenError),

    #[error("Query error: {0}")]
    QueryError(#[from] UserQueryError),

    #[error("Directory error: {0}")]
    DirectoryError(#[from] DirectoryQueryError),

    #[error("Repository error: {0}")]
    RepositoryError(UserRepositoryError),
}

// ====================== Register Output ============================
#[derive(Debug, Clone)]
pub struct RegisterOutput {
    pub token: String,
    pub user: User,
}

// ==================== Register User Use Case =======================
#[async_trait]
pub trait IRegisterUserUseCase: Send + Sync {
    async fn execute(&self, request: RegisterRequest) -> Result<RegisterOutput, RegisterError>;
}

pub struct RegisterUserUseCase<Q, R, D>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
    D: DirectoryQuery + Send + Sync,
{
    query: Q,
    repository: R,
    directory: D,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl<Q, R, D> RegisterUserUseCase<Q, R, D>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
    D: DirectoryQuery + Send + Sync,
{
    pub fn new(
        query: Q,
        repository: R,
        directory: D,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            query,
            repository,
            directory,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q, R, D> IRegisterUserUseCase for RegisterUserUseCase<Q, R, D>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
    D: DirectoryQuery + Send + Sync,
{
    async fn execute(&self, request: RegisterRequest) -> Result<RegisterOutput, RegisterError> {
        if self
            .query
            .find_by_id_number(request.id_number())
            .await?
            .is_some()
        {
            return Err(RegisterError::DuplicateIdentity);
        }

        if self
            .query
            .find_by_mobile_number(request.mobile_number())
            .await?
            .is_some()
        {
            return Err(RegisterError::DuplicateIdentity);
        }

        let mapping = self
            .directory
            .find_by_code(request.pincode())
            .await?
            .ok_or(RegisterError::UnknownPincode)?;

        let password_hash = self
            .password_hasher
            .hash_password(request.password())
            .await?;

        let mut created = None;
        for attempt in 1..=MAX_UID_ATTEMPTS {
            let now = chrono::Utc::now();
            let user = User {
                id: Uuid::new_v4(),
                id_number: request.id_number().to_string(),
                mobile_number: request.mobile_number().to_string(),
                password_hash: password_hash.clone(),
                uid: generate_uid(request.id_number()),
                pincode: request.pincode().to_string(),
                sector: mapping.sector.clone(),
                language: request.language(),
                is_verified: false,
                created_at: now,
                updated_at: now,
            };

            match self.repository.create_user(user).await {
                Ok(user) => {
                    created = Some(user);
                    break;
                }
                Err(UserRepositoryError::DuplicateUid) => {
                    warn!(attempt, "uid collision during registration, regenerating");
                    continue;
                }
                // Lost a race against a concurrent registration with the
                // same identity.
                Err(UserRepositoryError::DuplicateIdentity) => {
                    return Err(RegisterError::DuplicateIdentity);
                }
                Err(e) => return Err(RegisterError::RepositoryError(e)),
            }
        }

        let user = created.ok_or(RegisterError::UidGenerationFailed)?;

        let token = self
            .token_provider
            .generate_access_token(user.id, user.is_verified)?;

        Ok(RegisterOutput { token, user })
    }
}

/// First 4 digits of the ID number followed by 8 random uppercase
/// alphanumerics.
fn generate_uid(id_number: &str) -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
    let mut rng = rand::thread_rng();
    let random: String = (0..8)
        .map(|_| CHARSET[rng.gen_range(0..CHARSET.len())] as char)
        .collect();
    format!("{}{}", &id_number[..4], random)
}
