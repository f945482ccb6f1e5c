pub mod password_hasher;
pub mod reset_code_repository;
pub mod token_provider;
pub mod user_query;
pub mod user_repository;

pub use password_hasher::{HashError, PasswordHasher};
pub use reset_code_repository::{ResetCodeRecord, ResetCodeRepository, ResetCodeRepositoryError};
pub use token_provider::{TokenClaims, TokenError, TokenProvider};
pub use user_query::{UserQuery, UserQueryError, UserQueryResult};
pub use user_repository::{UserRepository, UserRepositoryError};
