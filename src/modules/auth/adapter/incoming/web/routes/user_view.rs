use serde::Serialize;
use utoipa::ToSchema;

use crate::auth::application::domain::{Language, User};
use crate::auth::application::ports::outgoing::user_query::UserQueryResult;

/// Citizen account as returned by the API. Never carries the password hash.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    /// User ID (UUID)
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub id: String,

    /// Citizen UID derived from the national ID
    #[schema(example = "2345KX9A7B2C")]
    pub uid: String,

    /// 12-digit national ID number
    #[schema(example = "234567890123")]
    pub id_number: String,

    /// 10-digit mobile number
    #[schema(example = "9876543210")]
    pub mobile_number: String,

    /// 6-digit area pincode
    #[schema(example = "560001")]
    pub pincode: String,

    /// Administrative sector resolved from the pincode
    #[schema(example = "Bengaluru")]
    pub sector: String,

    /// Preferred UI language
    #[schema(example = "en")]
    pub language: Language,

    /// Whether the account has been verified
    #[schema(example = false)]
    pub is_verified: bool,

    /// Registration timestamp (RFC 3339)
    #[schema(example = "2025-08-10T12:00:00Z")]
    pub created_at: String,
}

impl From<User> for UserView {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            uid: user.uid,
            id_number: user.id_number,
            mobile_number: user.mobile_number,
            pincode: user.pincode,
            sector: user.sector,
            language: user.language,
            is_verified: user.is_verified,
            created_at: user.created_at.to_rfc3339(),
        }
    }
}

impl From<UserQueryResult> for UserView {
    fn from(user: UserQueryResult) -> Self {
        Self {
            id: user.id.to_string(),
            uid: user.uid,
            id_number: user.id_number,
            mobile_number: user.mobile_number,
            pincode: user.pincode,
            sector: user.sector,
            language: user.language,
            is_verified: user.is_verified,
            created_at: user.created_at.to_rfc3339(),
        }
    }
}
