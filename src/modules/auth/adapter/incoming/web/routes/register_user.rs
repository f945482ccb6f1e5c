use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::use_cases::register_user::{RegisterError, RegisterRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use super::user_view::UserView;

/// Request body for citizen registration. Validation happens while the
/// payload deserializes into [`RegisterRequest`].
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserBody {
    /// 12-digit national ID number
    #[schema(example = "234567890123")]
    pub id_number: String,

    /// 10-digit mobile number
    #[schema(example = "9876543210")]
    pub mobile_number: String,

    /// Password (8 to 128 characters)
    #[schema(example = "SecurePass123!")]
    pub password: String,

    /// 6-digit area pincode, must exist in the directory
    #[schema(example = "560001")]
    pub pincode: String,

    /// Preferred UI language, defaults to "en"
    #[schema(example = "kn")]
    pub language: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct RegisterResponse {
    /// JWT access token for the new account
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    token: String,

    /// Created citizen account
    user: UserView,
}

fn map_register_error(err: RegisterError) -> HttpResponse {
    match &err {
        RegisterError::DuplicateIdentity => {
            warn!("Registration rejected: duplicate id number or mobile number");
            ApiResponse::conflict(
                "DUPLICATE_IDENTITY",
                "User already exists with this ID or mobile number",
            )
        }

        RegisterError::UnknownPincode => {
            warn!("Registration rejected: pincode not in directory");
            ApiResponse::bad_request(
                "INVALID_PINCODE",
                "Invalid pincode. Please check your area pincode.",
            )
        }

        other => {
            error!(error = %other, "Registration failed");
            ApiResponse::internal_error()
        }
    }
}

/// Register a new citizen account
///
/// Creates an account keyed to the national ID number, resolves the sector
/// from the pincode directory and returns a session token alongside the
/// created user.
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "auth",
    request_body = RegisterUserBody,
    responses(
        (
            status = 201,
            description = "Account created",
            body = inline(SuccessResponse<RegisterResponse>),
            example = json!({
                "success": true,
                "data": {
                    "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
                    "user": {
                        "id": "123e4567-e89b-12d3-a456-426614174000",
                        "uid": "2345KX9A7B2C",
                        "idNumber": "234567890123",
                        "mobileNumber": "9876543210",
                        "pincode": "560001",
                        "sector": "Bengaluru",
                        "language": "en",
                        "isVerified": false,
                        "createdAt": "2025-08-10T12:00:00+00:00"
                    }
                }
            })
        ),
        (
            status = 400,
            description = "Validation error",
            body = ErrorResponse,
            examples(
                ("Invalid id number" = (value = json!({
                    "success": false,
                    "error": {
                        "code": "VALIDATION_ERROR",
                        "message": "ID number must be exactly 12 digits"
                    }
                }))),
                ("Unknown pincode" = (value = json!({
                    "success": false,
                    "error": {
                        "code": "INVALID_PINCODE",
                        "message": "Invalid pincode. Please check your area pincode."
                    }
                })))
            )
        ),
        (
            status = 409,
            description = "ID number or mobile number already registered",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "DUPLICATE_IDENTITY",
                    "message": "User already exists with this ID or mobile number"
                }
            })
        ),
        (
            status = 500,
            description = "Internal server error",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INTERNAL_SERVER_ERROR",
                    "message": "An unexpected error occurred"
                }
            })
        ),
    )
)]
#[post("/api/auth/register")]
pub async fn register_user_handler(
    req: web::Json<RegisterRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let use_case = &data.register_user_use_case;
    let request = req.into_inner();

    info!(pincode = %request.pincode(), "Registration attempt");

    match use_case.execute(request).await {
        Ok(output) => {
            info!(
                user_id = %output.user.id,
                uid = %output.user.uid,
                sector = %output.user.sector,
                "User registered"
            );

            ApiResponse::created(RegisterResponse {
                token: output.token,
                user: UserView::from(output.user),
            })
        }

        Err(e) => map_register_error(e),
    }
}
