use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::use_cases::login_user::{LoginError, LoginRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use super::user_view::UserView;

/// Login request from client
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginBody {
    /// 12-digit national ID number
    #[schema(example = "234567890123")]
    pub id_number: String,

    /// Password
    #[schema(example = "SecurePass123!")]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    /// JWT access token
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    token: String,

    /// Authenticated citizen account
    user: UserView,
}

fn map_login_error(err: LoginError) -> HttpResponse {
    match &err {
        LoginError::InvalidCredentials => {
            warn!("Login failed: invalid credentials");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid credentials")
        }

        LoginError::VerificationFailed(ref e) => {
            error!(error = %e, "Password verification failed");
            ApiResponse::internal_error()
        }

        LoginError::TokenGenerationFailed(ref e) => {
            error!(error = %e, "Token generation failed");
            ApiResponse::internal_error()
        }

        LoginError::QueryError(ref e) => {
            error!(error = %e, "Database query failed");
            ApiResponse::internal_error()
        }
    }
}

/// Citizen login
///
/// Authenticates with national ID number and password, returns a JWT access
/// token. Unknown accounts and wrong passwords yield the same error.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginBody,
    responses(
        (
            status = 200,
            description = "Login successful",
            body = inline(SuccessResponse<LoginResponse>),
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
            status = 401,
            description = "Invalid credentials",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INVALID_CREDENTIALS",
                    "message": "Invalid credentials"
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
#[post("/api/auth/login")]
pub async fn login_user_handler(
    req: web::Json<LoginRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let use_case = &data.login_user_use_case;
    let request = req.into_inner();

    info!("Login attempt");

    match use_case.execute(request).await {
        Ok(output) => {
            info!(user_id = %output.user.id, "User logged in");

            ApiResponse::success(LoginResponse {
                token: output.token,
                user: UserView::from(output.user),
            })
        }

        Err(e) => map_login_error(e),
    }
}
