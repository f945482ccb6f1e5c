use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::use_cases::request_password_reset::{
    ForgotPasswordRequest, RequestPasswordResetError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

/// Forgot-password request from client
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ForgotPasswordBody {
    /// 12-digit national ID number
    #[schema(example = "234567890123")]
    pub id_number: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ForgotPasswordResponse {
    #[schema(example = "Reset code generated successfully")]
    message: String,

    /// 6-digit reset code. Returned in the body because no SMS gateway is
    /// wired up.
    #[schema(example = "493027")]
    reset_code: String,

    /// Expiry of the code (RFC 3339)
    #[schema(example = "2025-08-10T12:10:00Z")]
    expires_at: String,
}

fn map_forgot_password_error(err: RequestPasswordResetError) -> HttpResponse {
    match &err {
        RequestPasswordResetError::UserNotFound => {
            warn!("Reset code requested for unknown id number");
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        other => {
            error!(error = %other, "Reset code request failed");
            ApiResponse::internal_error()
        }
    }
}

/// Request a password reset code
///
/// Generates a short-lived 6-digit code for the account. Only the SHA-256 of
/// the code is stored server side.
#[utoipa::path(
    post,
    path = "/api/auth/forgot-password",
    tag = "auth",
    request_body = ForgotPasswordBody,
    responses(
        (
            status = 200,
            description = "Reset code generated",
            body = inline(SuccessResponse<ForgotPasswordResponse>),
            example = json!({
                "success": true,
                "data": {
                    "message": "Reset code generated successfully",
                    "resetCode": "493027",
                    "expiresAt": "2025-08-10T12:10:00+00:00"
                }
            })
        ),
        (
            status = 400,
            description = "Validation error",
            body = ErrorResponse
        ),
        (
            status = 404,
            description = "No account with that id number",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "USER_NOT_FOUND",
                    "message": "User not found"
                }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/forgot-password")]
pub async fn request_password_reset_handler(
    req: web::Json<ForgotPasswordRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let request = req.into_inner();

    match data.request_password_reset_use_case.execute(request).await {
        Ok(challenge) => {
            info!(expires_at = %challenge.expires_at, "Reset code issued");

            ApiResponse::success(ForgotPasswordResponse {
                message: "Reset code generated successfully".to_string(),
                reset_code: challenge.reset_code,
                expires_at: challenge.expires_at.to_rfc3339(),
            })
        }

        Err(e) => map_forgot_password_error(e),
    }
}
