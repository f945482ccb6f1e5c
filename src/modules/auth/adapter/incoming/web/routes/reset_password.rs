use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::use_cases::reset_password::{
    ResetPasswordError, ResetPasswordRequest,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

/// Reset-password request from client
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordBody {
    /// 12-digit national ID number
    #[schema(example = "234567890123")]
    pub id_number: String,

    /// 6-digit reset code from the forgot-password step
    #[schema(example = "493027")]
    pub reset_code: String,

    /// New password (8 to 128 characters)
    #[schema(example = "NewSecurePass456!")]
    pub new_password: String,
}

#[derive(Serialize, ToSchema)]
pub struct ResetPasswordResponse {
    #[schema(example = "Password reset successfully")]
    message: String,
}

fn map_reset_password_error(err: ResetPasswordError) -> HttpResponse {
    match &err {
        ResetPasswordError::UserNotFound => {
            warn!("Password reset for unknown id number");
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        ResetPasswordError::InvalidResetCode => {
            warn!("Password reset with invalid or expired code");
            ApiResponse::bad_request("INVALID_RESET_CODE", "Invalid or expired reset code")
        }

        other => {
            error!(error = %other, "Password reset failed");
            ApiResponse::internal_error()
        }
    }
}

/// Reset password with a code
///
/// Verifies the 6-digit code against its stored hash and expiry, then
/// replaces the account password. Codes are single use.
#[utoipa::path(
    post,
    path = "/api/auth/reset-password",
    tag = "auth",
    request_body = ResetPasswordBody,
    responses(
        (
            status = 200,
            description = "Password replaced",
            body = inline(SuccessResponse<ResetPasswordResponse>),
            example = json!({
                "success": true,
                "data": { "message": "Password reset successfully" }
            })
        ),
        (
            status = 400,
            description = "Validation error or bad code",
            body = ErrorResponse,
            examples(
                ("Invalid code" = (value = json!({
                    "success": false,
                    "error": {
                        "code": "INVALID_RESET_CODE",
                        "message": "Invalid or expired reset code"
                    }
                }))),
                ("Short password" = (value = json!({
                    "success": false,
                    "error": {
                        "code": "VALIDATION_ERROR",
                        "message": "Password must be at least 8 characters"
                    }
                })))
            )
        ),
        (
            status = 404,
            description = "No account with that id number",
            body = ErrorResponse
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/reset-password")]
pub async fn reset_password_handler(
    req: web::Json<ResetPasswordRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let request = req.into_inner();

    match data.reset_password_use_case.execute(request).await {
        Ok(()) => {
            info!("Password reset completed");

            ApiResponse::success(ResetPasswordResponse {
                message: "Password reset successfully".to_string(),
            })
        }

        Err(e) => map_reset_password_error(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::ports::outgoing::UserQueryError;
    use crate::auth::application::use_cases::reset_password::IResetPasswordUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{test, App};
    use async_trait::async_trait;

    fn valid_reset_body() -> serde_json::Value {
        serde_json::json!({
            "idNumber": "234567890123",
            "resetCode": "493027",
            "newPassword": "NewSecurePass456!"
        })
    }

    // ==========================================================
    // Mocks
    // ==========================================================

    #[derive(Clone)]
    struct MockResetPasswordSuccess;

    #[async_trait]
    impl IResetPasswordUseCase for MockResetPasswordSuccess {
        async fn execute(&self, _request: ResetPasswordRequest) -> Result<(), ResetPasswordError> {
            Ok(())
        }
    }

    #[derive(Clone)]
    struct MockResetPasswordInvalidCode;

    #[async_trait]
    impl IResetPasswordUseCase for MockResetPasswordInvalidCode {
        async fn execute(&self, _request: ResetPasswordRequest) -> Result<(), ResetPasswordError> {
            Err(ResetPasswordError::InvalidResetCode)
        }
    }

    #[derive(Clone)]
    struct MockResetPasswordUserNotFound;

    #[async_trait]
    impl IResetPasswordUseCase for MockResetPasswordUserNotFound {
        async fn execute(&self, _request: ResetPasswordRequest) -> Result<(), ResetPasswordError> {
            Err(ResetPasswordError::UserNotFound)
        }
    }

    #[derive(Clone)]
    struct MockResetPasswordQueryError;

    #[async_trait]
    impl IResetPasswordUseCase for MockResetPasswordQueryError {
        async fn execute(&self, _request: ResetPasswordRequest) -> Result<(), ResetPasswordError> {
            Err(ResetPasswordError::QueryError(
                UserQueryError::DatabaseError("connection refused".to_string()),
            ))
        }
    }

    // ==========================================================
    // Tests
    // ==========================================================

    #[actix_web::test]
    async fn test_reset_password_success() {
        let app_state = TestAppStateBuilder::default()
            .with_reset_password(MockResetPasswordSuccess)
            .build();

        let app = test::init_service(
            App::new().app_data(app_state).service(reset_password_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/reset-password")
            .set_json(&valid_reset_body())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["message"], "Password reset successfully");
    }

    #[actix_web::test]
    async fn test_reset_password_invalid_code() {
        let app_state = TestAppStateBuilder::default()
            .with_reset_password(MockResetPasswordInvalidCode)
            .build();

        let app = test::init_service(
            App::new().app_data(app_state).service(reset_password_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/reset-password")
            .set_json(&valid_reset_body())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "INVALID_RESET_CODE");
        assert_eq!(body["error"]["message"], "Invalid or expired reset code");
    }

    #[actix_web::test]
    async fn test_reset_password_unknown_user() {
        let app_state = TestAppStateBuilder::default()
            .with_reset_password(MockResetPasswordUserNotFound)
            .build();

        let app = test::init_service(
            App::new().app_data(app_state).service(reset_password_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/reset-password")
            .set_json(&valid_reset_body())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "USER_NOT_FOUND");
    }

    #[actix_web::test]
    async fn test_reset_password_query_error_is_internal_error() {
        let app_state = TestAppStateBuilder::default()
            .with_reset_password(MockResetPasswordQueryError)
            .build();

        let app = test::init_service(
            App::new().app_data(app_state).service(reset_password_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/reset-password")
            .set_json(&valid_reset_body())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 500);
    }

    #[actix_web::test]
    async fn test_reset_password_rejects_invalid_payloads() {
        let app_state = TestAppStateBuilder::default()
            .with_reset_password(MockResetPasswordSuccess)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(crate::shared::api::custom_json_config())
                .service(reset_password_handler),
        )
        .await;

        let cases = vec![
            (
                serde_json::json!({
                    "idNumber": "123",
                    "resetCode": "493027",
                    "newPassword": "NewSecurePass456!"
                }),
                "ID number must be exactly 12 digits",
            ),
            (
                serde_json::json!({
                    "idNumber": "234567890123",
                    "resetCode": "49",
                    "newPassword": "NewSecurePass456!"
                }),
                "Reset code must be 6 digits",
            ),
            (
                serde_json::json!({
                    "idNumber": "234567890123",
                    "resetCode": "493027",
                    "newPassword": "short"
                }),
                "Password must be at least 8 characters",
            ),
        ];

        for (payload, expected_message) in cases {
            let req = test::TestRequest::post()
                .uri("/api/auth/reset-password")
                .set_json(&payload)
                .to_request();

            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), 400, "payload: {payload}");

            let body: serde_json::Value = test::read_body_json(resp).await;
            assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
            let message = body["error"]["message"].as_str().unwrap_or_default();
            assert!(
                message.contains(expected_message),
                "expected '{expected_message}' in '{message}'"
            );
        }
    }
}
