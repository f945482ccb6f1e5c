use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::use_cases::fetch_profile::FetchProfileError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, HttpResponse, Responder};
use tracing::{error, warn};

use super::user_view::UserView;

fn map_fetch_profile_error(err: FetchProfileError, user_id: uuid::Uuid) -> HttpResponse {
    match &err {
        FetchProfileError::UserNotFound => {
            // Token subject no longer present, e.g. row removed out of band.
            warn!(user_id = %user_id, "Profile fetch for unknown user");
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        FetchProfileError::QueryError(ref e) => {
            error!(user_id = %user_id, error = %e, "Profile fetch failed");
            ApiResponse::internal_error()
        }
    }
}

async fn fetch_and_render(user: AuthenticatedUser, data: web::Data<AppState>) -> HttpResponse {
    match data.fetch_profile_use_case.execute(user.user_id).await {
        Ok(profile) => ApiResponse::success(UserView::from(profile)),
        Err(e) => map_fetch_profile_error(e, user.user_id),
    }
}

/// Current authenticated user
///
/// Returns the account behind the bearer token.
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = "auth",
    responses(
        (status = 200, description = "Current user", body = inline(SuccessResponse<UserView>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "User no longer exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/auth/me")]
pub async fn current_user_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    fetch_and_render(user, data).await
}

/// Citizen profile
///
/// Same payload as `/api/auth/me`, kept as a separate path for clients that
/// treat profile and session concerns separately.
#[utoipa::path(
    get,
    path = "/api/users/profile",
    tag = "users",
    responses(
        (status = 200, description = "Profile of the caller", body = inline(SuccessResponse<UserView>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "User no longer exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/users/profile")]
pub async fn fetch_profile_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    fetch_and_render(user, data).await
}
