use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::domain::Language;
use crate::auth::application::use_cases::update_profile::UpdateProfileError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{put, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use super::user_view::UserView;

/// Profile update payload. Language is the only field citizens may change.
#[derive(Deserialize, ToSchema)]
pub struct UpdateProfileBody {
    /// Preferred UI language
    #[schema(example = "ta")]
    pub language: Language,
}

fn map_update_profile_error(err: UpdateProfileError, user_id: uuid::Uuid) -> HttpResponse {
    match &err {
        UpdateProfileError::UserNotFound => {
            warn!(user_id = %user_id, "Profile update for unknown user");
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        UpdateProfileError::RepositoryError(ref e) => {
            error!(user_id = %user_id, error = %e, "Profile update failed");
            ApiResponse::internal_error()
        }
    }
}

/// Update profile language
#[utoipa::path(
    put,
    path = "/api/users/profile",
    tag = "users",
    request_body = UpdateProfileBody,
    responses(
        (status = 200, description = "Updated profile", body = inline(SuccessResponse<UserView>)),
        (status = 400, description = "Unsupported language", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "User no longer exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/api/users/profile")]
pub async fn update_profile_handler(
    user: AuthenticatedUser,
    req: web::Json<UpdateProfileBody>,
    data: web::Data<AppState>,
) -> impl Responder {
    let language = req.into_inner().language;

    match data
        .update_profile_use_case
        .execute(user.user_id, language)
        .await
    {
        Ok(updated) => {
            info!(user_id = %updated.id, language = %updated.language, "Profile language updated");
            ApiResponse::success(UserView::from(updated))
        }

        Err(e) => map_update_profile_error(e, user.user_id),
    }
}
