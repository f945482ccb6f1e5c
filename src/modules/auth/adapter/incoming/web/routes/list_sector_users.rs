use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::use_cases::list_sector_users::ListSectorUsersError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use super::user_view::UserView;

#[derive(Serialize, ToSchema)]
pub struct SectorUsersResponse {
    /// Redacted accounts registered in the sector
    users: Vec<UserView>,
}

/// Users registered in a sector
///
/// Returns the redacted accounts of every citizen whose pincode resolved to
/// the given sector. Unknown sectors yield an empty list.
#[utoipa::path(
    get,
    path = "/api/users/sector/{sector}",
    tag = "users",
    params(
        ("sector" = String, Path, description = "Sector name", example = "Bengaluru")
    ),
    responses(
        (status = 200, description = "Users in the sector", body = inline(SuccessResponse<SectorUsersResponse>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/users/sector/{sector}")]
pub async fn list_sector_users_handler(
    _user: AuthenticatedUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let sector = path.into_inner();

    match data.list_sector_users_use_case.execute(&sector).await {
        Ok(users) => ApiResponse::success(SectorUsersResponse {
            users: users.into_iter().map(UserView::from).collect(),
        }),

        Err(ListSectorUsersError::QueryError(ref e)) => {
            error!(sector = %sector, error = %e, "Sector user listing failed");
            ApiResponse::internal_error()
        }
    }
}
