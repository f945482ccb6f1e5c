use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::complaint::application::use_cases::get_complaint::GetComplaintError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::{error, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use super::complaint_view::ComplaintView;

#[derive(Serialize, ToSchema)]
pub struct ComplaintResponse {
    complaint: ComplaintView,
}

fn map_get_complaint_error(err: GetComplaintError, complaint_id: Uuid) -> actix_web::HttpResponse {
    match &err {
        GetComplaintError::NotFound => {
            warn!(complaint_id = %complaint_id, "Complaint lookup missed");
            ApiResponse::not_found("COMPLAINT_NOT_FOUND", "Complaint not found")
        }

        GetComplaintError::QueryError(e) => {
            error!(complaint_id = %complaint_id, error = %e, "Complaint lookup failed");
            ApiResponse::internal_error()
        }
    }
}

/// Fetch one complaint
///
/// Returns a complaint owned by the caller, attachments included. Someone
/// else's complaint is indistinguishable from a missing one.
#[utoipa::path(
    get,
    path = "/api/complaints/{id}",
    tag = "complaints",
    params(
        ("id" = Uuid, Path, description = "Complaint id")
    ),
    responses(
        (status = 200, description = "The complaint", body = inline(SuccessResponse<ComplaintResponse>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Unknown or foreign complaint", body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {"code": "COMPLAINT_NOT_FOUND", "message": "Complaint not found"}
            })),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[get("/api/complaints/{id}")]
pub async fn get_complaint_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    // Malformed ids cannot match anything, so they read as missing.
    let Ok(complaint_id) = Uuid::parse_str(&path.into_inner()) else {
        return ApiResponse::not_found("COMPLAINT_NOT_FOUND", "Complaint not found");
    };

    match data
        .get_complaint_use_case
        .execute(user.user_id, complaint_id)
        .await
    {
        Ok(complaint) => ApiResponse::success(ComplaintResponse {
            complaint: ComplaintView::from(complaint),
        }),
        Err(e) => map_get_complaint_error(e, complaint_id),
    }
}
