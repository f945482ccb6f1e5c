use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::complaint::application::use_cases::delete_complaint_image::DeleteComplaintImageError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{delete, web, Responder};
use serde::Serialize;
use tracing::{error, warn};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, ToSchema)]
pub struct ImageDeletedResponse {
    #[schema(example = "Image deleted successfully")]
    message: String,
}

fn map_delete_complaint_image_error(
    err: DeleteComplaintImageError,
    filename: &str,
) -> actix_web::HttpResponse {
    match &err {
        DeleteComplaintImageError::ComplaintNotFound => {
            warn!(filename, "Image delete on unknown complaint");
            ApiResponse::not_found("COMPLAINT_NOT_FOUND", "Complaint not found")
        }

        DeleteComplaintImageError::ImageNotFound => {
            warn!(filename, "Image delete on unattached filename");
            ApiResponse::not_found("IMAGE_NOT_FOUND", "Image not found in complaint")
        }

        DeleteComplaintImageError::QueryError(e) => {
            error!(filename, error = %e, "Image delete lookup failed");
            ApiResponse::internal_error()
        }

        DeleteComplaintImageError::StoreError(e) => {
            error!(filename, error = %e, "Image file removal failed");
            ApiResponse::internal_error()
        }

        DeleteComplaintImageError::RepositoryError(e) => {
            error!(filename, error = %e, "Image metadata removal failed");
            ApiResponse::internal_error()
        }
    }
}

/// Detach an image
///
/// Removes one attachment from a complaint the caller owns, file and
/// metadata both.
#[utoipa::path(
    delete,
    path = "/api/complaints/{complaintId}/images/{filename}",
    tag = "complaints",
    params(
        ("complaintId" = Uuid, Path, description = "Complaint id"),
        ("filename" = String, Path, description = "Generated attachment filename"),
    ),
    responses(
        (status = 200, description = "Image removed", body = inline(SuccessResponse<ImageDeletedResponse>),
            example = json!({
                "success": true,
                "data": {"message": "Image deleted successfully"}
            })),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Unknown complaint or unattached image", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[delete("/api/complaints/{complaint_id}/images/{filename}")]
pub async fn delete_complaint_image_handler(
    user: AuthenticatedUser,
    path: web::Path<(String, String)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (complaint_id, filename) = path.into_inner();

    let Ok(complaint_id) = Uuid::parse_str(&complaint_id) else {
        return ApiResponse::not_found("COMPLAINT_NOT_FOUND", "Complaint not found");
    };

    match data
        .delete_complaint_image_use_case
        .execute(user.user_id, complaint_id, &filename)
        .await
    {
        Ok(()) => ApiResponse::success(ImageDeletedResponse {
            message: "Image deleted successfully".to_string(),
        }),
        Err(e) => map_delete_complaint_image_error(e, &filename),
    }
}
