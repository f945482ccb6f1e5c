use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::complaint::application::use_cases::get_complaint_image::GetComplaintImageError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_files::NamedFile;
use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{get, web, HttpRequest, HttpResponse, Responder};
use tracing::{error, warn};

fn map_get_complaint_image_error(
    err: GetComplaintImageError,
    filename: &str,
) -> HttpResponse {
    match &err {
        GetComplaintImageError::NotFound => {
            warn!(filename, "Attachment lookup missed");
            ApiResponse::not_found("IMAGE_NOT_FOUND", "Image not found")
        }

        GetComplaintImageError::QueryError(e) => {
            error!(filename, error = %e, "Attachment lookup failed");
            ApiResponse::internal_error()
        }

        GetComplaintImageError::StoreError(e) => {
            error!(filename, error = %e, "Attachment file not readable");
            ApiResponse::internal_error()
        }
    }
}

/// Download an attachment
///
/// Streams the image bytes for a filename attached to one of the caller's
/// complaints. The original upload name rides along in the content
/// disposition.
#[utoipa::path(
    get,
    path = "/api/complaints/images/{filename}",
    tag = "complaints",
    params(
        ("filename" = String, Path, description = "Generated attachment filename")
    ),
    responses(
        (status = 200, description = "Image bytes", content_type = "image/*"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Unknown, foreign or missing image", body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {"code": "IMAGE_NOT_FOUND", "message": "Image not found"}
            })),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[get("/api/complaints/images/{filename}")]
pub async fn get_complaint_image_handler(
    user: AuthenticatedUser,
    path: web::Path<String>,
    req: HttpRequest,
    data: web::Data<AppState>,
) -> impl Responder {
    let filename = path.into_inner();

    let file = match data
        .get_complaint_image_use_case
        .execute(user.user_id, &filename)
        .await
    {
        Ok(file) => file,
        Err(e) => return map_get_complaint_image_error(e, &filename),
    };

    match NamedFile::open_async(&file.path).await {
        Ok(named) => named
            .set_content_disposition(ContentDisposition {
                disposition: DispositionType::Inline,
                parameters: vec![DispositionParam::Filename(file.original_name)],
            })
            .into_response(&req),
        // The file can vanish between the lookup and the open.
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!(filename, "Attachment file gone before open");
            ApiResponse::not_found("IMAGE_NOT_FOUND", "Image not found")
        }
        Err(e) => {
            error!(filename, error = %e, "Attachment file not readable");
            ApiResponse::internal_error()
        }
    }
}
