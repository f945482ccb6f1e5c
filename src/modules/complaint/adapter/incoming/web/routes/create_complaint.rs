use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::complaint::adapter::incoming::web::multipart::{
    parse_complaint_form, MultipartParseError,
};
use crate::complaint::application::domain::NewComplaint;
use crate::complaint::application::use_cases::create_complaint::CreateComplaintError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_multipart::Multipart;
use actix_web::{post, web, Responder};
use serde::Serialize;
use tracing::{error, warn};
use utoipa::ToSchema;

use super::complaint_view::ComplaintSummaryView;

/// Multipart form shape, present for the OpenAPI document. The handler reads
/// the stream directly.
#[derive(Serialize, ToSchema)]
pub struct ComplaintUploadForm {
    #[schema(example = "service")]
    category: String,
    #[schema(example = "high")]
    priority: Option<String>,
    #[schema(example = "Water supply down")]
    title: String,
    #[schema(example = "No water in the area since yesterday morning.")]
    description: String,
    #[schema(example = "Ward 12, Mysore")]
    location: Option<String>,
    /// Up to 5 image files, 5MB each
    #[schema(value_type = Vec<String>, format = Binary)]
    images: Vec<String>,
}

#[derive(Serialize, ToSchema)]
pub struct FiledComplaintResponse {
    #[schema(example = "Complaint submitted successfully")]
    message: String,
    complaint: ComplaintSummaryView,
}

fn map_create_complaint_error(err: CreateComplaintError) -> actix_web::HttpResponse {
    match &err {
        CreateComplaintError::UploadRejected(message) => {
            warn!(reason = %message, "Complaint upload rejected");
            ApiResponse::bad_request("VALIDATION_ERROR", message)
        }

        CreateComplaintError::StoreError(e) => {
            error!(error = %e, "Complaint attachment could not be stored");
            ApiResponse::internal_error()
        }

        CreateComplaintError::RepositoryError(e) => {
            error!(error = %e, "Complaint could not be persisted");
            ApiResponse::internal_error()
        }
    }
}

/// File a complaint
///
/// Accepts a multipart form with the complaint fields and up to five image
/// attachments. Returns the assigned ticket handle.
#[utoipa::path(
    post,
    path = "/api/complaints",
    tag = "complaints",
    request_body(content = ComplaintUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Complaint filed", body = inline(SuccessResponse<FiledComplaintResponse>),
            example = json!({
                "success": true,
                "data": {
                    "message": "Complaint submitted successfully",
                    "complaint": {
                        "id": "COMP20250042",
                        "title": "Water supply down",
                        "category": "service",
                        "priority": "high",
                        "status": "pending",
                        "createdAt": "2025-06-01T10:15:00Z"
                    }
                }
            })),
        (status = 400, description = "Validation or upload policy failure", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[post("/api/complaints")]
pub async fn create_complaint_handler(
    user: AuthenticatedUser,
    payload: Multipart,
    data: web::Data<AppState>,
) -> impl Responder {
    let form = match parse_complaint_form(payload).await {
        Ok(form) => form,
        Err(MultipartParseError::Rejected(message)) => {
            warn!(reason = %message, "Complaint upload rejected");
            return ApiResponse::bad_request("VALIDATION_ERROR", &message);
        }
        Err(MultipartParseError::Malformed) => {
            return ApiResponse::bad_request("VALIDATION_ERROR", "Malformed multipart payload");
        }
    };

    let complaint = match NewComplaint::new(
        user.user_id,
        form.category.as_deref().unwrap_or(""),
        form.priority.as_deref(),
        form.title.as_deref().unwrap_or(""),
        form.description.as_deref().unwrap_or(""),
        form.location.as_deref(),
    ) {
        Ok(complaint) => complaint,
        Err(e) => {
            warn!(reason = %e, "Complaint rejected by validation");
            return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string());
        }
    };

    match data
        .create_complaint_use_case
        .execute(complaint, form.images)
        .await
    {
        Ok(created) => ApiResponse::created(FiledComplaintResponse {
            message: "Complaint submitted successfully".to_string(),
            complaint: ComplaintSummaryView::from(created),
        }),
        Err(e) => map_create_complaint_error(e),
    }
}
