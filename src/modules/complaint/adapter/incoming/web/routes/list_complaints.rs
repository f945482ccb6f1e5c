use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::complaint::application::use_cases::list_complaints::ListComplaintsError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::{IntoParams, ToSchema};

use super::complaint_view::{ComplaintView, PaginationView};

/// Paging parameters arrive as free-form strings; anything non-numeric
/// falls back to the defaults instead of failing the request.
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListComplaintsParams {
    #[param(example = "1")]
    page: Option<String>,
    #[param(example = "10")]
    limit: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct ComplaintListResponse {
    complaints: Vec<ComplaintView>,
    pagination: PaginationView,
}

fn map_list_complaints_error(err: ListComplaintsError) -> actix_web::HttpResponse {
    match &err {
        ListComplaintsError::QueryError(e) => {
            error!(error = %e, "Complaint listing failed");
            ApiResponse::internal_error()
        }
    }
}

/// List own complaints
///
/// Pages through the caller's complaints, newest first.
#[utoipa::path(
    get,
    path = "/api/complaints",
    tag = "complaints",
    params(ListComplaintsParams),
    responses(
        (status = 200, description = "One page of complaints", body = inline(SuccessResponse<ComplaintListResponse>),
            example = json!({
                "success": true,
                "data": {
                    "complaints": [{
                        "id": "7c9e6679-7425-40de-944b-e07fc1f90ae7",
                        "ticketId": "COMP20250042",
                        "category": "service",
                        "priority": "high",
                        "status": "pending",
                        "title": "Water supply down",
                        "description": "No water in the area since yesterday morning.",
                        "images": [],
                        "createdAt": "2025-06-01T10:15:00Z",
                        "updatedAt": "2025-06-01T10:15:00Z"
                    }],
                    "pagination": {"page": 1, "limit": 10, "total": 23, "pages": 3}
                }
            })),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[get("/api/complaints")]
pub async fn list_complaints_handler(
    user: AuthenticatedUser,
    params: web::Query<ListComplaintsParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    let page = params.page.as_deref().and_then(|p| p.parse::<u64>().ok());
    let limit = params.limit.as_deref().and_then(|l| l.parse::<u64>().ok());

    match data
        .list_complaints_use_case
        .execute(user.user_id, page, limit)
        .await
    {
        Ok(result) => {
            let pagination = PaginationView::from(&result);
            ApiResponse::success(ComplaintListResponse {
                complaints: result.items.into_iter().map(ComplaintView::from).collect(),
                pagination,
            })
        }
        Err(e) => map_list_complaints_error(e),
    }
}
