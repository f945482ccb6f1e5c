use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::complaint::application::use_cases::search_complaints::SearchComplaintsError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::{IntoParams, ToSchema};

use super::complaint_view::ComplaintView;

#[derive(Debug, Deserialize, IntoParams)]
pub struct SearchParams {
    /// Matched against ticket id, title and description
    #[param(example = "water")]
    q: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct ComplaintSearchResponse {
    complaints: Vec<ComplaintView>,
}

fn map_search_complaints_error(err: SearchComplaintsError) -> actix_web::HttpResponse {
    match &err {
        SearchComplaintsError::MissingQuery => {
            warn!("Complaint search without a query");
            ApiResponse::bad_request("INVALID_QUERY", "Search query is required")
        }

        SearchComplaintsError::QueryError(e) => {
            error!(error = %e, "Complaint search failed");
            ApiResponse::internal_error()
        }
    }
}

/// Search own complaints
///
/// Case-insensitive match over the caller's tickets, titles and
/// descriptions.
#[utoipa::path(
    get,
    path = "/api/complaints/search",
    tag = "complaints",
    params(SearchParams),
    responses(
        (status = 200, description = "Matching complaints", body = inline(SuccessResponse<ComplaintSearchResponse>)),
        (status = 400, description = "Missing query", body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {"code": "INVALID_QUERY", "message": "Search query is required"}
            })),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[get("/api/complaints/search")]
pub async fn search_complaints_handler(
    user: AuthenticatedUser,
    params: web::Query<SearchParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = params.q.as_deref().unwrap_or("");

    match data
        .search_complaints_use_case
        .execute(user.user_id, query)
        .await
    {
        Ok(matches) => ApiResponse::success(ComplaintSearchResponse {
            complaints: matches.into_iter().map(ComplaintView::from).collect(),
        }),
        Err(e) => map_search_complaints_error(e),
    }
}
