use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::directory::application::use_cases::search_directory::SearchDirectoryError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use super::directory_view::PincodeView;

#[derive(Serialize, ToSchema)]
pub struct SearchResponse {
    /// Matching mappings, at most 10
    pincodes: Vec<PincodeView>,
}

/// Search the directory
///
/// Case-insensitive substring match over pincode, area name and sector
/// name, capped at 10 results. Public, no token required.
#[utoipa::path(
    get,
    path = "/api/sectors/search/{query}",
    tag = "sectors",
    params(
        ("query" = String, Path, description = "Substring to match", example = "fort")
    ),
    responses(
        (status = 200, description = "Matching mappings", body = inline(SuccessResponse<SearchResponse>)),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/sectors/search/{query}")]
pub async fn search_directory_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = path.into_inner();

    match data.search_directory_use_case.execute(&query).await {
        Ok(entries) => ApiResponse::success(SearchResponse {
            pincodes: entries.into_iter().map(PincodeView::from).collect(),
        }),

        Err(SearchDirectoryError::QueryError(ref e)) => {
            error!(error = %e, "Directory search failed");
            ApiResponse::internal_error()
        }
    }
}
