use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::directory::application::use_cases::list_sectors::ListSectorsError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use super::directory_view::SectorView;

#[derive(Serialize, ToSchema)]
pub struct SectorsResponse {
    sectors: Vec<SectorView>,
}

/// List all sectors
///
/// Every administrative sector with its member pincodes and the union of
/// their service pools. Public, no token required.
#[utoipa::path(
    get,
    path = "/api/sectors",
    tag = "sectors",
    responses(
        (status = 200, description = "All sectors", body = inline(SuccessResponse<SectorsResponse>),
            example = json!({
                "success": true,
                "data": {
                    "sectors": [{
                        "name": "Bengaluru",
                        "pincodes": ["560001", "560002"],
                        "availablePools": ["IT Sector", "Government Services"]
                    }]
                }
            })),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/sectors")]
pub async fn list_sectors_handler(data: web::Data<AppState>) -> impl Responder {
    match data.list_sectors_use_case.execute().await {
        Ok(records) => ApiResponse::success(SectorsResponse {
            sectors: records.into_iter().map(SectorView::from).collect(),
        }),

        Err(ListSectorsError::QueryError(ref e)) => {
            error!(error = %e, "Sector listing failed");
            ApiResponse::internal_error()
        }
    }
}
