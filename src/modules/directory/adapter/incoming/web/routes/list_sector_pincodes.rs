use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::directory::application::use_cases::list_sector_pincodes::ListSectorPincodesError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;
use tracing::{error, warn};
use utoipa::ToSchema;

use super::directory_view::PincodeView;

#[derive(Serialize, ToSchema)]
pub struct SectorPincodesResponse {
    pincodes: Vec<PincodeView>,
}

fn map_list_sector_pincodes_error(err: ListSectorPincodesError, sector: &str) -> HttpResponse {
    match err {
        ListSectorPincodesError::SectorNotFound => {
            warn!(sector = %sector, "Pincode listing for unknown sector");
            ApiResponse::not_found("SECTOR_NOT_FOUND", "Sector not found")
        }

        ListSectorPincodesError::QueryError(ref e) => {
            error!(sector = %sector, error = %e, "Sector pincode listing failed");
            ApiResponse::internal_error()
        }
    }
}

/// Pincodes of a sector
///
/// All pincode mappings that belong to the named sector. Unknown sectors
/// are an error here, unlike the user listing. Public, no token required.
#[utoipa::path(
    get,
    path = "/api/sectors/{sector}/pincodes",
    tag = "sectors",
    params(
        ("sector" = String, Path, description = "Sector name", example = "Bengaluru")
    ),
    responses(
        (status = 200, description = "Mappings of the sector", body = inline(SuccessResponse<SectorPincodesResponse>)),
        (status = 404, description = "Unknown sector", body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "SECTOR_NOT_FOUND", "message": "Sector not found" }
            })),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/sectors/{sector}/pincodes")]
pub async fn list_sector_pincodes_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let sector = path.into_inner();

    match data.list_sector_pincodes_use_case.execute(&sector).await {
        Ok(entries) => ApiResponse::success(SectorPincodesResponse {
            pincodes: entries.into_iter().map(PincodeView::from).collect(),
        }),

        Err(err) => map_list_sector_pincodes_error(err, &sector),
    }
}
