use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::directory::application::use_cases::lookup_pincode::LookupPincodeError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, HttpResponse, Responder};
use tracing::{error, warn};

use super::directory_view::PincodeView;

fn map_lookup_pincode_error(err: LookupPincodeError) -> HttpResponse {
    match err {
        LookupPincodeError::InvalidFormat => ApiResponse::bad_request(
            "INVALID_PINCODE",
            "Invalid pincode format. Must be 6 digits.",
        ),

        LookupPincodeError::NotFound => {
            ApiResponse::not_found("PINCODE_NOT_FOUND", "Pincode not found")
        }

        LookupPincodeError::QueryError(ref e) => {
            error!(error = %e, "Pincode lookup failed");
            ApiResponse::internal_error()
        }
    }
}

/// Look up a pincode
///
/// Resolves a 6-digit pincode to its sector, area name and available
/// service pools. Public, no token required.
#[utoipa::path(
    get,
    path = "/api/sectors/pincode/{pincode}",
    tag = "sectors",
    params(
        ("pincode" = String, Path, description = "6-digit postal code", example = "560001")
    ),
    responses(
        (status = 200, description = "Mapping found", body = inline(SuccessResponse<PincodeView>),
            example = json!({
                "success": true,
                "data": {
                    "pincode": "560001",
                    "sector": "Bengaluru",
                    "areaName": "Bangalore GPO",
                    "availablePools": ["IT Sector", "Government Services"]
                }
            })),
        (status = 400, description = "Malformed pincode", body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INVALID_PINCODE",
                    "message": "Invalid pincode format. Must be 6 digits."
                }
            })),
        (status = 404, description = "Pincode not mapped", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/sectors/pincode/{pincode}")]
pub async fn lookup_pincode_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let code = path.into_inner();

    match data.lookup_pincode_use_case.execute(&code).await {
        Ok(entry) => ApiResponse::success(PincodeView::from(entry)),

        Err(err) => {
            if matches!(err, LookupPincodeError::NotFound) {
                warn!(pincode = %code, "Lookup for unmapped pincode");
            }
            map_lookup_pincode_error(err)
        }
    }
}
