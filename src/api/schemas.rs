// src/api/schemas.rs
use serde::Serialize;
use utoipa::ToSchema;

/// Envelope for 2xx responses
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    /// Always true when data is present
    #[schema(example = true)]
    pub success: bool,
    pub data: T,
}

/// Envelope for 4xx and 5xx responses
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always false when an error is present
    #[schema(example = false)]
    pub success: bool,
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Stable code for programmatic handling
    #[schema(example = "INVALID_PINCODE")]
    pub code: String,

    /// Human-readable message
    #[schema(example = "Invalid pincode format. Must be 6 digits.")]
    pub message: String,
}
