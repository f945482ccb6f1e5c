use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::auth::adapter::incoming::web::routes::{
    ForgotPasswordBody, ForgotPasswordResponse, LoginBody, LoginResponse, RegisterResponse,
    RegisterUserBody, ResetPasswordBody, ResetPasswordResponse, SectorUsersResponse,
    UpdateProfileBody, UserView,
};
use crate::auth::application::domain::Language;
use crate::complaint::adapter::incoming::web::routes::{
    ComplaintListResponse, ComplaintResponse, ComplaintSearchResponse, ComplaintSummaryView,
    ComplaintUploadForm, ComplaintView, FiledComplaintResponse, ImageDeletedResponse, ImageView,
    PaginationView,
};
use crate::complaint::application::domain::{Category, Priority, Status};
use crate::directory::adapter::incoming::web::routes::{
    PincodeView, SearchResponse, SectorPincodesResponse, SectorView, SectorsResponse,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Nagrik Seva API",
        version = "1.0.0",
        description = "API documentation for the Nagrik Seva citizen services backend",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::register_user_handler,
        crate::auth::adapter::incoming::web::routes::login_user_handler,
        crate::auth::adapter::incoming::web::routes::current_user_handler,
        crate::auth::adapter::incoming::web::routes::request_password_reset_handler,
        crate::auth::adapter::incoming::web::routes::reset_password_handler,

        // User endpoints
        crate::auth::adapter::incoming::web::routes::fetch_profile_handler,
        crate::auth::adapter::incoming::web::routes::update_profile_handler,
        crate::auth::adapter::incoming::web::routes::list_sector_users_handler,

        // Sector directory endpoints
        crate::directory::adapter::incoming::web::routes::list_sectors_handler,
        crate::directory::adapter::incoming::web::routes::lookup_pincode_handler,
        crate::directory::adapter::incoming::web::routes::search_directory_handler,
        crate::directory::adapter::incoming::web::routes::list_sector_pincodes_handler,

        // Complaint endpoints
        crate::complaint::adapter::incoming::web::routes::create_complaint_handler,
        crate::complaint::adapter::incoming::web::routes::list_complaints_handler,
        crate::complaint::adapter::incoming::web::routes::search_complaints_handler,
        crate::complaint::adapter::incoming::web::routes::get_complaint_handler,
        crate::complaint::adapter::incoming::web::routes::get_complaint_image_handler,
        crate::complaint::adapter::incoming::web::routes::delete_complaint_image_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<RegisterResponse>,
            ErrorResponse,
            ErrorDetail,

            // Auth DTOs
            RegisterUserBody,
            RegisterResponse,
            LoginBody,
            LoginResponse,
            UserView,
            Language,
            UpdateProfileBody,
            SectorUsersResponse,
            ForgotPasswordBody,
            ForgotPasswordResponse,
            ResetPasswordBody,
            ResetPasswordResponse,

            // Directory DTOs
            PincodeView,
            SectorView,
            SectorsResponse,
            SectorPincodesResponse,
            SearchResponse,

            // Complaint DTOs
            Category,
            Priority,
            Status,
            ComplaintView,
            ComplaintSummaryView,
            ImageView,
            PaginationView,
            ComplaintUploadForm,
            FiledComplaintResponse,
            ComplaintResponse,
            ComplaintListResponse,
            ComplaintSearchResponse,
            ImageDeletedResponse
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Registration, login and password reset"),
        (name = "users", description = "Profile and sector user endpoints"),
        (name = "sectors", description = "Pincode and sector directory endpoints"),
        (name = "complaints", description = "Complaint ticketing endpoints"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Enter your JWT token"))
                        .build(),
                ),
            )
        }
    }
}
