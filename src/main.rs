pub mod modules;
pub use modules::auth;
pub use modules::complaint;
pub use modules::directory;
pub mod api;
pub mod health;
pub mod shared;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::reset_code_repository_postgres::ResetCodeRepositoryPostgres;
use crate::auth::adapter::outgoing::user_query_postgres::UserQueryPostgres;
use crate::auth::adapter::outgoing::user_repository_postgres::UserRepositoryPostgres;
use crate::auth::application::use_cases::{
    fetch_profile::{FetchProfileUseCase, IFetchProfileUseCase},
    list_sector_users::{IListSectorUsersUseCase, ListSectorUsersUseCase},
    login_user::{ILoginUserUseCase, LoginUserUseCase},
    register_user::{IRegisterUserUseCase, RegisterUserUseCase},
    request_password_reset::{IRequestPasswordResetUseCase, RequestPasswordResetUseCase},
    reset_password::{IResetPasswordUseCase, ResetPasswordUseCase},
    update_profile::{IUpdateProfileUseCase, UpdateProfileUseCase},
};

use crate::complaint::adapter::outgoing::complaint_query_postgres::ComplaintQueryPostgres;
use crate::complaint::adapter::outgoing::complaint_repository_postgres::ComplaintRepositoryPostgres;
use crate::complaint::adapter::outgoing::fs_image_store::FsImageStore;
use crate::complaint::application::use_cases::{
    create_complaint::{CreateComplaintUseCase, ICreateComplaintUseCase},
    delete_complaint_image::{DeleteComplaintImageUseCase, IDeleteComplaintImageUseCase},
    get_complaint::{GetComplaintUseCase, IGetComplaintUseCase},
    get_complaint_image::{GetComplaintImageUseCase, IGetComplaintImageUseCase},
    list_complaints::{IListComplaintsUseCase, ListComplaintsUseCase},
    search_complaints::{ISearchComplaintsUseCase, SearchComplaintsUseCase},
};

use crate::directory::adapter::outgoing::directory_query_postgres::DirectoryQueryPostgres;
use crate::directory::adapter::outgoing::directory_repository_postgres::DirectoryRepositoryPostgres;
use crate::directory::application::use_cases::{
    list_sector_pincodes::{IListSectorPincodesUseCase, ListSectorPincodesUseCase},
    list_sectors::{IListSectorsUseCase, ListSectorsUseCase},
    lookup_pincode::{ILookupPincodeUseCase, LookupPincodeUseCase},
    search_directory::{ISearchDirectoryUseCase, SearchDirectoryUseCase},
};

use actix_web::{web, App, HttpServer};

use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub register_user_use_case: Arc<dyn IRegisterUserUseCase + Send + Sync>,
    pub login_user_use_case: Arc<dyn ILoginUserUseCase + Send + Sync>,
    pub fetch_profile_use_case: Arc<dyn IFetchProfileUseCase + Send + Sync>,
    pub update_profile_use_case: Arc<dyn IUpdateProfileUseCase + Send + Sync>,
    pub list_sector_users_use_case: Arc<dyn IListSectorUsersUseCase + Send + Sync>,
    pub request_password_reset_use_case: Arc<dyn IRequestPasswordResetUseCase + Send + Sync>,
    pub reset_password_use_case: Arc<dyn IResetPasswordUseCase + Send + Sync>,
    pub lookup_pincode_use_case: Arc<dyn ILookupPincodeUseCase + Send + Sync>,
    pub list_sectors_use_case: Arc<dyn IListSectorsUseCase + Send + Sync>,
    pub list_sector_pincodes_use_case: Arc<dyn IListSectorPincodesUseCase + Send + Sync>,
    pub search_directory_use_case: Arc<dyn ISearchDirectoryUseCase + Send + Sync>,
    pub create_complaint_use_case: Arc<dyn ICreateComplaintUseCase + Send + Sync>,
    pub list_complaints_use_case: Arc<dyn IListComplaintsUseCase + Send + Sync>,
    pub get_complaint_use_case: Arc<dyn IGetComplaintUseCase + Send + Sync>,
    pub search_complaints_use_case: Arc<dyn ISearchComplaintsUseCase + Send + Sync>,
    pub delete_complaint_image_use_case: Arc<dyn IDeleteComplaintImageUseCase + Send + Sync>,
    pub get_complaint_image_use_case: Arc<dyn IGetComplaintImageUseCase + Send + Sync>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    use crate::auth::{
        adapter::outgoing::security::argon2_hasher::Argon2PasswordHasher,
        application::ports::outgoing::{PasswordHasher, TokenProvider},
    };
    use crate::directory::application::use_cases::seed_directory::SeedDirectoryUseCase;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    // Load Env. variables
    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");

    let upload_dir = env::var("UPLOAD_DIR").unwrap_or_else(|_| "./uploads/complaints".to_string());
    let reset_code_ttl_minutes: i64 = env::var("RESET_CODE_EXPIRE_MINUTES")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(10);

    let server_url = format!("{host}:{port}");
    println!("Server run on: {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    let db_arc = Arc::new(conn);

    // Outgoing adapters
    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));
    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));
    let reset_codes = ResetCodeRepositoryPostgres::new(Arc::clone(&db_arc));
    let directory_query = DirectoryQueryPostgres::new(Arc::clone(&db_arc));
    let directory_repo = DirectoryRepositoryPostgres::new(Arc::clone(&db_arc));
    let complaint_repo = ComplaintRepositoryPostgres::new(Arc::clone(&db_arc));
    let complaint_query = ComplaintQueryPostgres::new(Arc::clone(&db_arc));

    let jwt_service = JwtTokenService::new(JwtConfig::from_env());
    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);
    let password_hasher_arc: Arc<dyn PasswordHasher + Send + Sync> =
        Arc::new(Argon2PasswordHasher::from_env());

    let image_store = FsImageStore::new(&upload_dir);
    image_store
        .ensure_root()
        .await
        .expect("Failed to create the upload directory");

    // The pincode directory ships with the binary; load it on first boot.
    SeedDirectoryUseCase::new(directory_query.clone(), directory_repo)
        .execute()
        .await
        .expect("Failed to seed the pincode directory");

    // Auth use cases
    let register_user_use_case = RegisterUserUseCase::new(
        user_query.clone(),
        user_repo.clone(),
        directory_query.clone(),
        Arc::clone(&password_hasher_arc),
        Arc::clone(&token_provider_arc),
    );
    let login_user_use_case = LoginUserUseCase::new(
        user_query.clone(),
        Arc::clone(&password_hasher_arc),
        Arc::clone(&token_provider_arc),
    );
    let fetch_profile_use_case = FetchProfileUseCase::new(user_query.clone());
    let update_profile_use_case = UpdateProfileUseCase::new(user_repo.clone());
    let list_sector_users_use_case = ListSectorUsersUseCase::new(user_query.clone());
    let request_password_reset_use_case = RequestPasswordResetUseCase::new(
        user_query.clone(),
        reset_codes.clone(),
        reset_code_ttl_minutes,
    );
    let reset_password_use_case = ResetPasswordUseCase::new(
        user_query,
        user_repo,
        reset_codes,
        Arc::clone(&password_hasher_arc),
    );

    // Directory use cases
    let lookup_pincode_use_case = LookupPincodeUseCase::new(directory_query.clone());
    let list_sectors_use_case = ListSectorsUseCase::new(directory_query.clone());
    let list_sector_pincodes_use_case = ListSectorPincodesUseCase::new(directory_query.clone());
    let search_directory_use_case = SearchDirectoryUseCase::new(directory_query);

    // Complaint use cases
    let create_complaint_use_case =
        CreateComplaintUseCase::new(complaint_repo.clone(), image_store.clone());
    let list_complaints_use_case = ListComplaintsUseCase::new(complaint_query.clone());
    let get_complaint_use_case = GetComplaintUseCase::new(complaint_query.clone());
    let search_complaints_use_case = SearchComplaintsUseCase::new(complaint_query.clone());
    let delete_complaint_image_use_case =
        DeleteComplaintImageUseCase::new(complaint_query.clone(), complaint_repo, image_store.clone());
    let get_complaint_image_use_case = GetComplaintImageUseCase::new(complaint_query, image_store);

    let state = AppState {
        register_user_use_case: Arc::new(register_user_use_case),
        login_user_use_case: Arc::new(login_user_use_case),
        fetch_profile_use_case: Arc::new(fetch_profile_use_case),
        update_profile_use_case: Arc::new(update_profile_use_case),
        list_sector_users_use_case: Arc::new(list_sector_users_use_case),
        request_password_reset_use_case: Arc::new(request_password_reset_use_case),
        reset_password_use_case: Arc::new(reset_password_use_case),
        lookup_pincode_use_case: Arc::new(lookup_pincode_use_case),
        list_sectors_use_case: Arc::new(list_sectors_use_case),
        list_sector_pincodes_use_case: Arc::new(list_sector_pincodes_use_case),
        search_directory_use_case: Arc::new(search_directory_use_case),
        create_complaint_use_case: Arc::new(create_complaint_use_case),
        list_complaints_use_case: Arc::new(list_complaints_use_case),
        get_complaint_use_case: Arc::new(get_complaint_use_case),
        search_complaints_use_case: Arc::new(search_complaints_use_case),
        delete_complaint_image_use_case: Arc::new(delete_complaint_image_use_case),
        get_complaint_image_use_case: Arc::new(get_complaint_image_use_case),
    };

    // Clone db_arc for use in HttpServer closure
    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(crate::shared::api::custom_json_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/docs/{_:.*}")
                    .url("/api-docs/openapi.json", crate::api::openapi::ApiDoc::openapi()),
            )
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::register_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::login_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::current_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::request_password_reset_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::reset_password_handler);
    // Users
    cfg.service(crate::auth::adapter::incoming::web::routes::fetch_profile_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::update_profile_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::list_sector_users_handler);
    // Sector directory; fixed segments register ahead of `{sector}/pincodes`
    cfg.service(crate::directory::adapter::incoming::web::routes::list_sectors_handler);
    cfg.service(crate::directory::adapter::incoming::web::routes::lookup_pincode_handler);
    cfg.service(crate::directory::adapter::incoming::web::routes::search_directory_handler);
    cfg.service(crate::directory::adapter::incoming::web::routes::list_sector_pincodes_handler);
    // Complaints; `search` and `images` register ahead of `{id}`
    cfg.service(crate::complaint::adapter::incoming::web::routes::create_complaint_handler);
    cfg.service(crate::complaint::adapter::incoming::web::routes::list_complaints_handler);
    cfg.service(crate::complaint::adapter::incoming::web::routes::search_complaints_handler);
    cfg.service(crate::complaint::adapter::incoming::web::routes::get_complaint_image_handler);
    cfg.service(crate::complaint::adapter::incoming::web::routes::get_complaint_handler);
    cfg.service(crate::complaint::adapter::incoming::web::routes::delete_complaint_image_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
