pub mod fetch_profile;
pub mod list_sector_users;
pub mod login_user;
pub mod register_user;
pub mod request_password_reset;
pub mod reset_password;
pub mod update_profile;
