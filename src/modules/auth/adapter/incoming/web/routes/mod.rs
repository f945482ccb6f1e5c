mod fetch_profile;
mod list_sector_users;
mod login_user;
mod register_user;
mod request_password_reset;
mod reset_password;
mod update_profile;
mod user_view;

pub use fetch_profile::*;
pub use list_sector_users::*;
pub use login_user::*;
pub use register_user::*;
pub use request_password_reset::*;
pub use reset_password::*;
pub use update_profile::*;
pub use user_view::*;
