pub mod password_reset_codes;
pub mod users;
