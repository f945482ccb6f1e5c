pub mod create_complaint;
pub mod delete_complaint_image;
pub mod get_complaint;
pub mod get_complaint_image;
pub mod list_complaints;
pub mod search_complaints;
