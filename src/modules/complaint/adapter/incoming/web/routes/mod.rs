mod complaint_view;
mod create_complaint;
mod delete_complaint_image;
mod get_complaint;
mod get_complaint_image;
mod list_complaints;
mod search_complaints;

pub use complaint_view::*;
pub use create_complaint::*;
pub use delete_complaint_image::*;
pub use get_complaint::*;
pub use get_complaint_image::*;
pub use list_complaints::*;
pub use search_complaints::*;
