pub mod entities;
pub mod upload_policy;

pub use entities::{
    format_ticket_id, Category, Complaint, ComplaintImage, ComplaintValidationError, NewComplaint,
    Priority, Status,
};
