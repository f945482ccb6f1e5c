use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::complaint::application::domain::{
    Category, Complaint, ComplaintImage, Priority, Status,
};
use crate::complaint::application::ports::outgoing::PageResult;

/// Full complaint payload. The owner is implied by the bearer token, so
/// `user_id` never leaves the server.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintView {
    id: Uuid,
    #[schema(example = "COMP20250042")]
    ticket_id: String,
    category: Category,
    priority: Priority,
    status: Status,
    #[schema(example = "Water supply down")]
    title: String,
    #[schema(example = "No water in the area since yesterday morning.")]
    description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "Ward 12, Mysore")]
    location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    admin_notes: Option<String>,
    images: Vec<ImageView>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Attachment metadata. The storage path stays internal; clients fetch the
/// bytes through `/api/complaints/images/{filename}`.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImageView {
    #[schema(example = "f3a9c2d41b6e4f0a8c7d9e2b5a1f4c3d.jpg")]
    filename: String,
    #[schema(example = "leaking_tap.jpg")]
    original_name: String,
    #[schema(example = 245123)]
    size: i64,
    uploaded_at: DateTime<Utc>,
}

/// Compact shape returned right after filing. `id` carries the public
/// ticket handle, not the row UUID.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintSummaryView {
    #[schema(example = "COMP20250042")]
    id: String,
    #[schema(example = "Water supply down")]
    title: String,
    category: Category,
    priority: Priority,
    status: Status,
    created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginationView {
    #[schema(example = 1)]
    page: u64,
    #[schema(example = 10)]
    limit: u64,
    #[schema(example = 23)]
    total: u64,
    #[schema(example = 3)]
    pages: u64,
}

impl From<Complaint> for ComplaintView {
    fn from(complaint: Complaint) -> Self {
        ComplaintView {
            id: complaint.id,
            ticket_id: complaint.ticket_id,
            category: complaint.category,
            priority: complaint.priority,
            status: complaint.status,
            title: complaint.title,
            description: complaint.description,
            location: complaint.location,
            admin_notes: complaint.admin_notes,
            images: complaint.images.into_iter().map(ImageView::from).collect(),
            created_at: complaint.created_at,
            updated_at: complaint.updated_at,
        }
    }
}

impl From<ComplaintImage> for ImageView {
    fn from(image: ComplaintImage) -> Self {
        ImageView {
            filename: image.filename,
            original_name: image.original_name,
            size: image.size,
            uploaded_at: image.uploaded_at,
        }
    }
}

impl From<Complaint> for ComplaintSummaryView {
    fn from(complaint: Complaint) -> Self {
        ComplaintSummaryView {
            id: complaint.ticket_id,
            title: complaint.title,
            category: complaint.category,
            priority: complaint.priority,
            status: complaint.status,
            created_at: complaint.created_at,
        }
    }
}

impl<T> From<&PageResult<T>> for PaginationView {
    fn from(result: &PageResult<T>) -> Self {
        PaginationView {
            page: result.page,
            limit: result.limit,
            total: result.total,
            pages: result.pages(),
        }
    }
}
