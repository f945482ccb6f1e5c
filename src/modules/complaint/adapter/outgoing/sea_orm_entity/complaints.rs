use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::complaint::application::domain::{Category, Complaint, ComplaintImage, Priority, Status};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "complaints")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub ticket_id: String,
    pub user_id: Uuid,
    pub category: ComplaintCategory,
    pub priority: ComplaintPriority,
    pub status: ComplaintStatus,
    pub title: String,
    pub description: String,
    pub location: Option<String>,
    pub admin_notes: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "complaint_category")]
pub enum ComplaintCategory {
    #[sea_orm(string_value = "data_issue")]
    DataIssue,

    #[sea_orm(string_value = "verification")]
    Verification,

    #[sea_orm(string_value = "accessibility")]
    Accessibility,

    #[sea_orm(string_value = "service")]
    Service,

    #[sea_orm(string_value = "technical")]
    Technical,

    #[sea_orm(string_value = "other")]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "complaint_priority")]
pub enum ComplaintPriority {
    #[sea_orm(string_value = "low")]
    Low,

    #[sea_orm(string_value = "medium")]
    Medium,

    #[sea_orm(string_value = "high")]
    High,

    #[sea_orm(string_value = "urgent")]
    Urgent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "complaint_status")]
pub enum ComplaintStatus {
    #[sea_orm(string_value = "pending")]
    Pending,

    #[sea_orm(string_value = "in_progress")]
    InProgress,

    #[sea_orm(string_value = "resolved")]
    Resolved,

    #[sea_orm(string_value = "rejected")]
    Rejected,
}

impl From<Category> for ComplaintCategory {
    fn from(category: Category) -> Self {
        match category {
            Category::DataIssue => ComplaintCategory::DataIssue,
            Category::Verification => ComplaintCategory::Verification,
            Category::Accessibility => ComplaintCategory::Accessibility,
            Category::Service => ComplaintCategory::Service,
            Category::Technical => ComplaintCategory::Technical,
            Category::Other => ComplaintCategory::Other,
        }
    }
}

impl From<ComplaintCategory> for Category {
    fn from(category: ComplaintCategory) -> Self {
        match category {
            ComplaintCategory::DataIssue => Category::DataIssue,
            ComplaintCategory::Verification => Category::Verification,
            ComplaintCategory::Accessibility => Category::Accessibility,
            ComplaintCategory::Service => Category::Service,
            ComplaintCategory::Technical => Category::Technical,
            ComplaintCategory::Other => Category::Other,
        }
    }
}

impl From<Priority> for ComplaintPriority {
    fn from(priority: Priority) -> Self {
        match priority {
            Priority::Low => ComplaintPriority::Low,
            Priority::Medium => ComplaintPriority::Medium,
            Priority::High => ComplaintPriority::High,
            Priority::Urgent => ComplaintPriority::Urgent,
        }
    }
}

impl From<ComplaintPriority> for Priority {
    fn from(priority: ComplaintPriority) -> Self {
        match priority {
            ComplaintPriority::Low => Priority::Low,
            ComplaintPriority::Medium => Priority::Medium,
            ComplaintPriority::High => Priority::High,
            ComplaintPriority::Urgent => Priority::Urgent,
        }
    }
}

impl From<Status> for ComplaintStatus {
    fn from(status: Status) -> Self {
        match status {
            Status::Pending => ComplaintStatus::Pending,
            Status::InProgress => ComplaintStatus::InProgress,
            Status::Resolved => ComplaintStatus::Resolved,
            Status::Rejected => ComplaintStatus::Rejected,
        }
    }
}

impl From<ComplaintStatus> for Status {
    fn from(status: ComplaintStatus) -> Self {
        match status {
            ComplaintStatus::Pending => Status::Pending,
            ComplaintStatus::InProgress => Status::InProgress,
            ComplaintStatus::Resolved => Status::Resolved,
            ComplaintStatus::Rejected => Status::Rejected,
        }
    }
}

impl Model {
    /// Attaches already-converted image metadata and lifts the row into the
    /// domain representation.
    pub fn into_complaint(self, images: Vec<ComplaintImage>) -> Complaint {
        Complaint {
            id: self.id,
            ticket_id: self.ticket_id,
            user_id: self.user_id,
            category: self.category.into(),
            priority: self.priority.into(),
            status: self.status.into(),
            title: self.title,
            description: self.description,
            location: self.location,
            admin_notes: self.admin_notes,
            images,
            created_at: self.created_at.with_timezone(&chrono::Utc),
            updated_at: self.updated_at.with_timezone(&chrono::Utc),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::complaint_images::Entity")]
    ComplaintImages,
}

impl Related<super::complaint_images::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ComplaintImages.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        #[cfg(feature = "no_db_triggers")]
        {
            use chrono::Utc;
            use sea_orm::ActiveValue::Set;

            let insert = _insert;
            if !insert {
                self.updated_at = Set(Utc::now().into());
            }
        }

        Ok(self)
    }
}
