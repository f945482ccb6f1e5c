use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::complaint::application::domain::ComplaintImage;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "complaint_images")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub complaint_id: Uuid,
    #[sea_orm(unique)]
    pub filename: String,
    pub original_name: String,
    pub path: String,
    pub size: i64,
    pub uploaded_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::complaints::Entity",
        from = "Column::ComplaintId",
        to = "super::complaints::Column::Id",
        on_delete = "Cascade",
        on_update = "Cascade"
    )]
    Complaints,
}

impl Related<super::complaints::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Complaints.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for ComplaintImage {
    fn from(model: Model) -> Self {
        ComplaintImage {
            filename: model.filename,
            original_name: model.original_name,
            path: model.path,
            size: model.size,
            uploaded_at: model.uploaded_at.with_timezone(&chrono::Utc),
        }
    }
}
