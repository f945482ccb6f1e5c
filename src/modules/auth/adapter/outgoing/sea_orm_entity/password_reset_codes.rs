use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::ResetCodeRecord;

/// One row per user. A new reset request replaces the previous row.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "password_reset_codes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: Uuid,
    pub code_hash: String,
    pub expires_at: DateTimeWithTimeZone,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for ResetCodeRecord {
    fn from(model: Model) -> Self {
        ResetCodeRecord {
            user_id: model.user_id,
            code_hash: model.code_hash,
            expires_at: model.expires_at.with_timezone(&chrono::Utc),
        }
    }
}
