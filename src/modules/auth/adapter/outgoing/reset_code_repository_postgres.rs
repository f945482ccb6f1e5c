use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{DatabaseConnection, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::reset_code_repository::{
    ResetCodeRecord, ResetCodeRepository, ResetCodeRepositoryError,
};

use super::sea_orm_entity::password_reset_codes::{
    ActiveModel as ResetCodeActiveModel, Column as ResetCodeColumn, Entity as ResetCodeEntity,
};

#[derive(Clone, Debug)]
pub struct ResetCodeRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ResetCodeRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ResetCodeRepository for ResetCodeRepositoryPostgres {
    async fn save_code(&self, record: ResetCodeRecord) -> Result<(), ResetCodeRepositoryError> {
        let active = ResetCodeActiveModel {
            user_id: Set(record.user_id),
            code_hash: Set(record.code_hash),
            expires_at: Set(record.expires_at.into()),
            created_at: Set(chrono::Utc::now().into()),
        };

        // Upsert keyed on the user id: a fresh request replaces any
        // earlier code instead of accumulating rows.
        ResetCodeEntity::insert(active)
            .on_conflict(
                OnConflict::column(ResetCodeColumn::UserId)
                    .update_columns([
                        ResetCodeColumn::CodeHash,
                        ResetCodeColumn::ExpiresAt,
                        ResetCodeColumn::CreatedAt,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&*self.db)
            .await
            .map_err(|e| ResetCodeRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn find_by_user(
        &self,
        user_id: Uuid,
    ) -> Result<Option<ResetCodeRecord>, ResetCodeRepositoryError> {
        let record = ResetCodeEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| ResetCodeRepositoryError::DatabaseError(e.to_string()))?;

        Ok(record.map(ResetCodeRecord::from))
    }

    async fn delete_for_user(&self, user_id: Uuid) -> Result<(), ResetCodeRepositoryError> {
        // Deleting an absent row is not an error.
        ResetCodeEntity::delete_by_id(user_id)
            .exec(&*self.db)
            .await
            .map_err(|e| ResetCodeRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
