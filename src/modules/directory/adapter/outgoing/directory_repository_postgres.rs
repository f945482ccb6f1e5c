use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, Set, TransactionTrait};
use std::sync::Arc;

use crate::directory::adapter::outgoing::sea_orm_entity::{pincodes, sectors};
use crate::directory::application::domain::{PincodeEntry, SectorRecord};
use crate::directory::application::ports::outgoing::{
    DirectoryRepository, DirectoryRepositoryError,
};

#[derive(Clone)]
pub struct DirectoryRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl DirectoryRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn load_all<C: ConnectionTrait>(
        conn: &C,
        entries: Vec<PincodeEntry>,
        sectors_in: Vec<SectorRecord>,
    ) -> Result<(), DirectoryRepositoryError> {
        pincodes::Entity::delete_many()
            .exec(conn)
            .await
            .map_err(map_db_err)?;

        sectors::Entity::delete_many()
            .exec(conn)
            .await
            .map_err(map_db_err)?;

        if !entries.is_empty() {
            let models = entries.into_iter().map(|entry| pincodes::ActiveModel {
                id: NotSet,
                code: Set(entry.code),
                sector: Set(entry.sector),
                area_name: Set(entry.area_name),
                pools: Set(to_json(&entry.pools)),
                created_at: NotSet,
                updated_at: NotSet,
            });

            pincodes::Entity::insert_many(models)
                .exec_without_returning(conn)
                .await
                .map_err(map_db_err)?;
        }

        if !sectors_in.is_empty() {
            let models = sectors_in.into_iter().map(|record| sectors::ActiveModel {
                id: NotSet,
                name: Set(record.name),
                pincodes: Set(to_json(&record.pincodes)),
                pools: Set(to_json(&record.pools)),
                description: Set(record.description),
                created_at: NotSet,
                updated_at: NotSet,
            });

            sectors::Entity::insert_many(models)
                .exec_without_returning(conn)
                .await
                .map_err(map_db_err)?;
        }

        Ok(())
    }
}

#[async_trait]
impl DirectoryRepository for DirectoryRepositoryPostgres {
    async fn replace_all(
        &self,
        entries: Vec<PincodeEntry>,
        sectors_in: Vec<SectorRecord>,
    ) -> Result<(), DirectoryRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        if let Err(e) = Self::load_all(&txn, entries, sectors_in).await {
            let _ = txn.rollback().await;
            return Err(e);
        }

        txn.commit().await.map_err(map_db_err)
    }
}

fn to_json(values: &[String]) -> serde_json::Value {
    serde_json::Value::Array(
        values
            .iter()
            .cloned()
            .map(serde_json::Value::String)
            .collect(),
    )
}

fn map_db_err(e: DbErr) -> DirectoryRepositoryError {
    DirectoryRepositoryError::DatabaseError(e.to_string())
}
