use async_trait::async_trait;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{
    sea_query::Expr, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::sync::Arc;

use crate::directory::adapter::outgoing::sea_orm_entity::{pincodes, sectors};
use crate::directory::application::domain::{PincodeEntry, SectorRecord};
use crate::directory::application::ports::outgoing::{DirectoryQuery, DirectoryQueryError};

#[derive(Clone)]
pub struct DirectoryQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl DirectoryQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DirectoryQuery for DirectoryQueryPostgres {
    async fn find_by_code(&self, code: &str) -> Result<Option<PincodeEntry>, DirectoryQueryError> {
        let row = pincodes::Entity::find()
            .filter(pincodes::Column::Code.eq(code))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        row.map(model_to_entry).transpose()
    }

    async fn list_sectors(&self) -> Result<Vec<SectorRecord>, DirectoryQueryError> {
        let rows = sectors::Entity::find()
            .order_by_asc(sectors::Column::Name)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        rows.into_iter().map(model_to_record).collect()
    }

    async fn find_sector(&self, name: &str) -> Result<Option<SectorRecord>, DirectoryQueryError> {
        let row = sectors::Entity::find()
            .filter(sectors::Column::Name.eq(name))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        row.map(model_to_record).transpose()
    }

    async fn list_by_sector(&self, sector: &str) -> Result<Vec<PincodeEntry>, DirectoryQueryError> {
        let rows = pincodes::Entity::find()
            .filter(pincodes::Column::Sector.eq(sector))
            .order_by_asc(pincodes::Column::Code)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        rows.into_iter().map(model_to_entry).collect()
    }

    async fn search(
        &self,
        query: &str,
        limit: u64,
    ) -> Result<Vec<PincodeEntry>, DirectoryQueryError> {
        let pattern = format!("%{}%", query);

        let rows = pincodes::Entity::find()
            .filter(
                Condition::any()
                    .add(Expr::col(pincodes::Column::Code).ilike(&pattern))
                    .add(Expr::col(pincodes::Column::AreaName).ilike(&pattern))
                    .add(Expr::col(pincodes::Column::Sector).ilike(&pattern)),
            )
            .order_by_asc(pincodes::Column::Code)
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        rows.into_iter().map(model_to_entry).collect()
    }

    async fn count_codes(&self) -> Result<u64, DirectoryQueryError> {
        pincodes::Entity::find()
            .count(&*self.db)
            .await
            .map_err(map_db_err)
    }
}

fn model_to_entry(model: pincodes::Model) -> Result<PincodeEntry, DirectoryQueryError> {
    Ok(PincodeEntry {
        code: model.code,
        sector: model.sector,
        area_name: model.area_name,
        pools: from_json(&model.pools)?,
    })
}

fn model_to_record(model: sectors::Model) -> Result<SectorRecord, DirectoryQueryError> {
    Ok(SectorRecord {
        name: model.name,
        pincodes: from_json(&model.pincodes)?,
        pools: from_json(&model.pools)?,
        description: model.description,
    })
}

fn from_json<T: serde::de::DeserializeOwned>(
    json: &serde_json::Value,
) -> Result<T, DirectoryQueryError> {
    serde_json::from_value(json.clone())
        .map_err(|e| DirectoryQueryError::SerializationError(e.to_string()))
}

fn map_db_err(e: DbErr) -> DirectoryQueryError {
    DirectoryQueryError::DatabaseError(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use uuid::Uuid;

    fn mock_pincode_model(code: &str, sector: &str, area_name: &str) -> pincodes::Model {
        let now = Utc::now().fixed_offset();
        pincodes::Model {
            id: Uuid::new_v4(),
            code: code.to_string(),
            sector: sector.to_string(),
            area_name: area_name.to_string(),
            pools: serde_json::json!(["IT Sector", "Government Services"]),
            created_at: now,
            updated_at: now,
        }
    }

    fn mock_sector_model(name: &str) -> sectors::Model {
        let now = Utc::now().fixed_offset();
        sectors::Model {
            id: Uuid::new_v4(),
            name: name.to_string(),
            pincodes: serde_json::json!(["560001", "560002"]),
            pools: serde_json::json!(["IT Sector"]),
            description: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_find_by_code_success() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![mock_pincode_model(
                "560001",
                "Bengaluru",
                "Bangalore GPO",
            )]])
            .into_connection();

        let query = DirectoryQueryPostgres::new(Arc::new(db));
        let entry = query.find_by_code("560001").await.unwrap().unwrap();

        assert_eq!(entry.code, "560001");
        assert_eq!(entry.sector, "Bengaluru");
        assert_eq!(entry.area_name, "Bangalore GPO");
        assert_eq!(entry.pools, vec!["IT Sector", "Government Services"]);
    }

    #[tokio::test]
    async fn test_find_by_code_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<pincodes::Model>::new()])
            .into_connection();

        let query = DirectoryQueryPostgres::new(Arc::new(db));
        let result = query.find_by_code("999999").await;

        assert!(result.is_ok());
        assert!(result.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_by_code_rejects_malformed_pools_column() {
        let now = Utc::now().fixed_offset();
        let broken = pincodes::Model {
            id: Uuid::new_v4(),
            code: "560001".to_string(),
            sector: "Bengaluru".to_string(),
            area_name: "Bangalore GPO".to_string(),
            pools: serde_json::json!({"not": "a list"}),
            created_at: now,
            updated_at: now,
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![broken]])
            .into_connection();

        let query = DirectoryQueryPostgres::new(Arc::new(db));
        let result = query.find_by_code("560001").await;

        assert!(matches!(
            result.unwrap_err(),
            DirectoryQueryError::SerializationError(_)
        ));
    }

    #[tokio::test]
    async fn test_list_sectors_success() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                mock_sector_model("Bengaluru"),
                mock_sector_model("Mysore"),
            ]])
            .into_connection();

        let query = DirectoryQueryPostgres::new(Arc::new(db));
        let records = query.list_sectors().await.unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Bengaluru");
        assert_eq!(records[0].pincodes, vec!["560001", "560002"]);
        assert_eq!(records[1].name, "Mysore");
    }

    #[tokio::test]
    async fn test_find_sector_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<sectors::Model>::new()])
            .into_connection();

        let query = DirectoryQueryPostgres::new(Arc::new(db));
        let result = query.find_sector("Atlantis").await;

        assert!(result.is_ok());
        assert!(result.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_by_sector_success() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                mock_pincode_model("560001", "Bengaluru", "Bangalore GPO"),
                mock_pincode_model("560002", "Bengaluru", "Bangalore City"),
            ]])
            .into_connection();

        let query = DirectoryQueryPostgres::new(Arc::new(db));
        let entries = query.list_by_sector("Bengaluru").await.unwrap();

        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|e| e.sector == "Bengaluru"));
    }

    #[tokio::test]
    async fn test_search_returns_matches() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![mock_pincode_model(
                "570001",
                "Mysore",
                "Mysore Fort",
            )]])
            .into_connection();

        let query = DirectoryQueryPostgres::new(Arc::new(db));
        let entries = query.search("fort", 10).await.unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].area_name, "Mysore Fort");
    }

    #[tokio::test]
    async fn test_search_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("connection error".to_string())])
            .into_connection();

        let query = DirectoryQueryPostgres::new(Arc::new(db));
        let result = query.search("any", 10).await;

        assert!(matches!(
            result.unwrap_err(),
            DirectoryQueryError::DatabaseError(_)
        ));
    }

    // Note: count() is difficult to mock with MockDatabase.
    // Use integration tests for full count_codes coverage.

    #[tokio::test]
    async fn test_count_codes_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("connection error".to_string())])
            .into_connection();

        let query = DirectoryQueryPostgres::new(Arc::new(db));
        let result = query.count_codes().await;

        assert!(matches!(
            result.unwrap_err(),
            DirectoryQueryError::DatabaseError(_)
        ));
    }
}
