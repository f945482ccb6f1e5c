use async_trait::async_trait;
use chrono::{Datelike, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbBackend, DbErr,
    EntityTrait, QueryFilter, Set, Statement, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::complaint::adapter::outgoing::sea_orm_entity::{complaint_images, complaints};
use crate::complaint::application::domain::{format_ticket_id, Complaint, ComplaintImage, NewComplaint};
use crate::complaint::application::ports::outgoing::{
    ComplaintRepository, ComplaintRepositoryError, NewImage,
};

/// Counter row all ticket sequences are drawn from.
const TICKET_COUNTER_ID: &str = "complaints";

#[derive(Clone)]
pub struct ComplaintRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ComplaintRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Draws the next ticket sequence. The upsert increments and returns in
    /// one statement, so concurrent callers can never observe the same value.
    async fn next_sequence<C: ConnectionTrait>(conn: &C) -> Result<i64, ComplaintRepositoryError> {
        let stmt = Statement::from_sql_and_values(
            DbBackend::Postgres,
            r#"
            INSERT INTO ticket_counters (id, last_value)
            VALUES ($1, 1)
            ON CONFLICT (id) DO UPDATE SET last_value = ticket_counters.last_value + 1
            RETURNING last_value
            "#,
            [TICKET_COUNTER_ID.into()],
        );

        let row = conn
            .query_one(stmt)
            .await
            .map_err(map_db_err)?
            .ok_or_else(|| {
                ComplaintRepositoryError::DatabaseError(
                    "Ticket counter upsert returned no row".to_string(),
                )
            })?;

        row.try_get::<i64>("", "last_value").map_err(map_db_err)
    }
}

#[async_trait]
impl ComplaintRepository for ComplaintRepositoryPostgres {
    async fn create(
        &self,
        complaint: NewComplaint,
        images: Vec<NewImage>,
    ) -> Result<Complaint, ComplaintRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let sequence = match Self::next_sequence(&txn).await {
            Ok(sequence) => sequence,
            Err(e) => {
                let _ = txn.rollback().await;
                return Err(e);
            }
        };

        let ticket_id = format_ticket_id(Utc::now().year(), sequence);

        let model = complaints::ActiveModel {
            id: NotSet,
            ticket_id: Set(ticket_id),
            user_id: Set(complaint.user_id()),
            category: Set(complaint.category().into()),
            priority: Set(complaint.priority().into()),
            status: Set(complaints::ComplaintStatus::Pending),
            title: Set(complaint.title().to_string()),
            description: Set(complaint.description().to_string()),
            location: Set(complaint.location().map(str::to_string)),
            admin_notes: NotSet,
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = match model.insert(&txn).await {
            Ok(inserted) => inserted,
            Err(e) => {
                let _ = txn.rollback().await;
                return Err(map_db_err(e));
            }
        };

        let uploaded_at = Utc::now();

        if !images.is_empty() {
            let image_models: Vec<complaint_images::ActiveModel> = images
                .iter()
                .map(|image| complaint_images::ActiveModel {
                    id: NotSet,
                    complaint_id: Set(inserted.id),
                    filename: Set(image.filename.clone()),
                    original_name: Set(image.original_name.clone()),
                    path: Set(image.path.clone()),
                    size: Set(image.size),
                    uploaded_at: Set(uploaded_at.into()),
                })
                .collect();

            if let Err(e) = complaint_images::Entity::insert_many(image_models)
                .exec_without_returning(&txn)
                .await
            {
                let _ = txn.rollback().await;
                return Err(map_db_err(e));
            }
        }

        txn.commit().await.map_err(map_db_err)?;

        let images = images
            .into_iter()
            .map(|image| ComplaintImage {
                filename: image.filename,
                original_name: image.original_name,
                path: image.path,
                size: image.size,
                uploaded_at,
            })
            .collect();

        Ok(inserted.into_complaint(images))
    }

    async fn delete_image(
        &self,
        complaint_id: Uuid,
        filename: &str,
    ) -> Result<(), ComplaintRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let result = match complaint_images::Entity::delete_many()
            .filter(complaint_images::Column::ComplaintId.eq(complaint_id))
            .filter(complaint_images::Column::Filename.eq(filename))
            .exec(&txn)
            .await
        {
            Ok(result) => result,
            Err(e) => {
                let _ = txn.rollback().await;
                return Err(map_db_err(e));
            }
        };

        if result.rows_affected == 0 {
            let _ = txn.rollback().await;
            return Err(ComplaintRepositoryError::ImageNotFound);
        }

        // The trigger only fires on complaints updates, so touch the row here.
        if let Err(e) = complaints::Entity::update_many()
            .col_expr(complaints::Column::UpdatedAt, Expr::current_timestamp().into())
            .filter(complaints::Column::Id.eq(complaint_id))
            .exec(&txn)
            .await
        {
            let _ = txn.rollback().await;
            return Err(map_db_err(e));
        }

        txn.commit().await.map_err(map_db_err)?;
        Ok(())
    }
}

fn map_db_err(err: DbErr) -> ComplaintRepositoryError {
    ComplaintRepositoryError::DatabaseError(err.to_string())
}
