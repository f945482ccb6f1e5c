use async_trait::async_trait;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{
    sea_query::Expr, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::complaint::adapter::outgoing::sea_orm_entity::{complaint_images, complaints};
use crate::complaint::application::domain::{Complaint, ComplaintImage};
use crate::complaint::application::ports::outgoing::{
    ComplaintQuery, ComplaintQueryError, PageRequest, PageResult,
};

#[derive(Clone)]
pub struct ComplaintQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ComplaintQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn images_for(&self, complaint_id: Uuid) -> Result<Vec<ComplaintImage>, ComplaintQueryError> {
        let rows = complaint_images::Entity::find()
            .filter(complaint_images::Column::ComplaintId.eq(complaint_id))
            .order_by_asc(complaint_images::Column::UploadedAt)
            .all(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(ComplaintImage::from).collect())
    }

    async fn with_images(
        &self,
        rows: Vec<complaints::Model>,
    ) -> Result<Vec<Complaint>, ComplaintQueryError> {
        let mut complaints = Vec::with_capacity(rows.len());
        for row in rows {
            let images = self.images_for(row.id).await?;
            complaints.push(row.into_complaint(images));
        }
        Ok(complaints)
    }
}

#[async_trait]
impl ComplaintQuery for ComplaintQueryPostgres {
    async fn find_for_user(
        &self,
        user_id: Uuid,
        complaint_id: Uuid,
    ) -> Result<Option<Complaint>, ComplaintQueryError> {
        let row = complaints::Entity::find()
            .filter(complaints::Column::Id.eq(complaint_id))
            .filter(complaints::Column::UserId.eq(user_id))
            .one(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        match row {
            Some(model) => {
                let images = self.images_for(model.id).await?;
                Ok(Some(model.into_complaint(images)))
            }
            None => Ok(None),
        }
    }

    async fn list_for_user(
        &self,
        user_id: Uuid,
        page: PageRequest,
    ) -> Result<PageResult<Complaint>, ComplaintQueryError> {
        let total = complaints::Entity::find()
            .filter(complaints::Column::UserId.eq(user_id))
            .count(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        let rows = complaints::Entity::find()
            .filter(complaints::Column::UserId.eq(user_id))
            .order_by_desc(complaints::Column::CreatedAt)
            .offset((page.page - 1) * page.limit)
            .limit(page.limit)
            .all(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        Ok(PageResult {
            items: self.with_images(rows).await?,
            page: page.page,
            limit: page.limit,
            total,
        })
    }

    async fn search_for_user(
        &self,
        user_id: Uuid,
        query: &str,
    ) -> Result<Vec<Complaint>, ComplaintQueryError> {
        let pattern = format!("%{}%", query);

        let rows = complaints::Entity::find()
            .filter(complaints::Column::UserId.eq(user_id))
            .filter(
                Condition::any()
                    .add(Expr::col(complaints::Column::TicketId).ilike(&pattern))
                    .add(Expr::col(complaints::Column::Title).ilike(&pattern))
                    .add(Expr::col(complaints::Column::Description).ilike(&pattern)),
            )
            .order_by_desc(complaints::Column::CreatedAt)
            .all(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        self.with_images(rows).await
    }

    async fn find_image_for_user(
        &self,
        user_id: Uuid,
        filename: &str,
    ) -> Result<Option<ComplaintImage>, ComplaintQueryError> {
        let row = complaint_images::Entity::find()
            .filter(complaint_images::Column::Filename.eq(filename))
            .inner_join(complaints::Entity)
            .filter(complaints::Column::UserId.eq(user_id))
            .one(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        Ok(row.map(ComplaintImage::from))
    }
}

fn map_db_err(err: DbErr) -> ComplaintQueryError {
    ComplaintQueryError::DatabaseError(err.to_string())
}
