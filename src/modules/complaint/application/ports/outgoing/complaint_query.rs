use async_trait::async_trait;
use uuid::Uuid;

use crate::complaint::application::domain::{Complaint, ComplaintImage};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ComplaintQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[derive(Debug, Clone, Copy)]
pub struct PageRequest {
    /// 1-based page number
    pub page: u64,
    pub limit: u64,
}

#[derive(Debug, Clone)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub limit: u64,
    pub total: u64,
}

impl<T> PageResult<T> {
    pub fn pages(&self) -> u64 {
        if self.limit == 0 {
            0
        } else {
            self.total.div_ceil(self.limit)
        }
    }
}

/// Read side of the complaint store. Every method is owner-scoped; rows of
/// other users are invisible, not forbidden.
#[async_trait]
pub trait ComplaintQuery: Send + Sync {
    async fn find_for_user(
        &self,
        user_id: Uuid,
        complaint_id: Uuid,
    ) -> Result<Option<Complaint>, ComplaintQueryError>;

    /// Newest first.
    async fn list_for_user(
        &self,
        user_id: Uuid,
        page: PageRequest,
    ) -> Result<PageResult<Complaint>, ComplaintQueryError>;

    /// Case-insensitive substring over ticket id, title and description,
    /// newest first.
    async fn search_for_user(
        &self,
        user_id: Uuid,
        query: &str,
    ) -> Result<Vec<Complaint>, ComplaintQueryError>;

    async fn find_image_for_user(
        &self,
        user_id: Uuid,
        filename: &str,
    ) -> Result<Option<ComplaintImage>, ComplaintQueryError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_is_ceiling_of_total_over_limit() {
        let result = PageResult::<()> {
            items: vec![],
            page: 1,
            limit: 10,
            total: 31,
        };
        assert_eq!(result.pages(), 4);

        let exact = PageResult::<()> {
            items: vec![],
            page: 1,
            limit: 10,
            total: 30,
        };
        assert_eq!(exact.pages(), 3);

        let empty = PageResult::<()> {
            items: vec![],
            page: 1,
            limit: 10,
            total: 0,
        };
        assert_eq!(empty.pages(), 0);
    }
}
