use async_trait::async_trait;

use crate::auth::application::ports::outgoing::{UserQuery, UserQueryError, UserQueryResult};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListSectorUsersError {
    #[error("Query error: {0}")]
    QueryError(#[from] UserQueryError),
}

/// Lists registered users of one administrative sector. An unknown
/// sector yields an empty list rather than an error.
#[async_trait]
pub trait IListSectorUsersUseCase: Send + Sync {
    async fn execute(&self, sector: &str) -> Result<Vec<UserQueryResult>, ListSectorUsersError>;
}

pub struct ListSectorUsersUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListSectorUsersUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IListSectorUsersUseCase for ListSectorUsersUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, sector: &str) -> Result<Vec<UserQueryResult>, ListSectorUsersError> {
        let users = self.query.find_by_sector(sector.trim()).await?;
        Ok(users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::Language;
    use uuid::Uuid;

    struct MockUserQuery {
        result: Result<Vec<UserQueryResult>, UserQueryError>,
    }

    #[async_trait]
    impl UserQuery for MockUserQuery {
        async fn find_by_id(
            &self,
            _user_id: Uuid,
        ) -> Result<Option<UserQueryResult>, UserQueryError> {
            unimplemented!("Not used in this test")
        }

        async fn find_by_id_number(
            &self,
            _id_number: &str,
        ) -> Result<Option<UserQueryResult>, UserQueryError> {
            unimplemented!("Not used in this test")
        }

        async fn find_by_mobile_number(
            &self,
            _mobile_number: &str,
        ) -> Result<Option<UserQueryResult>, UserQueryError> {
            unimplemented!("Not used in this test")
        }

        async fn find_by_sector(
            &self,
            _sector: &str,
        ) -> Result<Vec<UserQueryResult>, UserQueryError> {
            self.result.clone()
        }
    }

    fn sample_user() -> UserQueryResult {
        UserQueryResult {
            id: Uuid::new_v4(),
            id_number: "123456789012".to_string(),
            mobile_number: "9876543210".to_string(),
            password_hash: "$argon2id$stored".to_string(),
            uid: "1234ABCD1234".to_string(),
            pincode: "560001".to_string(),
            sector: "Bengaluru".to_string(),
            language: Language::En,
            is_verified: false,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[tokio::test]
    async fn lists_users_of_sector() {
        let uc = ListSectorUsersUseCase::new(MockUserQuery {
            result: Ok(vec![sample_user(), sample_user()]),
        });

        let users = uc.execute("Bengaluru").await.unwrap();
        assert_eq!(users.len(), 2);
    }

    #[tokio::test]
    async fn unknown_sector_yields_empty_list() {
        let uc = ListSectorUsersUseCase::new(MockUserQuery {
            result: Ok(Vec::new()),
        });

        let users = uc.execute("Atlantis").await.unwrap();
        assert!(users.is_empty());
    }

    #[tokio::test]
    async fn query_errors_are_propagated() {
        let uc = ListSectorUsersUseCase::new(MockUserQuery {
            result: Err(UserQueryError::DatabaseError("boom".to_string())),
        });

        let err = uc.execute("Bengaluru").await.unwrap_err();
        assert!(matches!(err, ListSectorUsersError::QueryError(_)));
    }
}
