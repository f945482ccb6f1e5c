use async_trait::async_trait;

use crate::directory::application::domain::PincodeEntry;
use crate::directory::application::ports::outgoing::{DirectoryQuery, DirectoryQueryError};

#[derive(Debug, Clone, thiserror::Error)]
pub enum LookupPincodeError {
    #[error("Invalid pincode format. Must be 6 digits.")]
    InvalidFormat,

    #[error("Pincode not found")]
    NotFound,

    #[error("Query error: {0}")]
    QueryError(#[from] DirectoryQueryError),
}

#[async_trait]
pub trait ILookupPincodeUseCase: Send + Sync {
    async fn execute(&self, code: &str) -> Result<PincodeEntry, LookupPincodeError>;
}

pub struct LookupPincodeUseCase<Q>
where
    Q: DirectoryQuery + Send + Sync,
{
    query: Q,
}

impl<Q> LookupPincodeUseCase<Q>
where
    Q: DirectoryQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ILookupPincodeUseCase for LookupPincodeUseCase<Q>
where
    Q: DirectoryQuery + Send + Sync,
{
    async fn execute(&self, code: &str) -> Result<PincodeEntry, LookupPincodeError> {
        let code = code.trim();
        if code.len() != 6 || !code.bytes().all(|b| b.is_ascii_digit()) {
            return Err(LookupPincodeError::InvalidFormat);
        }

        self.query
            .find_by_code(code)
            .await?
            .ok_or(LookupPincodeError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::application::domain::SectorRecord;

    struct MockDirectoryQuery {
        entry: Option<PincodeEntry>,
        fail: bool,
    }

    #[async_trait]
    impl DirectoryQuery for MockDirectoryQuery {
        async fn find_by_code(
            &self,
            _code: &str,
        ) -> Result<Option<PincodeEntry>, DirectoryQueryError> {
            if self.fail {
                return Err(DirectoryQueryError::DatabaseError("boom".to_string()));
            }
            Ok(self.entry.clone())
        }

        async fn list_sectors(&self) -> Result<Vec<SectorRecord>, DirectoryQueryError> {
            unimplemented!("not used")
        }

        async fn find_sector(
            &self,
            _name: &str,
        ) -> Result<Option<SectorRecord>, DirectoryQueryError> {
            unimplemented!("not used")
        }

        async fn list_by_sector(
            &self,
            _sector: &str,
        ) -> Result<Vec<PincodeEntry>, DirectoryQueryError> {
            unimplemented!("not used")
        }

        async fn search(
            &self,
            _query: &str,
            _limit: u64,
        ) -> Result<Vec<PincodeEntry>, DirectoryQueryError> {
            unimplemented!("not used")
        }

        async fn count_codes(&self) -> Result<u64, DirectoryQueryError> {
            unimplemented!("not used")
        }
    }

    fn central_bengaluru() -> PincodeEntry {
        PincodeEntry {
            code: "560001".to_string(),
            sector: "Bengaluru".to_string(),
            area_name: "Central Bengaluru".to_string(),
            pools: vec!["IT Sector".to_string(), "Government Services".to_string()],
        }
    }

    #[tokio::test]
    async fn returns_mapping_for_known_code() {
        let uc = LookupPincodeUseCase::new(MockDirectoryQuery {
            entry: Some(central_bengaluru()),
            fail: false,
        });

        let entry = uc.execute("560001").await.unwrap();
        assert_eq!(entry.sector, "Bengaluru");
        assert_eq!(entry.area_name, "Central Bengaluru");
    }

    #[tokio::test]
    async fn trims_whitespace_before_lookup() {
        let uc = LookupPincodeUseCase::new(MockDirectoryQuery {
            entry: Some(central_bengaluru()),
            fail: false,
        });

        assert!(uc.execute("  560001  ").await.is_ok());
    }

    #[tokio::test]
    async fn rejects_malformed_codes() {
        let uc = LookupPincodeUseCase::new(MockDirectoryQuery {
            entry: Some(central_bengaluru()),
            fail: false,
        });

        for code in ["56000", "5600011", "56000a", "", "56 001"] {
            let err = uc.execute(code).await.unwrap_err();
            assert!(
                matches!(err, LookupPincodeError::InvalidFormat),
                "code: {code:?}"
            );
        }
    }

    #[tokio::test]
    async fn unknown_code_is_not_found() {
        let uc = LookupPincodeUseCase::new(MockDirectoryQuery {
            entry: None,
            fail: false,
        });

        let err = uc.execute("999999").await.unwrap_err();
        assert!(matches!(err, LookupPincodeError::NotFound));
    }

    #[tokio::test]
    async fn propagates_query_errors() {
        let uc = LookupPincodeUseCase::new(MockDirectoryQuery {
            entry: None,
            fail: true,
        });

        let err = uc.execute("560001").await.unwrap_err();
        assert!(matches!(err, LookupPincodeError::QueryError(_)));
    }
}
