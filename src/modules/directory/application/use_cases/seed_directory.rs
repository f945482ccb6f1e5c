use tracing::info;

use crate::directory::application::domain::{seed_data, PincodeEntry, SectorRecord};
use crate::directory::application::ports::outgoing::{
    DirectoryQuery, DirectoryQueryError, DirectoryRepository, DirectoryRepositoryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum SeedDirectoryError {
    #[error("Query error: {0}")]
    QueryError(#[from] DirectoryQueryError),

    #[error("Repository error: {0}")]
    RepositoryError(#[from] DirectoryRepositoryError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedOutcome {
    Seeded { pincodes: usize, sectors: usize },
    AlreadyPopulated,
}

/// Groups mappings into sector aggregates. Sector order follows the first
/// occurrence in `entries`; pools are unioned without duplicates in the same
/// order.
pub fn derive_sectors(entries: &[PincodeEntry]) -> Vec<SectorRecord> {
    let mut sectors: Vec<SectorRecord> = Vec::new();

    for entry in entries {
        let idx = match sectors.iter().position(|s| s.name == entry.sector) {
            Some(idx) => idx,
            None => {
                sectors.push(SectorRecord {
                    name: entry.sector.clone(),
                    pincodes: Vec::new(),
                    pools: Vec::new(),
                    description: None,
                });
                sectors.len() - 1
            }
        };

        let record = &mut sectors[idx];
        record.pincodes.push(entry.code.clone());
        for pool in &entry.pools {
            if !record.pools.contains(pool) {
                record.pools.push(pool.clone());
            }
        }
    }

    sectors
}

/// Bootstrap-only: loads the bundled dataset into an empty directory. Runs
/// once at server start and is not reachable over HTTP.
pub struct SeedDirectoryUseCase<Q, R>
where
    Q: DirectoryQuery + Send + Sync,
    R: DirectoryRepository + Send + Sync,
{
    query: Q,
    repository: R,
}

impl<Q, R> SeedDirectoryUseCase<Q, R>
where
    Q: DirectoryQuery + Send + Sync,
    R: DirectoryRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }

    pub async fn execute(&self) -> Result<SeedOutcome, SeedDirectoryError> {
        if self.query.count_codes().await? > 0 {
            return Ok(SeedOutcome::AlreadyPopulated);
        }

        let entries = seed_data::bundled_directory();
        let sectors = derive_sectors(&entries);
        let counts = (entries.len(), sectors.len());

        self.repository.replace_all(entries, sectors).await?;

        info!(
            pincodes = counts.0,
            sectors = counts.1,
            "Directory seeded from bundled dataset"
        );

        Ok(SeedOutcome::Seeded {
            pincodes: counts.0,
            sectors: counts.1,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    fn entry(code: &str, sector: &str, pools: &[&str]) -> PincodeEntry {
        PincodeEntry {
            code: code.to_string(),
            sector: sector.to_string(),
            area_name: format!("Area {code}"),
            pools: pools.iter().map(|p| p.to_string()).collect(),
        }
    }

    #[test]
    fn derive_sectors_groups_in_first_seen_order() {
        let entries = vec![
            entry("560001", "Bengaluru", &["IT", "Gov"]),
            entry("570001", "Mysore", &["Tourism"]),
            entry("560002", "Bengaluru", &["Gov", "Retail"]),
        ];

        let sectors = derive_sectors(&entries);
        assert_eq!(sectors.len(), 2);

        assert_eq!(sectors[0].name, "Bengaluru");
        assert_eq!(sectors[0].pincodes, vec!["560001", "560002"]);
        assert_eq!(sectors[0].pools, vec!["IT", "Gov", "Retail"]);
        assert!(sectors[0].description.is_none());

        assert_eq!(sectors[1].name, "Mysore");
        assert_eq!(sectors[1].pincodes, vec!["570001"]);
    }

    #[test]
    fn derive_sectors_over_bundled_dataset() {
        let sectors = derive_sectors(&seed_data::bundled_directory());
        assert_eq!(sectors.len(), 2);
        assert_eq!(sectors[0].name, "Bengaluru");
        assert_eq!(sectors[0].pincodes.len(), 10);
        assert_eq!(sectors[1].name, "Mysore");
        assert_eq!(sectors[1].pincodes.len(), 10);
    }

    struct MockQuery {
        count: u64,
    }

    #[async_trait]
    impl DirectoryQuery for MockQuery {
        async fn find_by_code(
            &self,
            _code: &str,
        ) -> Result<Option<PincodeEntry>, DirectoryQueryError> {
            unimplemented!("not used")
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
            Ok(self.count)
        }
    }

    #[derive(Default)]
    struct RecordingRepository {
        saved: Mutex<Option<(usize, usize)>>,
    }

    #[async_trait]
    impl DirectoryRepository for RecordingRepository {
        async fn replace_all(
            &self,
            entries: Vec<PincodeEntry>,
            sectors: Vec<SectorRecord>,
        ) -> Result<(), DirectoryRepositoryError> {
            *self.saved.lock().unwrap() = Some((entries.len(), sectors.len()));
            Ok(())
        }
    }

    #[tokio::test]
    async fn seeds_when_directory_is_empty() {
        let uc = SeedDirectoryUseCase::new(MockQuery { count: 0 }, RecordingRepository::default());

        let outcome = uc.execute().await.unwrap();
        assert_eq!(
            outcome,
            SeedOutcome::Seeded {
                pincodes: 20,
                sectors: 2
            }
        );
        assert_eq!(*uc.repository.saved.lock().unwrap(), Some((20, 2)));
    }

    #[tokio::test]
    async fn skips_populated_directory() {
        let uc = SeedDirectoryUseCase::new(MockQuery { count: 20 }, RecordingRepository::default());

        let outcome = uc.execute().await.unwrap();
        assert_eq!(outcome, SeedOutcome::AlreadyPopulated);
        assert!(uc.repository.saved.lock().unwrap().is_none());
    }
}
