use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use crate::config::settings::AppConfig;
use crate::database::{self, DbPool};
use crate::dataset::{Dataset, ImportSummary};

pub struct ImportService {
    config: AppConfig,
}

impl ImportService {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn run(&self, path: &Path, reset: bool) -> Result<()> {
        let pool = database::create_pool(&self.config.database.path)?;
        let dataset = Dataset::load(path)?;
        let summary = import_into(&pool, &dataset, reset)?;

        info!(
            "Imported {} domestic players ({} ratings) and {} international players ({} ratings)",
            summary.domestic_players,
            summary.domestic_ratings,
            summary.international_players,
            summary.international_ratings
        );
        Ok(())
    }

    pub fn run_setup(&self) -> Result<()> {
        let pool = database::create_pool(&self.config.database.path)?;
        let conn = database::get_connection(&pool)?;
        database::setup::reset_database(&conn)
    }
}

/// Store the dataset atomically, optionally recreating the schema first
pub fn import_into(pool: &DbPool, dataset: &Dataset, reset: bool) -> Result<ImportSummary> {
    let mut conn = database::get_connection(pool)?;

    if reset {
        database::setup::reset_database(&conn)?;
    }

    let tx = conn.transaction().context("Failed to start import transaction")?;
    let summary = dataset.store(&tx)?;
    tx.commit().context("Failed to commit import transaction")?;

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::players;
    use crate::dataset::DomesticEntry;

    fn entry(id: i64) -> DomesticEntry {
        DomesticEntry {
            id,
            name: format!("Player {id}"),
            federation: None,
            gender: None,
            deceased: false,
            ratings: vec![],
        }
    }

    #[test]
    fn test_failed_import_rolls_back() {
        let pool = database::create_memory_pool().unwrap();
        let dataset = Dataset {
            domestic_players: vec![entry(1), entry(1)],
            international_players: vec![],
        };

        assert!(import_into(&pool, &dataset, true).is_err());

        let conn = database::get_connection(&pool).unwrap();
        assert_eq!(players::count_players(&conn, "domestic_players").unwrap(), 0);
    }

    #[test]
    fn test_import_with_reset() {
        let pool = database::create_memory_pool().unwrap();
        let dataset = Dataset {
            domestic_players: vec![entry(1), entry(2)],
            international_players: vec![],
        };

        let summary = import_into(&pool, &dataset, true).unwrap();
        assert_eq!(summary.domestic_players, 2);

        // Reset again wipes the previous import
        import_into(&pool, &Dataset::default(), true).unwrap();
        let conn = database::get_connection(&pool).unwrap();
        assert_eq!(players::count_players(&conn, "domestic_players").unwrap(), 0);
    }
}
