use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use log::info;
use rusqlite::Connection;
use serde::{Deserialize, Serialize};

use crate::database::{players, ratings};
use crate::errors::dataset_context;

/// Rating lists of both feeds in the JSON exchange format
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub domestic_players: Vec<DomesticEntry>,
    #[serde(default)]
    pub international_players: Vec<InternationalEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomesticEntry {
    pub id: i64,
    pub name: String,
    pub federation: Option<String>,
    pub gender: Option<String>,
    #[serde(default)]
    pub deceased: bool,
    #[serde(default)]
    pub ratings: Vec<DomesticRatingEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomesticRatingEntry {
    pub list: NaiveDate,
    pub rating: i32,
    #[serde(default = "default_full")]
    pub full: bool,
}

fn default_full() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InternationalEntry {
    pub id: i64,
    pub name: String,
    pub domestic_id: Option<i64>,
    #[serde(default)]
    pub ratings: Vec<InternationalRatingEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InternationalRatingEntry {
    pub period: NaiveDate,
    pub rating: i32,
}

/// Row counts written by [`Dataset::store`]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ImportSummary {
    pub domestic_players: usize,
    pub domestic_ratings: usize,
    pub international_players: usize,
    pub international_ratings: usize,
}

impl Dataset {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let display = path.display().to_string();

        let json = fs::read_to_string(path).with_context(|| dataset_context("read", &display))?;
        let dataset: Dataset = serde_json::from_str(&json)
            .with_context(|| dataset_context("parse", &display))?;

        info!(
            "Loaded {} domestic and {} international players from {}",
            dataset.domestic_players.len(),
            dataset.international_players.len(),
            display
        );
        Ok(dataset)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse dataset JSON")
    }

    /// Insert every player and rating; callers wrap this in a transaction.
    pub fn store(&self, conn: &Connection) -> Result<ImportSummary> {
        let mut summary = ImportSummary::default();

        for entry in &self.domestic_players {
            players::insert_domestic_player(
                conn,
                entry.id,
                &entry.name,
                entry.federation.as_deref(),
                entry.gender.as_deref(),
                entry.deceased,
            )?;
            summary.domestic_players += 1;

            for rating in &entry.ratings {
                ratings::insert_domestic_rating(
                    conn,
                    entry.id,
                    rating.list,
                    rating.rating,
                    rating.full,
                )?;
                summary.domestic_ratings += 1;
            }
        }

        for entry in &self.international_players {
            players::insert_international_player(conn, entry.id, &entry.name, entry.domestic_id)?;
            summary.international_players += 1;

            for rating in &entry.ratings {
                ratings::insert_international_rating(conn, entry.id, rating.period, rating.rating)?;
                summary.international_ratings += 1;
            }
        }

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::setup;

    const SAMPLE: &str = r#"{
        "domestic_players": [
            {
                "id": 1,
                "name": "Byrne, Sean",
                "federation": "IRL",
                "gender": "M",
                "ratings": [
                    { "list": "2023-05-01", "rating": 2100 },
                    { "list": "2022-05-01", "rating": 2050, "full": false }
                ]
            }
        ],
        "international_players": [
            {
                "id": 250,
                "name": "Byrne, Sean",
                "domestic_id": 1,
                "ratings": [{ "period": "2023-07-01", "rating": 2150 }]
            }
        ]
    }"#;

    #[test]
    fn test_parse_defaults() {
        let dataset = Dataset::from_json(SAMPLE).unwrap();
        let player = &dataset.domestic_players[0];
        assert!(!player.deceased);
        assert!(player.ratings[0].full);
        assert!(!player.ratings[1].full);
        assert_eq!(dataset.international_players[0].domestic_id, Some(1));
    }

    #[test]
    fn test_store_counts_rows() {
        let conn = Connection::open_in_memory().unwrap();
        setup::reset_database(&conn).unwrap();

        let summary = Dataset::from_json(SAMPLE).unwrap().store(&conn).unwrap();
        assert_eq!(
            summary,
            ImportSummary {
                domestic_players: 1,
                domestic_ratings: 2,
                international_players: 1,
                international_ratings: 1,
            }
        );

        let player = players::find_domestic_by_id(&conn, 1).unwrap().unwrap();
        assert_eq!(player.federation.as_deref(), Some("IRL"));
        let linked = players::find_international_by_domestic_id(&conn, 1).unwrap().unwrap();
        assert_eq!(linked.id, 250);
    }

    #[test]
    fn test_rejects_malformed_dates() {
        let json = r#"{ "domestic_players": [{ "id": 1, "name": "X", "federation": null, "gender": null,
            "ratings": [{ "list": "May 2023", "rating": 2000 }] }] }"#;
        assert!(Dataset::from_json(json).is_err());
    }
}
