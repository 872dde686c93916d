use std::collections::BTreeMap;

use anyhow::Result;
use log::debug;

use super::connection::{get_connection, DbPool};
use super::ratings;
use crate::rating::types::{
    DomesticRecord, InternationalRecord, Period, PlayerId, PlayerRef, RatingHistory, Source, Year,
};
use crate::rating::{Eligibility, RatingSource};

/// Rating lists stored in the SQLite database
pub struct SqliteSource {
    pool: DbPool,
}

impl SqliteSource {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn histories(
        &self,
        source: Source,
        ids: &[PlayerId],
    ) -> Result<BTreeMap<PlayerId, RatingHistory>> {
        let conn = get_connection(&self.pool)?;
        let mut histories: BTreeMap<PlayerId, RatingHistory> = BTreeMap::new();

        for row in ratings::list_histories(&conn, source, ids)? {
            histories
                .entry(row.player_id)
                .or_default()
                .insert(row.period, row.rating);
        }

        Ok(histories)
    }
}

impl RatingSource for SqliteSource {
    fn latest_period(&self, source: Source) -> Result<Option<Period>> {
        let conn = get_connection(&self.pool)?;
        ratings::latest_period(&conn, source)
    }

    fn maximal_period_for_year(&self, source: Source, year: Year) -> Result<Option<Period>> {
        let conn = get_connection(&self.pool)?;
        ratings::maximal_period_for_year(&conn, source, year)
    }

    fn eligible_domestic_players(
        &self,
        periods: &[Period],
        eligibility: &Eligibility,
    ) -> Result<Vec<DomesticRecord>> {
        let players = {
            let conn = get_connection(&self.pool)?;
            ratings::list_eligible_domestic_ids(&conn, periods, eligibility)?
        };
        debug!("{} eligible domestic players", players.len());

        let ids: Vec<PlayerId> = players.iter().map(|(id, _)| *id).collect();
        let mut histories = self.histories(Source::Domestic, &ids)?;

        Ok(players
            .into_iter()
            .map(|(id, name)| DomesticRecord {
                player: PlayerRef { id, name },
                history: histories.remove(&id).unwrap_or_default(),
            })
            .collect())
    }

    fn international_histories(
        &self,
        domestic_ids: &[PlayerId],
        periods: &[Period],
    ) -> Result<Vec<InternationalRecord>> {
        let links = {
            let conn = get_connection(&self.pool)?;
            ratings::list_linked_international(&conn, domestic_ids, periods)?
        };
        debug!("{} linked international players", links.len());

        let ids: Vec<PlayerId> = links.iter().map(|link| link.player_id).collect();
        let mut histories = self.histories(Source::International, &ids)?;

        Ok(links
            .into_iter()
            .map(|link| InternationalRecord {
                domestic_id: link.domestic_id,
                history: histories.remove(&link.player_id).unwrap_or_default(),
            })
            .collect())
    }
}
