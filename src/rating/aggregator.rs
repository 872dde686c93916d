use std::cell::OnceCell;
use std::collections::HashMap;

use anyhow::Result;
use log::{debug, info};

use super::source::{Eligibility, RatingSource};
use super::types::{
    period_year, InternationalRecord, Period, PeriodLists, PlayerId, PlayerRow, Source, Year,
};
use super::weighting::{score, GenderFilter, Method, WeightingScheme};
use crate::config::settings::WarSettings;
use crate::errors::WarError;

/// Weighted average rating ranking for one request.
///
/// Derived values are computed on first use and kept for the lifetime of the
/// instance; build a fresh aggregator per request.
pub struct WarAggregator<'a, S: RatingSource> {
    source: &'a S,
    method: Method,
    gender: GenderFilter,
    scheme: WeightingScheme,
    eligibility: Eligibility,
    maximum: usize,
    lists: OnceCell<Option<PeriodLists>>,
    players: OnceCell<Vec<PlayerRow>>,
}

impl<'a, S: RatingSource> WarAggregator<'a, S> {
    pub fn new(
        source: &'a S,
        method: Method,
        gender: GenderFilter,
        settings: &WarSettings,
    ) -> Self {
        Self {
            source,
            method,
            gender,
            scheme: method.scheme(),
            eligibility: Eligibility::new(settings, gender),
            maximum: settings.maximum,
            lists: OnceCell::new(),
            players: OnceCell::new(),
        }
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn gender(&self) -> GenderFilter {
        self.gender
    }

    pub fn scheme(&self) -> &WeightingScheme {
        &self.scheme
    }

    pub fn years(&self) -> usize {
        self.scheme.years()
    }

    pub fn sources(&self) -> Vec<Source> {
        self.scheme.sources()
    }

    /// Latest year in which both sources published at least one list
    pub fn latest_common_year(&self) -> Result<Option<Year>> {
        let domestic = self.source.latest_period(Source::Domestic)?;
        let international = self.source.latest_period(Source::International)?;

        Ok(match (domestic, international) {
            (Some(d), Some(i)) => Some(period_year(&d).min(period_year(&i))),
            _ => None,
        })
    }

    /// Latest list of each year in the window ending at `year`, oldest first.
    /// Years without a list are skipped, so the result may be short.
    pub fn periods_for(&self, source: Source, year: Year) -> Result<Vec<Period>> {
        let mut periods = Vec::with_capacity(self.years());

        for offset in 0..self.years() {
            let target = year - offset as Year;
            if let Some(period) = self.source.maximal_period_for_year(source, target)? {
                periods.insert(0, period);
            }
        }

        Ok(periods)
    }

    /// Period lists for every participating source; None when the sources share no year
    pub fn lists(&self) -> Result<Option<&PeriodLists>> {
        if let Some(lists) = self.lists.get() {
            return Ok(lists.as_ref());
        }

        let computed = self.compute_lists()?;
        Ok(self.lists.get_or_init(|| computed).as_ref())
    }

    fn compute_lists(&self) -> Result<Option<PeriodLists>> {
        let Some(year) = self.latest_common_year()? else {
            info!("No common rating year between sources");
            return Ok(None);
        };

        let mut lists = PeriodLists::new();
        for source in self.sources() {
            let periods = self.periods_for(source, year)?;
            debug!("{} lists for {}: {:?}", source.as_str(), year, periods);
            lists.insert(source, periods);
        }

        Ok(Some(lists))
    }

    /// True when every source has a list for every year of the window
    pub fn is_available(&self) -> Result<bool> {
        let Some(lists) = self.lists()? else {
            return Ok(false);
        };

        let complete = self
            .sources()
            .iter()
            .filter(|source| lists.get(*source).is_some_and(|l| l.len() == self.years()))
            .count();

        Ok(complete == self.sources().len())
    }

    /// Eligible domestic players keyed by id, in join order
    pub fn load_domestic_rows(&self) -> Result<Vec<PlayerRow>> {
        let periods = self.window(Source::Domestic)?;
        let records = self
            .source
            .eligible_domestic_players(&periods, &self.eligibility)?;

        Ok(records
            .into_iter()
            .map(|record| PlayerRow::new(record.player, record.history))
            .collect())
    }

    fn load_international(&self, rows: &[PlayerRow]) -> Result<Vec<InternationalRecord>> {
        let periods = self.window(Source::International)?;
        let ids: Vec<PlayerId> = rows.iter().map(|row| row.player.id).collect();
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        self.source.international_histories(&ids, &periods)
    }

    fn window(&self, source: Source) -> Result<Vec<Period>> {
        let lists = self.lists()?.ok_or(WarError::Unavailable)?;
        Ok(lists.get(&source).cloned().unwrap_or_default())
    }

    pub fn score(&self, row: &PlayerRow) -> Result<f64> {
        let lists = self.lists()?.ok_or(WarError::Unavailable)?;
        Ok(score(row, lists, &self.scheme))
    }

    /// Top players by weighted average rating, best first.
    ///
    /// Fails with [`WarError::Unavailable`] when the sources share no year;
    /// check [`Self::is_available`] first.
    pub fn players(&self) -> Result<&[PlayerRow]> {
        if let Some(players) = self.players.get() {
            return Ok(players);
        }

        let computed = self.rank()?;
        Ok(self.players.get_or_init(|| computed))
    }

    fn rank(&self) -> Result<Vec<PlayerRow>> {
        let lists = self.lists()?.ok_or(WarError::Unavailable)?;

        let domestic = self.load_domestic_rows()?;
        let international = self.load_international(&domestic)?;
        let mut rows = join_international(domestic, international);
        info!("Scoring {} candidate players", rows.len());

        for row in rows.iter_mut() {
            row.average = score(row, lists, &self.scheme);
        }

        // Stable: equal averages keep join order
        rows.sort_by(|a, b| b.average.total_cmp(&a.average));
        rows.truncate(self.maximum);

        Ok(rows)
    }
}

/// Attach international histories to the matching domestic rows.
/// Rows without a linked international player keep an empty history.
pub fn join_international(
    rows: Vec<PlayerRow>,
    records: Vec<InternationalRecord>,
) -> Vec<PlayerRow> {
    let index: HashMap<PlayerId, usize> = rows
        .iter()
        .enumerate()
        .map(|(idx, row)| (row.player.id, idx))
        .collect();

    let mut joined = rows;
    for record in records {
        match index.get(&record.domestic_id) {
            Some(&idx) => joined[idx].international.extend(record.history),
            None => debug!(
                "Ignoring international record for unknown player {}",
                record.domestic_id
            ),
        }
    }

    joined
}
