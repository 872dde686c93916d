use anyhow::Result;

use super::types::{
    DomesticRecord, InternationalRecord, Period, PlayerId, RatingValue, Source, Year,
};
use super::weighting::GenderFilter;
use crate::config::settings::WarSettings;

/// Filter applied when choosing the domestic candidate pool
#[derive(Debug, Clone, PartialEq)]
pub struct Eligibility {
    pub home_federation: String,
    pub min_rating: RatingValue,
    pub women_only: bool,
}

impl Eligibility {
    pub fn new(settings: &WarSettings, gender: GenderFilter) -> Self {
        let min_rating = if gender.women_only() {
            settings.women_threshold
        } else {
            settings.general_threshold
        };

        Self {
            home_federation: settings.home_federation.clone(),
            min_rating,
            women_only: gender.women_only(),
        }
    }
}

/// Read access to the published rating lists of both feeds
pub trait RatingSource {
    /// Most recent list published by the source
    fn latest_period(&self, source: Source) -> Result<Option<Period>>;

    /// Most recent list published by the source during the given year
    fn maximal_period_for_year(&self, source: Source, year: Year) -> Result<Option<Period>>;

    /// Each eligible player once, ordered by id, with their full domestic history.
    /// A player is eligible if a full record at or above the threshold exists in one of `periods`.
    fn eligible_domestic_players(
        &self,
        periods: &[Period],
        eligibility: &Eligibility,
    ) -> Result<Vec<DomesticRecord>>;

    /// Full international history of players linked to `domestic_ids` and rated in one of `periods`
    fn international_histories(
        &self,
        domestic_ids: &[PlayerId],
        periods: &[Period],
    ) -> Result<Vec<InternationalRecord>>;
}

#[cfg(test)]
pub(crate) mod fake {
    use std::cell::Cell;

    use chrono::Datelike;

    use super::*;
    use crate::rating::types::{PlayerRef, RatingHistory};

    #[derive(Debug, Clone)]
    pub struct FakeDomestic {
        pub id: PlayerId,
        pub name: String,
        pub federation: Option<String>,
        pub women: bool,
        pub deceased: bool,
        pub ratings: Vec<(Period, RatingValue, bool)>,
    }

    impl FakeDomestic {
        pub fn new(id: PlayerId, ratings: &[(Period, RatingValue)]) -> Self {
            Self {
                id,
                name: format!("Player {id}"),
                federation: Some("IRL".to_string()),
                women: false,
                deceased: false,
                ratings: ratings.iter().map(|&(p, r)| (p, r, true)).collect(),
            }
        }
    }

    #[derive(Debug, Clone)]
    pub struct FakeInternational {
        pub domestic_id: Option<PlayerId>,
        pub ratings: Vec<(Period, RatingValue)>,
    }

    /// In-memory source counting every query it answers
    #[derive(Debug, Default)]
    pub struct FakeSource {
        pub domestic: Vec<FakeDomestic>,
        pub international: Vec<FakeInternational>,
        pub queries: Cell<usize>,
    }

    impl FakeSource {
        fn periods(&self, source: Source) -> Vec<Period> {
            match source {
                Source::Domestic => self
                    .domestic
                    .iter()
                    .flat_map(|p| p.ratings.iter().map(|r| r.0))
                    .collect(),
                Source::International => self
                    .international
                    .iter()
                    .flat_map(|p| p.ratings.iter().map(|r| r.0))
                    .collect(),
            }
        }

        fn count(&self) {
            self.queries.set(self.queries.get() + 1);
        }
    }

    impl RatingSource for FakeSource {
        fn latest_period(&self, source: Source) -> Result<Option<Period>> {
            self.count();
            Ok(self.periods(source).into_iter().max())
        }

        fn maximal_period_for_year(&self, source: Source, year: Year) -> Result<Option<Period>> {
            self.count();
            Ok(self
                .periods(source)
                .into_iter()
                .filter(|p| p.year() == year)
                .max())
        }

        fn eligible_domestic_players(
            &self,
            periods: &[Period],
            eligibility: &Eligibility,
        ) -> Result<Vec<DomesticRecord>> {
            self.count();
            let mut players: Vec<&FakeDomestic> = self
                .domestic
                .iter()
                .filter(|p| !p.deceased)
                .filter(|p| match &p.federation {
                    Some(fed) => *fed == eligibility.home_federation,
                    None => true,
                })
                .filter(|p| !eligibility.women_only || p.women)
                .filter(|p| {
                    p.ratings.iter().any(|&(period, rating, full)| {
                        full && rating >= eligibility.min_rating && periods.contains(&period)
                    })
                })
                .collect();
            players.sort_by_key(|p| p.id);

            Ok(players
                .into_iter()
                .map(|p| DomesticRecord {
                    player: PlayerRef {
                        id: p.id,
                        name: p.name.clone(),
                    },
                    history: p
                        .ratings
                        .iter()
                        .map(|&(period, rating, _)| (period, rating))
                        .collect(),
                })
                .collect())
        }

        fn international_histories(
            &self,
            domestic_ids: &[PlayerId],
            periods: &[Period],
        ) -> Result<Vec<InternationalRecord>> {
            self.count();
            Ok(self
                .international
                .iter()
                .filter_map(|p| {
                    let domestic_id = p.domestic_id.filter(|id| domestic_ids.contains(id))?;
                    let rated = p.ratings.iter().any(|(period, _)| periods.contains(period));
                    rated.then(|| InternationalRecord {
                        domestic_id,
                        history: p.ratings.iter().copied().collect::<RatingHistory>(),
                    })
                })
                .collect())
        }
    }
}
