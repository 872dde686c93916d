use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

pub type PlayerId = i64;
pub type RatingValue = i32;
pub type Year = i32;

/// A published rating list, identified by its publication date
pub type Period = NaiveDate;

/// Ratings a player holds in one source, keyed by list
pub type RatingHistory = BTreeMap<Period, RatingValue>;

pub fn period_year(period: &Period) -> Year {
    period.year()
}

/// The two rating feeds combined by the aggregator
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Domestic,
    International,
}

impl Source {
    pub fn as_str(&self) -> &str {
        match self {
            Source::Domestic => "domestic",
            Source::International => "international",
        }
    }

    pub fn ratings_table(&self) -> &'static str {
        match self {
            Source::Domestic => "domestic_ratings",
            Source::International => "international_ratings",
        }
    }

    pub fn players_table(&self) -> &'static str {
        match self {
            Source::Domestic => "domestic_players",
            Source::International => "international_players",
        }
    }

    pub fn period_column(&self) -> &'static str {
        match self {
            Source::Domestic => "list",
            Source::International => "period",
        }
    }
}

/// Per-source period lists for the lookback window, oldest first
pub type PeriodLists = BTreeMap<Source, Vec<Period>>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRef {
    pub id: PlayerId,
    pub name: String,
}

/// One domestic player together with every domestic rating they hold
#[derive(Debug, Clone, PartialEq)]
pub struct DomesticRecord {
    pub player: PlayerRef,
    pub history: RatingHistory,
}

/// One international player linked back to a domestic player id
#[derive(Debug, Clone, PartialEq)]
pub struct InternationalRecord {
    pub domestic_id: PlayerId,
    pub history: RatingHistory,
}

/// A ranking candidate with both rating histories joined together
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerRow {
    pub player: PlayerRef,
    pub domestic: RatingHistory,
    pub international: RatingHistory,
    pub average: f64,
}

impl PlayerRow {
    pub fn new(player: PlayerRef, domestic: RatingHistory) -> Self {
        Self {
            player,
            domestic,
            international: RatingHistory::new(),
            average: 0.0,
        }
    }

    pub fn history(&self, source: Source) -> &RatingHistory {
        match source {
            Source::Domestic => &self.domestic,
            Source::International => &self.international,
        }
    }
}
