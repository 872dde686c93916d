use serde::{Serialize, Serializer};

use super::types::{Period, PeriodLists, PlayerRow, Source};
use crate::errors::WarError;

/// Selectable averaging method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// Three year weighted average
    #[default]
    #[serde(rename = "war")]
    Weighted,
    /// Simple average of the latest ratings
    Simple,
}

impl Method {
    /// Anything other than "simple" selects the default weighted method
    pub fn from_key(key: Option<&str>) -> Self {
        match key {
            Some("simple") => Method::Simple,
            _ => Method::Weighted,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Method::Weighted => "war",
            Method::Simple => "simple",
        }
    }

    pub fn scheme(&self) -> WeightingScheme {
        match self {
            Method::Weighted => WeightingScheme::new(
                vec![0.2, 0.3, 0.5],
                vec![(Source::Domestic, 0.6), (Source::International, 0.4)],
            ),
            Method::Simple => WeightingScheme::new(
                vec![1.0],
                vec![(Source::Domestic, 0.5), (Source::International, 0.5)],
            ),
        }
    }
}

/// Serialized as its menu key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenderFilter {
    #[default]
    All,
    Women,
}

impl GenderFilter {
    pub fn from_key(key: &str) -> Result<Self, WarError> {
        match key {
            "" => Ok(GenderFilter::All),
            "F" => Ok(GenderFilter::Women),
            other => Err(WarError::UnknownGender(other.to_string())),
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            GenderFilter::All => "",
            GenderFilter::Women => "F",
        }
    }

    pub fn women_only(&self) -> bool {
        matches!(self, GenderFilter::Women)
    }
}

impl Serialize for GenderFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

/// Year weights run oldest to newest; their count is the lookback window.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightingScheme {
    year_weights: Vec<f64>,
    source_weights: Vec<(Source, f64)>,
}

impl WeightingScheme {
    pub fn new(year_weights: Vec<f64>, source_weights: Vec<(Source, f64)>) -> Self {
        Self {
            year_weights,
            source_weights,
        }
    }

    pub fn years(&self) -> usize {
        self.year_weights.len()
    }

    pub fn sources(&self) -> Vec<Source> {
        self.source_weights.iter().map(|(source, _)| *source).collect()
    }

    pub fn year_weights(&self) -> &[f64] {
        &self.year_weights
    }

    pub fn source_weights(&self) -> &[(Source, f64)] {
        &self.source_weights
    }
}

/// Weighted average rating of one player over the windowed periods
pub fn score(row: &PlayerRow, lists: &PeriodLists, scheme: &WeightingScheme) -> f64 {
    let mut total = 0.0;
    let mut weight = 0.0;

    for &(source, source_weight) in scheme.source_weights() {
        let periods = lists.get(&source).map(Vec::as_slice).unwrap_or(&[]);
        if let Some(average) = source_average(row, source, periods, scheme.year_weights()) {
            total += source_weight * average;
            weight += source_weight;
        }
    }

    if weight > 0.0 { total / weight } else { 0.0 }
}

/// Re-normalised over the periods the player actually has; None when there are none.
fn source_average(
    row: &PlayerRow,
    source: Source,
    periods: &[Period],
    year_weights: &[f64],
) -> Option<f64> {
    let history = row.history(source);
    let mut total = 0.0;
    let mut weight = 0.0;

    for (period, year_weight) in periods.iter().zip(year_weights) {
        if let Some(&rating) = history.get(period) {
            total += year_weight * f64::from(rating);
            weight += year_weight;
        }
    }

    (weight > 0.0).then(|| total / weight)
}
