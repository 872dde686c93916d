use std::collections::BTreeMap;

use serde::Serialize;

use crate::config::menus::MenuEntry;
use crate::rating::types::{Period, PeriodLists, PlayerRow, RatingHistory, Source};
use crate::rating::{GenderFilter, Method};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WarListItem {
    pub rank: usize,
    pub player_id: i64,
    pub name: String,
    pub domestic: BTreeMap<Period, i32>,
    pub international: BTreeMap<Period, i32>,
    pub average: f64,
}

impl WarListItem {
    /// Only the windowed lists are shown next to the average
    pub fn from_row(rank: usize, row: &PlayerRow, lists: &PeriodLists) -> Self {
        Self {
            rank,
            player_id: row.player.id,
            name: row.player.name.clone(),
            domestic: windowed(&row.domestic, lists.get(&Source::Domestic)),
            international: windowed(&row.international, lists.get(&Source::International)),
            average: row.average,
        }
    }
}

fn windowed(history: &RatingHistory, periods: Option<&Vec<Period>>) -> BTreeMap<Period, i32> {
    periods
        .into_iter()
        .flatten()
        .filter_map(|period| history.get(period).map(|rating| (*period, *rating)))
        .collect()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WarResponse {
    pub method: Method,
    pub gender: GenderFilter,
    pub year: Option<i32>,
    pub available: bool,
    pub lists: Option<PeriodLists>,
    pub items: Vec<WarListItem>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub label: String,
    pub key: String,
}

impl From<&MenuEntry> for MenuItem {
    fn from(entry: &MenuEntry) -> Self {
        Self {
            label: entry.label.to_string(),
            key: entry.key.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenusResponse {
    pub methods: Vec<MenuItem>,
    pub genders: Vec<MenuItem>,
}
