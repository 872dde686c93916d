use chrono::{NaiveDate, NaiveDateTime};

#[derive(Debug, Clone)]
pub struct DomesticPlayer {
    pub id: i64,
    pub name: String,
    pub federation: Option<String>,
    pub gender: Option<String>,
    pub deceased: bool,
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone)]
pub struct DomesticRating {
    pub id: i64,
    pub player_id: i64,
    pub list: NaiveDate,
    pub rating: i32,
    pub full: bool,
}

#[derive(Debug, Clone)]
pub struct InternationalPlayer {
    pub id: i64,
    pub name: String,
    pub domestic_id: Option<i64>,
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone)]
pub struct InternationalRating {
    pub id: i64,
    pub player_id: i64,
    pub period: NaiveDate,
    pub rating: i32,
}

// Rows for the candidate queries
#[derive(Debug, Clone)]
pub struct HistoryRow {
    pub player_id: i64,
    pub period: NaiveDate,
    pub rating: i32,
}

#[derive(Debug, Clone)]
pub struct LinkRow {
    pub player_id: i64,
    pub domestic_id: i64,
}
