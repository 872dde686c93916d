use anyhow::{Context, Result};
use chrono::NaiveDate;
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection};

use super::models::{DomesticRating, HistoryRow, InternationalRating, LinkRow};
use crate::errors::query_context;
use crate::rating::{Eligibility, Source};

pub fn insert_domestic_rating(
    conn: &Connection,
    player_id: i64,
    list: NaiveDate,
    rating: i32,
    full: bool,
) -> Result<DomesticRating> {
    let sql = "INSERT INTO domestic_ratings (player_id, list, rating, full) VALUES (?1, ?2, ?3, ?4) RETURNING id, player_id, list, rating, full";

    conn.query_row(
        sql,
        params![player_id, list, rating, full],
        |row| {
            Ok(DomesticRating {
                id: row.get(0)?,
                player_id: row.get(1)?,
                list: row.get(2)?,
                rating: row.get(3)?,
                full: row.get(4)?,
            })
        },
    )
    .context("Failed to insert domestic rating")
}

pub fn insert_international_rating(
    conn: &Connection,
    player_id: i64,
    period: NaiveDate,
    rating: i32,
) -> Result<InternationalRating> {
    let sql = "INSERT INTO international_ratings (player_id, period, rating) VALUES (?1, ?2, ?3) RETURNING id, player_id, period, rating";

    conn.query_row(sql, params![player_id, period, rating], |row| {
        Ok(InternationalRating {
            id: row.get(0)?,
            player_id: row.get(1)?,
            period: row.get(2)?,
            rating: row.get(3)?,
        })
    })
    .context("Failed to insert international rating")
}

pub fn latest_period(conn: &Connection, source: Source) -> Result<Option<NaiveDate>> {
    let sql = format!(
        "SELECT MAX({column}) FROM {table}",
        column = source.period_column(),
        table = source.ratings_table()
    );

    conn.query_row(&sql, [], |row| row.get(0))
        .with_context(|| query_context(&format!("latest {} list", source.as_str())))
}

pub fn maximal_period_for_year(
    conn: &Connection,
    source: Source,
    year: i32,
) -> Result<Option<NaiveDate>> {
    let sql = format!(
        "SELECT MAX({column}) FROM {table} WHERE {column} LIKE ?1",
        column = source.period_column(),
        table = source.ratings_table()
    );

    conn.query_row(&sql, params![format!("{}-%", year)], |row| row.get(0))
        .with_context(|| query_context(&format!("{} lists for {}", source.as_str(), year)))
}

/// Ids of home players with a full qualifying rating on one of the lists
pub fn list_eligible_domestic_ids(
    conn: &Connection,
    lists: &[NaiveDate],
    eligibility: &Eligibility,
) -> Result<Vec<(i64, String)>> {
    if lists.is_empty() {
        return Ok(Vec::new());
    }

    let mut sql = format!(
        "SELECT DISTINCT p.id, p.name FROM domestic_players p \
         JOIN domestic_ratings r ON r.player_id = p.id \
         WHERE (p.fed = ? OR p.fed IS NULL) AND p.deceased = 0 AND r.full = 1 AND r.rating >= ? \
         AND r.list IN ({})",
        placeholders(lists.len())
    );
    if eligibility.women_only {
        sql.push_str(" AND p.gender = 'F'");
    }
    sql.push_str(" ORDER BY p.id");

    let mut values = vec![
        Value::Text(eligibility.home_federation.clone()),
        Value::Integer(i64::from(eligibility.min_rating)),
    ];
    values.extend(lists.iter().map(date_value));

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(params_from_iter(values), |row| Ok((row.get(0)?, row.get(1)?)))?
        .collect::<rusqlite::Result<Vec<_>>>()
        .with_context(|| query_context("eligible domestic players"))?;

    Ok(rows)
}

/// International players linked to one of the domestic ids and rated in one of the periods
pub fn list_linked_international(
    conn: &Connection,
    domestic_ids: &[i64],
    periods: &[NaiveDate],
) -> Result<Vec<LinkRow>> {
    if domestic_ids.is_empty() || periods.is_empty() {
        return Ok(Vec::new());
    }

    let sql = format!(
        "SELECT DISTINCT p.id, p.domestic_id FROM international_players p \
         JOIN international_ratings r ON r.player_id = p.id \
         WHERE p.domestic_id IN ({}) AND r.period IN ({}) \
         ORDER BY p.id",
        placeholders(domestic_ids.len()),
        placeholders(periods.len())
    );

    let values = domestic_ids
        .iter()
        .map(|&id| Value::Integer(id))
        .chain(periods.iter().map(date_value));

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(params_from_iter(values), |row| {
            Ok(LinkRow {
                player_id: row.get(0)?,
                domestic_id: row.get(1)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()
        .with_context(|| query_context("linked international players"))?;

    Ok(rows)
}

/// Every rating the given players hold in the source, oldest list first
pub fn list_histories(
    conn: &Connection,
    source: Source,
    player_ids: &[i64],
) -> Result<Vec<HistoryRow>> {
    if player_ids.is_empty() {
        return Ok(Vec::new());
    }

    let sql = format!(
        "SELECT player_id, {column}, rating FROM {table} WHERE player_id IN ({ids}) ORDER BY player_id, {column}",
        column = source.period_column(),
        table = source.ratings_table(),
        ids = placeholders(player_ids.len())
    );

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(params_from_iter(player_ids), |row| {
            Ok(HistoryRow {
                player_id: row.get(0)?,
                period: row.get(1)?,
                rating: row.get(2)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()
        .with_context(|| query_context(&format!("{} rating histories", source.as_str())))?;

    Ok(rows)
}

fn placeholders(count: usize) -> String {
    vec!["?"; count].join(", ")
}

fn date_value(date: &NaiveDate) -> Value {
    Value::Text(date.format("%Y-%m-%d").to_string())
}
