use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};

use super::models::{DomesticPlayer, InternationalPlayer};

pub fn insert_domestic_player(
    conn: &Connection,
    id: i64,
    name: &str,
    federation: Option<&str>,
    gender: Option<&str>,
    deceased: bool,
) -> Result<DomesticPlayer> {
    let sql = "INSERT INTO domestic_players (id, name, fed, gender, deceased) VALUES (?1, ?2, ?3, ?4, ?5) RETURNING id, name, fed, gender, deceased, created_at";

    conn.query_row(
        sql,
        params![id, name, federation, gender, deceased],
        parse_domestic_player_row,
    )
    .with_context(|| format!("Failed to insert domestic player {}", id))
}

fn parse_domestic_player_row(row: &rusqlite::Row) -> rusqlite::Result<DomesticPlayer> {
    Ok(DomesticPlayer {
        id: row.get(0)?,
        name: row.get(1)?,
        federation: row.get(2)?,
        gender: row.get(3)?,
        deceased: row.get(4)?,
        created_at: row.get(5)?,
    })
}

pub fn find_domestic_by_id(conn: &Connection, id: i64) -> Result<Option<DomesticPlayer>> {
    let sql = "SELECT id, name, fed, gender, deceased, created_at FROM domestic_players WHERE id = ?1";

    conn.query_row(sql, params![id], parse_domestic_player_row)
        .optional()
        .context("Failed to query domestic player by id")
}

pub fn insert_international_player(
    conn: &Connection,
    id: i64,
    name: &str,
    domestic_id: Option<i64>,
) -> Result<InternationalPlayer> {
    let sql = "INSERT INTO international_players (id, name, domestic_id) VALUES (?1, ?2, ?3) RETURNING id, name, domestic_id, created_at";

    conn.query_row(sql, params![id, name, domestic_id], parse_international_player_row)
        .with_context(|| format!("Failed to insert international player {}", id))
}

fn parse_international_player_row(row: &rusqlite::Row) -> rusqlite::Result<InternationalPlayer> {
    Ok(InternationalPlayer {
        id: row.get(0)?,
        name: row.get(1)?,
        domestic_id: row.get(2)?,
        created_at: row.get(3)?,
    })
}

pub fn find_international_by_domestic_id(
    conn: &Connection,
    domestic_id: i64,
) -> Result<Option<InternationalPlayer>> {
    let sql = "SELECT id, name, domestic_id, created_at FROM international_players WHERE domestic_id = ?1";

    conn.query_row(sql, params![domestic_id], parse_international_player_row)
        .optional()
        .context("Failed to query international player by domestic id")
}

pub fn count_players(conn: &Connection, table: &str) -> Result<i64> {
    let sql = format!("SELECT COUNT(*) FROM {}", table);
    conn.query_row(&sql, [], |row| row.get(0))
        .with_context(|| format!("Failed to count rows in {}", table))
}
