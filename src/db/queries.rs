use crate::errors::{AppError, AppResult};
use crate::models::StopwatchRecord;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

pub fn map_row(row: &Row) -> Result<StopwatchRecord> {
    Ok(StopwatchRecord {
        id: row.get("id")?,
        title: row.get("title")?,
        elapsed_millis: row.get("crono")?,
    })
}

pub fn insert_crono(conn: &Connection, title: &str, elapsed_millis: i64) -> AppResult<i64> {
    let now = Local::now().to_rfc3339();
    conn.execute(
        "INSERT INTO cronos (title, crono, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?3)",
        params![title, elapsed_millis, now],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn load_crono(conn: &Connection, id: i64) -> AppResult<StopwatchRecord> {
    let mut stmt = conn.prepare_cached("SELECT id, title, crono FROM cronos WHERE id = ?1")?;
    stmt.query_row([id], map_row)
        .optional()?
        .ok_or(AppError::NotFound(id))
}

pub fn load_all_cronos(conn: &Connection) -> AppResult<Vec<StopwatchRecord>> {
    let mut stmt = conn.prepare_cached("SELECT id, title, crono FROM cronos ORDER BY id ASC")?;
    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn update_crono(conn: &Connection, id: i64, title: &str, elapsed_millis: i64) -> AppResult<()> {
    let now = Local::now().to_rfc3339();
    let changed = conn.execute(
        "UPDATE cronos SET title = ?1, crono = ?2, updated_at = ?3 WHERE id = ?4",
        params![title, elapsed_millis, now, id],
    )?;
    if changed == 0 {
        return Err(AppError::NotFound(id));
    }
    Ok(())
}

pub fn delete_crono(conn: &Connection, id: i64) -> AppResult<()> {
    let changed = conn.execute("DELETE FROM cronos WHERE id = ?1", [id])?;
    if changed == 0 {
        return Err(AppError::NotFound(id));
    }
    Ok(())
}

/// Number of stored cronos and the sum of their saved time.
pub fn totals(conn: &Connection) -> Result<(i64, i64)> {
    conn.query_row(
        "SELECT COUNT(*), IFNULL(SUM(crono), 0) FROM cronos",
        [],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )
}
