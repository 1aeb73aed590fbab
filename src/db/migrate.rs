use crate::db::log::{AuditOp, ttlog};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use chrono::Local;
use rusqlite::{Connection, Result, params};

/// Latest schema version understood by this build.
pub const SCHEMA_VERSION: i64 = 2;

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// v1: the `cronos` table holding one row per stopwatch.
fn create_cronos_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS cronos (
            id     INTEGER PRIMARY KEY AUTOINCREMENT,
            title  TEXT NOT NULL,
            crono  INTEGER NOT NULL DEFAULT 0 CHECK(crono >= 0)
        );
        "#,
    )?;
    Ok(())
}

/// Check if the `cronos` table has a given column.
fn cronos_has_column(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('cronos')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == name {
            return Ok(true);
        }
    }
    Ok(false)
}

/// v2: creation / last update timestamps.
fn add_timestamp_columns(conn: &Connection) -> Result<()> {
    if !cronos_has_column(conn, "created_at")? {
        conn.execute_batch("ALTER TABLE cronos ADD COLUMN created_at TEXT NOT NULL DEFAULT '';")?;
    }
    if !cronos_has_column(conn, "updated_at")? {
        conn.execute_batch("ALTER TABLE cronos ADD COLUMN updated_at TEXT NOT NULL DEFAULT '';")?;
    }

    let now = Local::now().to_rfc3339();
    conn.execute(
        "UPDATE cronos SET created_at = ?1 WHERE created_at = ''",
        params![now],
    )?;
    conn.execute(
        "UPDATE cronos SET updated_at = created_at WHERE updated_at = ''",
        [],
    )?;
    Ok(())
}

pub fn schema_version(conn: &Connection) -> Result<i64> {
    conn.query_row("PRAGMA user_version", [], |row| row.get(0))
}

fn set_schema_version(conn: &Connection, version: i64) -> Result<()> {
    // PRAGMA does not accept bound parameters
    conn.execute_batch(&format!("PRAGMA user_version = {};", version))
}

fn record_migration(conn: &Connection, version: i64, what: &str) -> AppResult<()> {
    ttlog(conn, AuditOp::Migration, &format!("v{}", version), what)
}

/// Bring the schema up to `SCHEMA_VERSION`. Safe to call on every open.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_log_table(conn)?;

    let current = schema_version(conn)?;

    if current > SCHEMA_VERSION {
        return Err(AppError::Migration(format!(
            "database schema v{} is newer than supported v{}",
            current, SCHEMA_VERSION
        )));
    }

    if current < 1 {
        create_cronos_table(conn)?;
        set_schema_version(conn, 1)?;
        record_migration(conn, 1, "Created cronos table")?;
        ::log::info!("schema migrated to v1");
    }

    if current < 2 {
        if current >= 1 {
            warning("Adding timestamp columns to cronos table...");
        }
        add_timestamp_columns(conn)?;
        set_schema_version(conn, 2)?;
        record_migration(conn, 2, "Added created_at/updated_at to cronos")?;
        ::log::info!("schema migrated to v2");
        if current >= 1 {
            success("Migration to v2 completed.");
        }
    }

    Ok(())
}

/// Initialize the database: every table and column comes from the migrations.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    run_pending_migrations(conn)
}
