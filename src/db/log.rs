use crate::errors::AppResult;
use chrono::Local;
use rusqlite::Connection;
use rusqlite::params;

/// Operations recorded in the internal `log` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditOp {
    Init,
    Add,
    Edit,
    Del,
    Migration,
}

impl AuditOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditOp::Init => "init",
            AuditOp::Add => "add",
            AuditOp::Edit => "edit",
            AuditOp::Del => "del",
            AuditOp::Migration => "migration_applied",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "init" => Some(AuditOp::Init),
            "add" => Some(AuditOp::Add),
            "edit" => Some(AuditOp::Edit),
            "del" => Some(AuditOp::Del),
            "migration_applied" => Some(AuditOp::Migration),
            _ => None,
        }
    }
}

/// Append one row to the `log` table, stamped with the local time (RFC 3339).
pub fn ttlog(conn: &Connection, op: AuditOp, target: &str, message: &str) -> AppResult<()> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, ?2, ?3, ?4)",
    )?;

    stmt.execute(params![
        Local::now().to_rfc3339(),
        op.as_str(),
        target,
        message
    ])?;

    Ok(())
}
