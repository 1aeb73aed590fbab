use crate::db::log::AuditOp;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use ansi_term::Colour;

const MAX_TARGET_WIDTH: usize = 12;

/// ANSI colour for each audit operation.
fn color_for_operation(op: &str) -> Colour {
    match AuditOp::from_db_str(op) {
        Some(AuditOp::Add) => Colour::Green,
        Some(AuditOp::Del) => Colour::Red,
        Some(AuditOp::Edit) => Colour::Yellow,
        Some(AuditOp::Migration) => Colour::Purple,
        Some(AuditOp::Init) => Colour::RGB(255, 153, 51),
        None => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let mut stmt = pool.conn.prepare_cached(
            "SELECT id, date, operation, target, message FROM log ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            let id: i64 = row.get(0)?;
            let raw_date: String = row.get(1)?;
            let operation: String = row.get(2)?;
            let target: Option<String> = row.get(3)?;
            let message: String = row.get(4)?;

            let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                .map(|dt| dt.format("%F %T").to_string())
                .unwrap_or(raw_date);

            Ok((id, date, operation, target.unwrap_or_default(), message))
        })?;

        let mut entries = Vec::new();
        for r in rows {
            entries.push(r?);
        }

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let id_w = entries
            .iter()
            .map(|(id, ..)| id.to_string().len())
            .max()
            .unwrap_or(1);
        let op_w = entries
            .iter()
            .map(|(_, _, op, ..)| op.len())
            .max()
            .unwrap_or(1);

        println!("📜 Internal log:\n");

        for (id, date, operation, target, message) in entries {
            // pad before painting so ANSI codes don't count toward the width
            let op = format!("{:<op_w$}", operation, op_w = op_w);
            let target: String = target.chars().take(MAX_TARGET_WIDTH).collect();

            println!(
                "{:>id_w$}: {} | {} {:<tw$} => {}",
                id,
                date,
                color_for_operation(&operation).paint(op),
                target,
                message,
                id_w = id_w,
                tw = MAX_TARGET_WIDTH
            );
        }

        Ok(())
    }
}
