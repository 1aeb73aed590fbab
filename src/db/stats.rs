use crate::db::migrate::schema_version;
use crate::db::pool::DbPool;
use crate::db::queries::totals;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use crate::utils::time::format_millis;
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} KB", CYAN, RESET, file_kb);
    println!(
        "{}• Schema version:{} {}",
        CYAN,
        RESET,
        schema_version(&pool.conn)?
    );

    //
    // 2) RECORDS AND TOTAL TIME
    //
    let (count, total) = totals(&pool.conn)?;
    println!("{}• Cronos:{} {}{}{}", CYAN, RESET, GREEN, count, RESET);
    println!(
        "{}• Total tracked:{} {}",
        CYAN,
        RESET,
        format_millis(total)
    );

    //
    // 3) LAST UPDATE
    //
    let last: Option<String> = pool
        .conn
        .query_row(
            "SELECT updated_at FROM cronos ORDER BY updated_at DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let fmt_last = last.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    println!("{}• Last update:{} {}", CYAN, RESET, fmt_last);

    println!();
    Ok(())
}
