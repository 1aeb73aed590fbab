use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log::{AuditOp, ttlog};
use crate::errors::AppResult;
use crate::store::SqliteStore;
use crate::ui::messages::{success, warning};
use crate::utils::path::expand_tilde;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database and all pending migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    let custom = cli.db.as_deref().map(expand_tilde);
    let db_path = Config::init_all(custom, cli.test)?;
    let db_path = db_path.to_string_lossy().to_string();

    println!("⚙️  Initializing cronos…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database   : {}", &db_path);

    let mut store = SqliteStore::open(&db_path)?;

    if let Err(e) = ttlog(
        &store.pool().conn,
        AuditOp::Init,
        "Database initialized",
        &format!("Database initialized at {}", &db_path),
    ) {
        warning(format!("Failed to write internal log: {}", e));
    }

    success("cronos initialization completed!");
    Ok(())
}
