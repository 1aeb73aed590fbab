pub mod add;
pub mod config;
pub mod db;
pub mod del;
pub mod edit;
pub mod init;
pub mod list;
pub mod log;

use crate::config::Config;
use crate::core::Coordinator;
use crate::errors::AppResult;
use crate::models::StopwatchRecord;
use crate::store::SqliteStore;
use crate::ui::messages::{info, success};
use crate::ui::view::ViewOutcome;
use crate::utils::time::render;
use tokio::runtime::{Builder, Runtime};

/// Coordinator over the configured database.
pub(crate) fn open_coordinator(cfg: &Config) -> AppResult<Coordinator<SqliteStore>> {
    Ok(Coordinator::new(SqliteStore::open(&cfg.database)?))
}

/// Runtime hosting the stopwatch tick and the stdin reader of a view.
pub(crate) fn view_runtime() -> AppResult<Runtime> {
    Ok(Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()?)
}

pub(crate) fn report_saved(record: &StopwatchRecord, cfg: &Config) {
    success(format!(
        "Crono #{} '{}' saved ({}).",
        record.id,
        record.title,
        render(record.elapsed_millis, cfg.time_format)
    ));
}

pub(crate) fn report_outcome(outcome: &ViewOutcome, cfg: &Config) {
    match outcome {
        ViewOutcome::Saved(record) => report_saved(record, cfg),
        ViewOutcome::Abandoned => info("Left without saving."),
    }
}
