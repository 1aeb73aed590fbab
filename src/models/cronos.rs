use crate::errors::{AppError, AppResult};
use serde::Serialize;

/// A persisted stopwatch ("crono").
///
/// `id` is assigned by the store on creation and stays `0` until then.
/// `elapsed_millis` is the last saved accumulated duration and is never
/// negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StopwatchRecord {
    pub id: i64,
    pub title: String,
    pub elapsed_millis: i64,
}

impl StopwatchRecord {
    pub fn is_persisted(&self) -> bool {
        self.id > 0
    }
}

/// Reject negative durations before they reach the store.
pub fn validate_elapsed(elapsed_millis: i64) -> AppResult<()> {
    if elapsed_millis < 0 {
        return Err(AppError::InvalidDuration(format!(
            "elapsed time cannot be negative ({} ms)",
            elapsed_millis
        )));
    }
    Ok(())
}
