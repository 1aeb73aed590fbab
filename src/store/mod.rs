//! Record Store contract and its SQLite implementation.

pub mod sqlite;

pub use sqlite::SqliteStore;

use crate::errors::AppResult;
use crate::models::StopwatchRecord;

/// Durable storage for stopwatch records.
///
/// `get_by_id`, `update` and `delete` fail with `AppError::NotFound` when no
/// record has the given id. Any other failure is an infrastructure error and
/// is returned as-is.
pub trait RecordStore {
    fn create(&self, title: &str, elapsed_millis: i64) -> AppResult<i64>;
    fn get_by_id(&self, id: i64) -> AppResult<StopwatchRecord>;
    fn get_all(&self) -> AppResult<Vec<StopwatchRecord>>;
    fn update(&self, id: i64, title: &str, elapsed_millis: i64) -> AppResult<()>;
    fn delete(&self, id: i64) -> AppResult<()>;
}
