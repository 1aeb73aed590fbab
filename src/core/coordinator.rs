use crate::core::engine::StopwatchEngine;
use crate::errors::AppResult;
use crate::models::StopwatchRecord;
use crate::store::RecordStore;

/// Moves stopwatch data between an engine and a `RecordStore`.
///
/// Store errors are returned unchanged; nothing here retries.
pub struct Coordinator<S: RecordStore> {
    store: S,
}

impl<S: RecordStore> Coordinator<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Fetch record `id` and load it into `engine`.
    /// On `NotFound` the engine is left untouched.
    pub fn load_into(&self, engine: &StopwatchEngine, id: i64) -> AppResult<StopwatchRecord> {
        let record = self.store.get_by_id(id)?;
        engine.load(&record);
        Ok(record)
    }

    /// Persist the engine's title and elapsed time: create when `existing_id`
    /// is `None`, otherwise overwrite that record.
    pub fn save(
        &self,
        engine: &StopwatchEngine,
        existing_id: Option<i64>,
    ) -> AppResult<StopwatchRecord> {
        let state = engine.snapshot();
        self.save_values(existing_id, &state.title, state.elapsed_millis)
    }

    /// Same as `save`, for values that do not come from a live engine.
    pub fn save_values(
        &self,
        existing_id: Option<i64>,
        title: &str,
        elapsed_millis: i64,
    ) -> AppResult<StopwatchRecord> {
        let id = match existing_id {
            Some(id) => {
                self.store.update(id, title, elapsed_millis)?;
                id
            }
            None => self.store.create(title, elapsed_millis)?,
        };

        Ok(StopwatchRecord {
            id,
            title: title.to_string(),
            elapsed_millis,
        })
    }

    /// Change only the title of a stored record.
    pub fn rename(&self, id: i64, title: &str) -> AppResult<StopwatchRecord> {
        let record = self.store.get_by_id(id)?;
        self.save_values(Some(id), title, record.elapsed_millis)
    }

    pub fn delete(&self, id: i64) -> AppResult<()> {
        self.store.delete(id)
    }

    pub fn list(&self) -> AppResult<Vec<StopwatchRecord>> {
        self.store.get_all()
    }
}
