use crate::core::coordinator::Coordinator;
use crate::core::engine::StopwatchEngine;
use crate::errors::AppResult;
use crate::models::StopwatchRecord;
use crate::store::RecordStore;
use std::ops::Deref;

/// One add or edit screen worth of stopwatch work.
///
/// The session owns the engine; dropping it always resets the engine, so the
/// tick is released on every way out (save, back, EOF, Ctrl-C, error).
pub struct EditingSession {
    engine: StopwatchEngine,
    record_id: Option<i64>,
}

impl EditingSession {
    /// Add flow: a fresh, idle stopwatch with no backing record yet.
    pub fn new(engine: StopwatchEngine) -> Self {
        Self {
            engine,
            record_id: None,
        }
    }

    /// Edit flow: load record `id` into the engine.
    pub fn open<S: RecordStore>(
        engine: StopwatchEngine,
        coordinator: &Coordinator<S>,
        id: i64,
    ) -> AppResult<Self> {
        coordinator.load_into(&engine, id)?;
        Ok(Self {
            engine,
            record_id: Some(id),
        })
    }

    pub fn record_id(&self) -> Option<i64> {
        self.record_id
    }

    /// Save through the coordinator. After the first save of an add session
    /// the new id is kept so later saves update the same record.
    pub fn save<S: RecordStore>(&mut self, coordinator: &Coordinator<S>) -> AppResult<StopwatchRecord> {
        let record = coordinator.save(&self.engine, self.record_id)?;
        self.record_id = Some(record.id);
        Ok(record)
    }
}

impl Deref for EditingSession {
    type Target = StopwatchEngine;

    fn deref(&self) -> &StopwatchEngine {
        &self.engine
    }
}

impl Drop for EditingSession {
    fn drop(&mut self) {
        self.engine.stop();
    }
}
