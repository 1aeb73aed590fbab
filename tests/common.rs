#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use cronos::errors::{AppError, AppResult};
use cronos::models::StopwatchRecord;
use cronos::store::RecordStore;
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn cr() -> Command {
    cargo_bin_cmd!("cronos")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_cronos.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize a fresh DB through the CLI
pub fn init_db(db_path: &str) {
    cr().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Store a crono directly with a given elapsed time
pub fn add_crono(db_path: &str, title: &str, elapsed: &str) {
    cr().args(["--db", db_path, "add", "--title", title, "--elapsed", elapsed])
        .assert()
        .success();
}

/// Calls received by `RecordingStore`, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Create { title: String, elapsed_millis: i64 },
    GetById(i64),
    GetAll,
    Update { id: i64, title: String, elapsed_millis: i64 },
    Delete(i64),
}

/// In-memory `RecordStore` that records every call it receives.
pub struct RecordingStore {
    pub records: RefCell<BTreeMap<i64, StopwatchRecord>>,
    pub calls: RefCell<Vec<Call>>,
    next_id: Cell<i64>,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self {
            records: RefCell::new(BTreeMap::new()),
            calls: RefCell::new(Vec::new()),
            next_id: Cell::new(1),
        }
    }

    pub fn with_record(self, id: i64, title: &str, elapsed_millis: i64) -> Self {
        self.records.borrow_mut().insert(
            id,
            StopwatchRecord {
                id,
                title: title.to_string(),
                elapsed_millis,
            },
        );
        self.next_id.set(self.next_id.get().max(id + 1));
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }
}

impl RecordStore for RecordingStore {
    fn create(&self, title: &str, elapsed_millis: i64) -> AppResult<i64> {
        self.calls.borrow_mut().push(Call::Create {
            title: title.to_string(),
            elapsed_millis,
        });
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.records.borrow_mut().insert(
            id,
            StopwatchRecord {
                id,
                title: title.to_string(),
                elapsed_millis,
            },
        );
        Ok(id)
    }

    fn get_by_id(&self, id: i64) -> AppResult<StopwatchRecord> {
        self.calls.borrow_mut().push(Call::GetById(id));
        self.records
            .borrow()
            .get(&id)
            .cloned()
            .ok_or(AppError::NotFound(id))
    }

    fn get_all(&self) -> AppResult<Vec<StopwatchRecord>> {
        self.calls.borrow_mut().push(Call::GetAll);
        Ok(self.records.borrow().values().cloned().collect())
    }

    fn update(&self, id: i64, title: &str, elapsed_millis: i64) -> AppResult<()> {
        self.calls.borrow_mut().push(Call::Update {
            id,
            title: title.to_string(),
            elapsed_millis,
        });
        let mut records = self.records.borrow_mut();
        let rec = records.get_mut(&id).ok_or(AppError::NotFound(id))?;
        rec.title = title.to_string();
        rec.elapsed_millis = elapsed_millis;
        Ok(())
    }

    fn delete(&self, id: i64) -> AppResult<()> {
        self.calls.borrow_mut().push(Call::Delete(id));
        self.records
            .borrow_mut()
            .remove(&id)
            .map(|_| ())
            .ok_or(AppError::NotFound(id))
    }
}

/// Store whose every operation fails like an unavailable database.
pub struct BrokenStore;

impl RecordStore for BrokenStore {
    fn create(&self, _title: &str, _elapsed_millis: i64) -> AppResult<i64> {
        Err(AppError::Other("storage unavailable".into()))
    }

    fn get_by_id(&self, _id: i64) -> AppResult<StopwatchRecord> {
        Err(AppError::Other("storage unavailable".into()))
    }

    fn get_all(&self) -> AppResult<Vec<StopwatchRecord>> {
        Err(AppError::Other("storage unavailable".into()))
    }

    fn update(&self, _id: i64, _title: &str, _elapsed_millis: i64) -> AppResult<()> {
        Err(AppError::Other("storage unavailable".into()))
    }

    fn delete(&self, _id: i64) -> AppResult<()> {
        Err(AppError::Other("storage unavailable".into()))
    }
}
