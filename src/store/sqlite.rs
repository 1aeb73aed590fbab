use crate::db::migrate::init_db;
use crate::db::log::{AuditOp, ttlog};
use crate::db::pool::DbPool;
use crate::db::queries::{delete_crono, insert_crono, load_all_cronos, load_crono, update_crono};
use crate::errors::AppResult;
use crate::models::StopwatchRecord;
use crate::models::cronos::validate_elapsed;
use crate::store::RecordStore;

/// `RecordStore` backed by the `cronos` SQLite table.
pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    /// Open the database at `path`, applying pending migrations.
    pub fn open(path: &str) -> AppResult<Self> {
        Self::from_pool(DbPool::new(path)?)
    }

    pub fn in_memory() -> AppResult<Self> {
        Self::from_pool(DbPool::in_memory()?)
    }

    pub fn from_pool(pool: DbPool) -> AppResult<Self> {
        init_db(&pool.conn)?;
        Ok(Self { pool })
    }

    pub fn pool(&mut self) -> &mut DbPool {
        &mut self.pool
    }

    /// Audit logging never fails the write it describes.
    fn audit(&self, op: AuditOp, id: i64, message: &str) {
        if let Err(e) = ttlog(&self.pool.conn, op, &format!("#{}", id), message) {
            ::log::warn!("failed to write internal log: {}", e);
        }
    }
}

impl RecordStore for SqliteStore {
    fn create(&self, title: &str, elapsed_millis: i64) -> AppResult<i64> {
        validate_elapsed(elapsed_millis)?;
        let id = insert_crono(&self.pool.conn, title, elapsed_millis)?;
        self.audit(
            AuditOp::Add,
            id,
            &format!("title='{}' crono={}ms", title, elapsed_millis),
        );
        Ok(id)
    }

    fn get_by_id(&self, id: i64) -> AppResult<StopwatchRecord> {
        load_crono(&self.pool.conn, id)
    }

    fn get_all(&self) -> AppResult<Vec<StopwatchRecord>> {
        load_all_cronos(&self.pool.conn)
    }

    fn update(&self, id: i64, title: &str, elapsed_millis: i64) -> AppResult<()> {
        validate_elapsed(elapsed_millis)?;
        update_crono(&self.pool.conn, id, title, elapsed_millis)?;
        self.audit(
            AuditOp::Edit,
            id,
            &format!("title='{}' crono={}ms", title, elapsed_millis),
        );
        Ok(())
    }

    fn delete(&self, id: i64) -> AppResult<()> {
        delete_crono(&self.pool.conn, id)?;
        self.audit(AuditOp::Del, id, "Crono deleted");
        Ok(())
    }
}
