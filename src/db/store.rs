//! The persistence seam used by `core`.

use crate::config::{Backend, Config};
use crate::db::json_store::JsonStore;
use crate::db::sqlite::SqliteStore;
use crate::errors::AppResult;
use crate::models::AttendanceRecord;
use chrono::NaiveDate;

/// Anything that can hold one `AttendanceRecord` per date.
///
/// `load_all` must reflect the latest successful `upsert`.
pub trait RecordStore {
    /// Every stored record, newest date first.
    fn load_all(&self) -> AppResult<Vec<AttendanceRecord>>;

    /// Insert or replace the record stored under `record.date`.
    fn upsert(&mut self, record: &AttendanceRecord) -> AppResult<()>;

    fn load(&self, date: NaiveDate) -> AppResult<Option<AttendanceRecord>> {
        Ok(self.load_all()?.into_iter().find(|r| r.date == date))
    }
}

/// Open the store configured in `cfg`.
pub fn open_store(cfg: &Config) -> AppResult<Box<dyn RecordStore>> {
    let store: Box<dyn RecordStore> = match cfg.effective_backend() {
        Backend::Sqlite => Box::new(SqliteStore::open(&cfg.database)?),
        Backend::Json => Box::new(JsonStore::open(&cfg.database)?),
    };
    tracing::debug!(database = %cfg.database, backend = ?cfg.effective_backend(), "store opened");
    Ok(store)
}
