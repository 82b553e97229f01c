//! In-process store, used for tests and dry runs.

use crate::db::store::RecordStore;
use crate::errors::AppResult;
use crate::models::AttendanceRecord;
use chrono::NaiveDate;
use std::collections::BTreeMap;

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    records: BTreeMap<NaiveDate, AttendanceRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: impl IntoIterator<Item = AttendanceRecord>) -> Self {
        Self {
            records: records.into_iter().map(|r| (r.date, r)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl RecordStore for MemoryStore {
    fn load_all(&self) -> AppResult<Vec<AttendanceRecord>> {
        Ok(self.records.values().rev().cloned().collect())
    }

    fn upsert(&mut self, record: &AttendanceRecord) -> AppResult<()> {
        self.records.insert(record.date, record.clone());
        Ok(())
    }

    fn load(&self, date: NaiveDate) -> AppResult<Option<AttendanceRecord>> {
        Ok(self.records.get(&date).cloned())
    }
}
