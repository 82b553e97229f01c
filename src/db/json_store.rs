//! Single-file JSON store: one array of records, rewritten on every upsert.

use crate::db::normalize::StoredRecord;
use crate::db::store::RecordStore;
use crate::errors::AppResult;
use crate::models::AttendanceRecord;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    /// The file is created lazily by the first upsert.
    pub fn open(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_records(&self) -> AppResult<Vec<AttendanceRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let stored: Vec<StoredRecord> = serde_json::from_str(&content)?;
        Ok(stored.into_iter().map(StoredRecord::into_record).collect())
    }

    /// Write through a sibling temp file so a crash never leaves half a file.
    fn write_records(&self, records: &[AttendanceRecord]) -> AppResult<()> {
        let json = serde_json::to_string_pretty(records)?;

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl RecordStore for JsonStore {
    fn load_all(&self) -> AppResult<Vec<AttendanceRecord>> {
        let mut records = self.read_records()?;
        records.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(records)
    }

    fn upsert(&mut self, record: &AttendanceRecord) -> AppResult<()> {
        let mut records = self.read_records()?;
        records.retain(|r| r.date != record.date);
        records.push(record.clone());
        records.sort_by(|a, b| b.date.cmp(&a.date));

        self.write_records(&records)?;
        tracing::trace!(path = %self.path.display(), date = %record.date, "json record written");
        Ok(())
    }
}
