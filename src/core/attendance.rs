use crate::core::{accounting, session};
use crate::db::store::RecordStore;
use crate::errors::{AppError, AppResult};
use crate::models::{AttendanceRecord, RecordUpdate};
use chrono::NaiveDate;
use uuid::Uuid;

/// High-level attendance operations: load, merge, persist, read back.
///
/// Every write returns a fresh `load_all` of the store rather than a
/// locally patched copy. On a store error nothing is read back and the
/// caller keeps whatever it had.
pub struct AttendanceLogic;

impl AttendanceLogic {
    pub fn save<S>(
        store: &mut S,
        date: NaiveDate,
        update: &RecordUpdate,
    ) -> AppResult<Vec<AttendanceRecord>>
    where
        S: RecordStore + ?Sized,
    {
        let existing = store.load(date)?;
        Self::save_over(store, existing.as_ref(), date, update)
    }

    /// Like `save`, for callers that already loaded the day's record.
    pub fn save_over<S>(
        store: &mut S,
        existing: Option<&AttendanceRecord>,
        date: NaiveDate,
        update: &RecordUpdate,
    ) -> AppResult<Vec<AttendanceRecord>>
    where
        S: RecordStore + ?Sized,
    {
        let merged = accounting::merge_update(existing, date, update, fresh_id);

        tracing::debug!(
            %date,
            work = ?merged.total_work_minutes,
            breaks = ?merged.total_break_minutes,
            "record merged"
        );

        store.upsert(&merged)?;
        store.load_all()
    }

    pub fn clock_in<S>(store: &mut S, date: NaiveDate, now: &str) -> AppResult<Vec<AttendanceRecord>>
    where
        S: RecordStore + ?Sized,
    {
        let current = store.load(date)?;
        let update = session::clock_in(current.as_ref(), date, now)?;
        Self::save_over(store, current.as_ref(), date, &update)
    }

    pub fn clock_out<S>(store: &mut S, date: NaiveDate, now: &str) -> AppResult<Vec<AttendanceRecord>>
    where
        S: RecordStore + ?Sized,
    {
        let current = store.load(date)?;
        let update = session::clock_out(current.as_ref(), date, now)?;
        Self::save_over(store, current.as_ref(), date, &update)
    }

    pub fn start_break<S>(
        store: &mut S,
        date: NaiveDate,
        now: &str,
    ) -> AppResult<Vec<AttendanceRecord>>
    where
        S: RecordStore + ?Sized,
    {
        let current = store.load(date)?;
        session::ensure_can_start_break(current.as_ref(), date)?;
        let update = session::start_break(current.as_ref(), now);
        Self::save_over(store, current.as_ref(), date, &update)
    }

    pub fn end_break<S>(store: &mut S, date: NaiveDate, now: &str) -> AppResult<Vec<AttendanceRecord>>
    where
        S: RecordStore + ?Sized,
    {
        let current = store.load(date)?;
        let update = session::end_break(current.as_ref(), date, now)?;
        Self::save_over(store, current.as_ref(), date, &update)
    }

    /// Retroactive edit. Same merge contract as the live actions.
    pub fn edit<S>(
        store: &mut S,
        date: NaiveDate,
        update: &RecordUpdate,
    ) -> AppResult<Vec<AttendanceRecord>>
    where
        S: RecordStore + ?Sized,
    {
        if update.is_empty() {
            return Err(AppError::NothingToDo(
                "specify at least --in, --out, --breaks or a --clear-* flag".into(),
            ));
        }
        Self::save(store, date, update)
    }
}

/// Pick the record for `date` out of a full read.
pub fn find_record(records: &[AttendanceRecord], date: NaiveDate) -> Option<&AttendanceRecord> {
    records.iter().find(|r| r.date == date)
}

fn fresh_id() -> String {
    Uuid::new_v4().to_string()
}
