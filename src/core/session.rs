//! Live clock actions for a single day.
//!
//! Each action produces the `RecordUpdate` to merge; nothing here
//! touches the store. Clock actions and `end_break` check the day's state
//! themselves, `start_break` relies on `ensure_can_start_break`. Per day the
//! break state is either "no break open" or "break open"; `end_break`
//! always closes the most recently started open interval.

use crate::errors::{AppError, AppResult};
use crate::models::{AttendanceRecord, BreakInterval, RecordUpdate};
use chrono::NaiveDate;

pub fn clock_in(
    record: Option<&AttendanceRecord>,
    date: NaiveDate,
    now: &str,
) -> AppResult<RecordUpdate> {
    if let Some(time) = record.and_then(|r| r.clock_in.clone()) {
        return Err(AppError::AlreadyClockedIn { date, time });
    }
    Ok(RecordUpdate::clock_in(now))
}

/// Clock out. An open break is closed at `now` in the same update, so a
/// finished day never has open intervals.
pub fn clock_out(
    record: Option<&AttendanceRecord>,
    date: NaiveDate,
    now: &str,
) -> AppResult<RecordUpdate> {
    let r = ensure_working(record, date)?;

    let mut update = RecordUpdate::clock_out(now);
    if let Some(idx) = r.open_break_index() {
        let mut breaks = r.breaks.clone();
        breaks[idx].end = Some(now.to_string());
        update.breaks = Some(breaks);
    }
    Ok(update)
}

/// Guard for a live break start: clocked in, not clocked out, not on break.
pub fn ensure_can_start_break(
    record: Option<&AttendanceRecord>,
    date: NaiveDate,
) -> AppResult<()> {
    let r = ensure_working(record, date)?;
    if r.has_open_break() {
        return Err(AppError::BreakInProgress(date));
    }
    Ok(())
}

/// Append a new open interval at `now`. Unchecked: callers run
/// `ensure_can_start_break` first when the action comes from a user.
pub fn start_break(record: Option<&AttendanceRecord>, now: &str) -> RecordUpdate {
    let mut breaks = record.map(|r| r.breaks.clone()).unwrap_or_default();
    breaks.push(BreakInterval::open(now));
    RecordUpdate::breaks(breaks)
}

/// Close the most recently started open break (last-opened-first).
pub fn end_break(
    record: Option<&AttendanceRecord>,
    date: NaiveDate,
    now: &str,
) -> AppResult<RecordUpdate> {
    let r = record.ok_or(AppError::NoOpenBreak(date))?;
    let idx = r.open_break_index().ok_or(AppError::NoOpenBreak(date))?;

    let mut breaks = r.breaks.clone();
    breaks[idx].end = Some(now.to_string());
    Ok(RecordUpdate::breaks(breaks))
}

/// Clocked in and not yet clocked out.
fn ensure_working(
    record: Option<&AttendanceRecord>,
    date: NaiveDate,
) -> AppResult<&AttendanceRecord> {
    let r = record
        .filter(|r| r.clock_in.is_some())
        .ok_or(AppError::NotClockedIn(date))?;

    if let Some(time) = &r.clock_out {
        return Err(AppError::AlreadyClockedOut {
            date,
            time: time.clone(),
        });
    }
    Ok(r)
}
