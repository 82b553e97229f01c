//! Record accounting: overlay a partial update on a day's record and
//! recompute the derived minute totals.

use crate::models::{AttendanceRecord, BreakInterval, RecordUpdate};
use crate::utils::time::elapsed_minutes;
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    /// `None` unless both clock-in and clock-out are known.
    pub work_minutes: Option<u32>,
    /// `None` when there is nothing at all to account for.
    pub break_minutes: Option<u32>,
}

/// Sum of closed break intervals. Open intervals contribute 0.
pub fn total_break_minutes(breaks: &[BreakInterval]) -> u32 {
    breaks.iter().map(BreakInterval::minutes).sum()
}

/// Derive the totals of a record from its clock times and break list.
pub fn compute_totals(record: &AttendanceRecord) -> Totals {
    let break_minutes = total_break_minutes(&record.breaks);

    match (record.clock_in.as_deref(), record.clock_out.as_deref()) {
        (Some(cin), Some(cout)) => Totals {
            work_minutes: Some(elapsed_minutes(Some(cin), Some(cout)).saturating_sub(break_minutes)),
            break_minutes: Some(break_minutes),
        },
        _ if break_minutes > 0 => Totals {
            work_minutes: None,
            break_minutes: Some(break_minutes),
        },
        _ => Totals::default(),
    }
}

/// Merge `update` into the record stored for `date` (or a fresh empty one).
///
/// Shallow overlay: each field present in `update` replaces the stored
/// one, `breaks` included. Totals are always recomputed afterwards.
/// `fresh_id` is only called when there is no existing record.
pub fn merge_update<F>(
    existing: Option<&AttendanceRecord>,
    date: NaiveDate,
    update: &RecordUpdate,
    fresh_id: F,
) -> AttendanceRecord
where
    F: FnOnce() -> String,
{
    let mut merged = match existing {
        Some(r) => r.clone(),
        None => AttendanceRecord::empty(fresh_id(), date),
    };
    merged.date = date;

    if let Some(cin) = &update.clock_in {
        merged.clock_in = cin.clone();
    }
    if let Some(cout) = &update.clock_out {
        merged.clock_out = cout.clone();
    }
    if let Some(breaks) = &update.breaks {
        merged.breaks = breaks.clone();
    }

    apply_totals(&mut merged);
    merged
}

/// Overwrite the derived fields with freshly computed totals.
pub fn apply_totals(record: &mut AttendanceRecord) {
    let totals = compute_totals(record);
    record.total_work_minutes = totals.work_minutes;
    record.total_break_minutes = totals.break_minutes;
}
