//! Import step at the store boundary.
//!
//! Older data carries a single `breakStart`/`breakEnd` pair instead of a
//! `breaks` list, and `totalWorkTime`/`totalBreakTime` instead of the
//! `*Minutes` names. Everything is normalized into the current
//! `AttendanceRecord` shape here, so `core` only ever sees one format.

use crate::core::accounting::apply_totals;
use crate::models::{AttendanceRecord, BreakInterval};
use chrono::NaiveDate;
use serde::Deserialize;

/// Pick the break list for a stored row.
///
/// A present `breaks` list always wins. Otherwise a legacy start becomes a
/// one-element list. Rows with neither have no breaks.
pub fn normalize_breaks(
    breaks: Option<Vec<BreakInterval>>,
    legacy_start: Option<String>,
    legacy_end: Option<String>,
) -> Vec<BreakInterval> {
    match (breaks, legacy_start) {
        (Some(list), _) => list,
        (None, Some(start)) if !start.trim().is_empty() => vec![BreakInterval {
            start,
            end: legacy_end.filter(|e| !e.trim().is_empty()),
        }],
        _ => Vec::new(),
    }
}

/// Any stored record shape, current or legacy, as read from JSON.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredRecord {
    #[serde(default)]
    pub id: Option<String>,
    pub date: NaiveDate,
    #[serde(default)]
    pub clock_in: Option<String>,
    #[serde(default)]
    pub clock_out: Option<String>,
    #[serde(default)]
    pub breaks: Option<Vec<BreakInterval>>,
    #[serde(default)]
    pub break_start: Option<String>,
    #[serde(default)]
    pub break_end: Option<String>,
    #[serde(default, alias = "totalWorkTime")]
    pub total_work_minutes: Option<u32>,
    #[serde(default, alias = "totalBreakTime")]
    pub total_break_minutes: Option<u32>,
}

impl StoredRecord {
    /// Convert to the current shape. Totals are re-derived, since legacy
    /// rows may hold totals computed from a different break model.
    pub fn into_record(self) -> AttendanceRecord {
        let id = self
            .id
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| self.date.format("%Y-%m-%d").to_string());

        let mut record = AttendanceRecord {
            id,
            date: self.date,
            clock_in: self.clock_in.filter(|s| !s.is_empty()),
            clock_out: self.clock_out.filter(|s| !s.is_empty()),
            breaks: normalize_breaks(self.breaks, self.break_start, self.break_end),
            total_work_minutes: self.total_work_minutes,
            total_break_minutes: self.total_break_minutes,
        };
        apply_totals(&mut record);
        record
    }
}
