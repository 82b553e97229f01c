use super::break_interval::BreakInterval;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One calendar day of attendance. `date` is the natural key.
///
/// `total_work_minutes` and `total_break_minutes` are derived on every
/// merge; nothing outside `core::accounting` assigns them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub id: String,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clock_in: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clock_out: Option<String>,
    #[serde(default)]
    pub breaks: Vec<BreakInterval>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_work_minutes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_break_minutes: Option<u32>,
}

/// Where the day stands, derived from the clock fields and the break list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayStatus {
    NotStarted,
    Working,
    OnBreak,
    Finished,
}

impl DayStatus {
    pub fn label(&self) -> &'static str {
        match self {
            DayStatus::NotStarted => "not started",
            DayStatus::Working => "working",
            DayStatus::OnBreak => "on break",
            DayStatus::Finished => "finished",
        }
    }
}

impl AttendanceRecord {
    /// Empty record for a date that has never been written.
    pub fn empty(id: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            id: id.into(),
            date,
            clock_in: None,
            clock_out: None,
            breaks: Vec::new(),
            total_work_minutes: None,
            total_break_minutes: None,
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Index of the most recently started interval without an end.
    pub fn open_break_index(&self) -> Option<usize> {
        self.breaks.iter().rposition(BreakInterval::is_open)
    }

    pub fn has_open_break(&self) -> bool {
        self.open_break_index().is_some()
    }

    pub fn status(&self) -> DayStatus {
        match (&self.clock_in, &self.clock_out) {
            (_, Some(_)) => DayStatus::Finished,
            (Some(_), None) if self.has_open_break() => DayStatus::OnBreak,
            (Some(_), None) => DayStatus::Working,
            (None, None) => DayStatus::NotStarted,
        }
    }
}

/// Partial update for one date. `None` leaves the stored field untouched.
///
/// `clock_in`/`clock_out` are tri-state: `Some(None)` clears the field.
/// `breaks`, when present, replaces the whole list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordUpdate {
    pub clock_in: Option<Option<String>>,
    pub clock_out: Option<Option<String>>,
    pub breaks: Option<Vec<BreakInterval>>,
}

impl RecordUpdate {
    pub fn clock_in(time: impl Into<String>) -> Self {
        Self {
            clock_in: Some(Some(time.into())),
            ..Default::default()
        }
    }

    pub fn clock_out(time: impl Into<String>) -> Self {
        Self {
            clock_out: Some(Some(time.into())),
            ..Default::default()
        }
    }

    pub fn breaks(breaks: Vec<BreakInterval>) -> Self {
        Self {
            breaks: Some(breaks),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.clock_in.is_none() && self.clock_out.is_none() && self.breaks.is_none()
    }
}
