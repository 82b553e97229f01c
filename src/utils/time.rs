//! Time utilities: strict HH:MM parsing, elapsed minutes, duration and
//! time-of-day rendering.
//!
//! Every helper here treats malformed input as absent. A bad time never
//! raises: it contributes zero minutes and renders as the placeholder.

use crate::errors::{AppError, AppResult};
use chrono::{Local, NaiveTime, Timelike};

/// Placeholder shown for a missing or unreadable time of day.
pub const TIME_PLACEHOLDER: &str = "--:--";

/// Parse a strict, zero-padded 24h `HH:MM` string into minutes since midnight.
///
/// `"9:00"`, `"09:00:00"`, `"24:00"` and `"09:60"` are all rejected.
pub fn parse_time_of_day(text: &str) -> Option<u32> {
    let bytes = text.as_bytes();
    if bytes.len() != 5 || bytes[2] != b':' {
        return None;
    }
    if ![0, 1, 3, 4].iter().all(|&i| bytes[i].is_ascii_digit()) {
        return None;
    }

    let t = NaiveTime::parse_from_str(text, "%H:%M").ok()?;
    Some(t.hour() * 60 + t.minute())
}

/// Render minutes since midnight back to `HH:MM`.
pub fn minutes_to_hhmm(minutes: u32) -> String {
    format!("{:02}:{:02}", (minutes / 60) % 24, minutes % 60)
}

/// Minutes from `start` to `end`, clamped at zero.
///
/// Missing or malformed input on either side yields `0`. There is no
/// overnight wraparound: `end < start` is clamped, not treated as +24h.
pub fn elapsed_minutes(start: Option<&str>, end: Option<&str>) -> u32 {
    match (
        start.and_then(parse_time_of_day),
        end.and_then(parse_time_of_day),
    ) {
        (Some(s), Some(e)) => e.saturating_sub(s),
        _ => 0,
    }
}

/// Render a minute count as `"{h}時間{m}分"`.
pub fn format_duration(minutes: u32) -> String {
    format!("{}時間{}分", minutes / 60, minutes % 60)
}

/// Render a time of day for display; absent or invalid input becomes `--:--`.
pub fn format_time_of_day(text: Option<&str>) -> String {
    text.and_then(parse_time_of_day)
        .map(minutes_to_hhmm)
        .unwrap_or_else(|| TIME_PLACEHOLDER.to_string())
}

/// Current local time as `HH:MM`.
pub fn now_hhmm() -> String {
    Local::now().format("%H:%M").to_string()
}

/// Validate a user supplied time; used by the CLI where bad input must be reported.
pub fn require_time(text: &str) -> AppResult<String> {
    parse_time_of_day(text)
        .map(minutes_to_hhmm)
        .ok_or_else(|| AppError::InvalidTime(text.to_string()))
}

pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<String>> {
    input.map(|s| require_time(s)).transpose()
}
