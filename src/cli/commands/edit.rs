use super::audit;
use crate::cli::commands::show::print_day;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::attendance::{AttendanceLogic, find_record};
use crate::db::store::open_store;
use crate::errors::{AppError, AppResult};
use crate::models::{BreakInterval, RecordUpdate};
use crate::ui::messages::{success, warning};
use crate::utils::date;
use crate::utils::time::{parse_optional_time, parse_time_of_day, require_time};

/// Edit any date through the same merge path as the live actions.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        date: date_arg,
        clock_in,
        clock_out,
        clear_in,
        clear_out,
        breaks,
        clear_breaks,
    } = cmd
    {
        let d = date::parse_date(date_arg)
            .ok_or_else(|| AppError::InvalidDate(date_arg.to_string()))?;

        let update = RecordUpdate {
            clock_in: tri_state(parse_optional_time(clock_in.as_ref())?, *clear_in),
            clock_out: tri_state(parse_optional_time(clock_out.as_ref())?, *clear_out),
            breaks: match (breaks, *clear_breaks) {
                (Some(spec), _) => Some(parse_breaks(spec)?),
                (None, true) => Some(Vec::new()),
                (None, false) => None,
            },
        };

        let mut store = open_store(cfg)?;
        let records = AttendanceLogic::edit(store.as_mut(), d, &update)?;

        success(format!("Record for {} updated.", d));
        audit(cfg, "edit", &d.to_string(), &describe(&update));

        if let Some(r) = find_record(&records, d) {
            if let (Some(i), Some(o)) = (
                r.clock_in.as_deref().and_then(parse_time_of_day),
                r.clock_out.as_deref().and_then(parse_time_of_day),
            ) && o < i
            {
                warning("Clock-out is earlier than clock-in: worked time counts as zero.");
            }
            if r.clock_out.is_some() && r.has_open_break() {
                warning("The day is clocked out but a break is still running; close it with --breaks.");
            }
            print_day(r, cfg);
        }
    }
    Ok(())
}

fn tri_state(value: Option<String>, clear: bool) -> Option<Option<String>> {
    match (value, clear) {
        (Some(v), _) => Some(Some(v)),
        (None, true) => Some(None),
        (None, false) => None,
    }
}

/// Parse `"12:00-13:00,15:00-15:10"` into break intervals.
///
/// `"HH:MM-"` is a running break and is only accepted as the last entry.
/// An empty string means "no breaks".
pub fn parse_breaks(spec: &str) -> AppResult<Vec<BreakInterval>> {
    let spec = spec.trim();
    if spec.is_empty() {
        return Ok(Vec::new());
    }

    let parts: Vec<&str> = spec.split(',').map(str::trim).collect();
    let mut out = Vec::with_capacity(parts.len());

    for (i, part) in parts.iter().enumerate() {
        let (start, end) = part
            .split_once('-')
            .ok_or_else(|| AppError::InvalidBreaks(part.to_string()))?;

        let start = require_time(start.trim()).map_err(|_| AppError::InvalidBreaks(part.to_string()))?;
        let end = end.trim();

        if end.is_empty() {
            if i + 1 != parts.len() {
                return Err(AppError::InvalidBreaks(format!(
                    "{} (only the last break may be open)",
                    part
                )));
            }
            out.push(BreakInterval::open(start));
        } else {
            let end = require_time(end).map_err(|_| AppError::InvalidBreaks(part.to_string()))?;
            out.push(BreakInterval::closed(start, end));
        }
    }

    Ok(out)
}

fn describe(update: &RecordUpdate) -> String {
    let mut parts = Vec::new();
    match &update.clock_in {
        Some(Some(t)) => parts.push(format!("in={}", t)),
        Some(None) => parts.push("in=cleared".to_string()),
        None => {}
    }
    match &update.clock_out {
        Some(Some(t)) => parts.push(format!("out={}", t)),
        Some(None) => parts.push("out=cleared".to_string()),
        None => {}
    }
    if let Some(b) = &update.breaks {
        parts.push(format!("breaks={}", b.len()));
    }
    parts.join(" ")
}
