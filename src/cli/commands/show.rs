use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::store::open_store;
use crate::errors::{AppError, AppResult};
use crate::models::{AttendanceRecord, DayStatus};
use crate::ui::messages::{header, info};
use crate::utils::colors::{CYAN, GREEN, RESET, YELLOW, colorize_in_out, colorize_optional};
use crate::utils::date;
use crate::utils::time::{TIME_PLACEHOLDER, format_duration, format_time_of_day};
use chrono::NaiveDate;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { date: d } = cmd {
        let day = match d {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?,
            None => date::today(),
        };

        let store = open_store(cfg)?;
        match store.load(day)? {
            Some(record) => print_day(&record, cfg),
            None => info(format!("No record for {}.", day)),
        }
    }
    Ok(())
}

pub(crate) fn day_title(d: &NaiveDate, cfg: &Config) -> String {
    if cfg.show_weekday {
        format!("{} ({})", d, date::weekday_str(d))
    } else {
        d.to_string()
    }
}

fn status_colored(status: DayStatus) -> String {
    let color = match status {
        DayStatus::NotStarted => YELLOW,
        DayStatus::Working => CYAN,
        DayStatus::OnBreak => YELLOW,
        DayStatus::Finished => GREEN,
    };
    format!("{color}{}{RESET}", status.label())
}

fn optional_duration(m: Option<u32>) -> String {
    m.map(format_duration).unwrap_or_else(|| "-".to_string())
}

/// Full view of one day: status, clock times, each break and the totals.
pub fn print_day(record: &AttendanceRecord, cfg: &Config) {
    header(day_title(&record.date, cfg));
    println!("Status : {}", status_colored(record.status()));
    println!(
        "In     : {}",
        colorize_in_out(&format_time_of_day(record.clock_in.as_deref()), true)
    );
    println!(
        "Out    : {}",
        colorize_in_out(&format_time_of_day(record.clock_out.as_deref()), false)
    );

    if record.breaks.is_empty() {
        println!("Breaks : {}", colorize_optional("-"));
    } else {
        println!("Breaks :");
        for (i, b) in record.breaks.iter().enumerate() {
            let end = match &b.end {
                Some(_) => format_time_of_day(b.end.as_deref()),
                None => format!("{YELLOW}(running){RESET}"),
            };
            let len = if b.is_open() {
                colorize_optional(TIME_PLACEHOLDER)
            } else {
                format_duration(b.minutes())
            };
            println!(
                "  {}. {} - {}  {}",
                i + 1,
                format_time_of_day(Some(&b.start)),
                end,
                len
            );
        }
    }

    println!(
        "Worked : {}",
        colorize_optional(&optional_duration(record.total_work_minutes))
    );
    println!(
        "Break  : {}",
        colorize_optional(&optional_duration(record.total_break_minutes))
    );
}
