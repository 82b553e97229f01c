use crate::cli::commands::show::day_title;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::summary::{records_in_period, summarize};
use crate::db::store::open_store;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use crate::utils::colors::colorize_optional;
use crate::utils::date::{self, Period};
use crate::utils::formatting::bold;
use crate::utils::table::{Column, Table};
use crate::utils::time::{format_duration, format_time_of_day};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period, today } = cmd {
        let range = if *today {
            let t = date::today();
            Period { from: t, to: t }
        } else {
            resolve_period(period)?
        };

        let store = open_store(cfg)?;
        let records = store.load_all()?;
        let selected = records_in_period(&records, &range);

        if selected.is_empty() {
            info("No records in the selected period.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::left("Date"),
            Column::left("In"),
            Column::left("Out"),
            Column::right("Breaks"),
            Column::right("Break"),
            Column::right("Worked"),
        ]);

        for r in &selected {
            let duration = |m: Option<u32>| {
                colorize_optional(&m.map(format_duration).unwrap_or_else(|| "-".into()))
            };
            table.add_row(vec![
                day_title(&r.date, cfg),
                colorize_optional(&format_time_of_day(r.clock_in.as_deref())),
                colorize_optional(&format_time_of_day(r.clock_out.as_deref())),
                r.breaks.len().to_string(),
                duration(r.total_break_minutes),
                duration(r.total_work_minutes),
            ]);
        }

        print!("{}", table.render());

        let sum = summarize(selected.iter().copied());
        println!();
        println!(
            "{} {} day(s) | worked {} | break {} | avg/day {}",
            bold("Total:"),
            sum.days,
            format_duration(sum.work_minutes),
            format_duration(sum.break_minutes),
            format_duration(sum.average_work_minutes()),
        );
    }
    Ok(())
}

fn resolve_period(period: &Option<String>) -> AppResult<Period> {
    match period {
        Some(p) => date::resolve_period(p).map_err(AppError::InvalidDate),
        None => Ok(date::current_month()),
    }
}
