use super::{audit, resolve_stamp};
use crate::cli::commands::show::print_day;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::attendance::{AttendanceLogic, find_record};
use crate::core::session;
use crate::db::store::open_store;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle `in` and `out`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let mut store = open_store(cfg)?;

    match cmd {
        Commands::In(stamp) => {
            let (date, time) = resolve_stamp(stamp)?;
            let records = AttendanceLogic::clock_in(store.as_mut(), date, &time)?;

            success(format!("Clocked in at {} on {}.", time, date));
            audit(cfg, "clock_in", &date.to_string(), &format!("in {}", time));

            if let Some(r) = find_record(&records, date) {
                print_day(r, cfg);
            }
        }
        Commands::Out(stamp) => {
            let (date, time) = resolve_stamp(stamp)?;
            let current = store.load(date)?;
            let update = session::clock_out(current.as_ref(), date, &time)?;
            // a break list in the update means a running break was closed
            let closed_break = update.breaks.is_some();

            let records =
                AttendanceLogic::save_over(store.as_mut(), current.as_ref(), date, &update)?;

            if closed_break {
                success(format!("Running break closed at {}.", time));
            }
            success(format!("Clocked out at {} on {}.", time, date));
            audit(cfg, "clock_out", &date.to_string(), &format!("out {}", time));

            if let Some(r) = find_record(&records, date) {
                print_day(r, cfg);
            }
        }
        _ => {}
    }

    Ok(())
}
