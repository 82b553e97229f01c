use super::{audit, resolve_stamp};
use crate::cli::commands::show::print_day;
use crate::cli::parser::{BreakAction, Commands};
use crate::config::Config;
use crate::core::attendance::{AttendanceLogic, find_record};
use crate::db::store::open_store;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Break { action } = cmd {
        let mut store = open_store(cfg)?;

        let (date, records) = match action {
            BreakAction::Start(stamp) => {
                let (date, time) = resolve_stamp(stamp)?;
                let records = AttendanceLogic::start_break(store.as_mut(), date, &time)?;
                success(format!("Break started at {}.", time));
                audit(cfg, "break_start", &date.to_string(), &format!("start {}", time));
                (date, records)
            }
            BreakAction::End(stamp) => {
                let (date, time) = resolve_stamp(stamp)?;
                let records = AttendanceLogic::end_break(store.as_mut(), date, &time)?;
                success(format!("Break ended at {}.", time));
                audit(cfg, "break_end", &date.to_string(), &format!("end {}", time));
                (date, records)
            }
        };

        if let Some(r) = find_record(&records, date) {
            print_day(r, cfg);
        }
    }
    Ok(())
}
