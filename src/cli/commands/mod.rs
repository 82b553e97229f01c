pub mod break_cmd;
pub mod clock;
pub mod config;
pub mod db;
pub mod edit;
pub mod init;
pub mod list;
pub mod log;
pub mod show;

use crate::cli::parser::Stamp;
use crate::config::{Backend, Config};
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use crate::utils::{date, time};
use chrono::NaiveDate;

/// Resolve `--date`/`--at` into the target day and time, defaulting to now.
pub(crate) fn resolve_stamp(stamp: &Stamp) -> AppResult<(NaiveDate, String)> {
    let d = match &stamp.date {
        Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?,
        None => date::today(),
    };
    let t = match &stamp.at {
        Some(s) => time::require_time(s)?,
        None => time::now_hhmm(),
    };
    Ok((d, t))
}

/// Record a write in the SQLite `log` table. Never fails the command.
pub(crate) fn audit(cfg: &Config, operation: &str, target: &str, message: &str) {
    if cfg.effective_backend() != Backend::Sqlite {
        tracing::debug!(operation, target, message, "audit skipped for non-sqlite backend");
        return;
    }

    let result = DbPool::new(&cfg.database)
        .map_err(AppError::from)
        .and_then(|pool| ttlog(&pool.conn, operation, target, message));

    if let Err(e) = result {
        warning(format!("Failed to write internal log: {}", e));
    }
}
