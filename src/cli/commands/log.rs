use crate::cli::parser::Commands;
use crate::config::{Backend, Config};
use crate::core::log::LogLogic;
use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        if cfg.effective_backend() != Backend::Sqlite {
            return Err(AppError::Config(
                "the internal log is only kept in SQLite databases".into(),
            ));
        }
        let pool = DbPool::new(&cfg.database)?;
        run_pending_migrations(&pool.conn)?;
        LogLogic::print_log(&pool)?;
    }

    Ok(())
}
