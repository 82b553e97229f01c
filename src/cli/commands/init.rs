use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::store::open_store;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and configuration file (skipped in test mode)
///  - the record store (SQLite schema + migrations, or the JSON file's directory)
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.clone(), cli.test)?;

    info("Initializing dayclock…");
    info(format!("Database : {}", cfg.database));

    // opening runs all pending migrations
    let store = open_store(&cfg)?;
    drop(store);

    super::audit(
        &cfg,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", cfg.database),
    );

    success(format!("Store ready at {}", cfg.database));
    Ok(())
}
