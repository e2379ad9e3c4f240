use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::Store;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Create the config file (unless in test mode) and the database schema.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;

    let db_str = db_path.to_string_lossy().to_string();
    Store::open(&db_str)?;

    success(format!("Database ready: {}", db_path.display()));
    Ok(())
}
