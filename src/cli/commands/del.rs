use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::Store;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id } = cmd {
        let store = Store::open(&cfg.database)?;

        if !store.delete_employee(id)? {
            return Err(AppError::EmployeeNotFound(id.clone()));
        }
        success(format!("Employee {id} deleted"));
    }
    Ok(())
}
