use crate::cli::parser::Commands;
use crate::core::session::SessionStore;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Login { employee_id, keep } = cmd {
        if employee_id.trim().is_empty() {
            return Err(AppError::MissingField("employee-id".to_string()));
        }

        SessionStore::new().store(employee_id.trim(), *keep)?;

        if *keep {
            success(format!("Signed in as {} (kept across sessions)", employee_id.trim()));
        } else {
            success(format!("Signed in as {}", employee_id.trim()));
        }
    }
    Ok(())
}
