use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::Store;
use crate::errors::AppResult;
use crate::models::employee::Employee;
use crate::ui::messages::success;
use uuid::Uuid;

/// Create a new employee record or put-or-replace an existing one.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        id,
        name,
        position,
        start_date,
        location,
        salary,
        benefits,
    } = cmd
    {
        let employee = Employee {
            id: id
                .clone()
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            name: name.clone(),
            position: position.clone(),
            start_date: start_date.clone(),
            location: location.clone(),
            salary: *salary,
            benefits: benefits.clone(),
        };

        employee.validate()?;

        let store = Store::open(&cfg.database)?;
        let existed = store.employee(&employee.id)?.is_some();
        store.put_employee(&employee)?;

        if existed {
            success(format!("Employee {} updated", employee.id));
        } else {
            success(format!("Employee {} added", employee.id));
        }
    }
    Ok(())
}
