use crate::errors::AppResult;
use crate::export::notify_export_success;
use crate::models::employee::Employee;
use std::fs::File;
use std::path::Path;

pub(crate) fn export_json(employees: &[Employee], path: &Path) -> AppResult<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, employees)?;

    notify_export_success("JSON", path);
    Ok(())
}
