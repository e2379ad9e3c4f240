//! Roster export orchestration: load, guard the output path, dispatch to
//! the requested format writer.

use crate::db::Store;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::ui::messages::warning;
use std::io::{self, Write};
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    pub fn export(store: &Store, format: &ExportFormat, file: &str, force: bool) -> AppResult<()> {
        let path = Path::new(file);
        ensure_writable(path, force)?;

        let employees = store.employees()?;
        if employees.is_empty() {
            warning("No employee records found. Nothing to export.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => crate::export::csv::export_csv(&employees, path),
            ExportFormat::Json => crate::export::json::export_json(&employees, path),
            ExportFormat::Xlsx => crate::export::xlsx::export_xlsx(&employees, path),
        }
    }
}

/// Refuse to clobber an existing file unless forced or confirmed.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    eprint!(
        "⚠️  File '{}' already exists. Overwrite? [y/N]: ",
        path.display()
    );
    io::stderr().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let ans = answer.trim().to_ascii_lowercase();

    if ans == "y" || ans == "yes" {
        Ok(())
    } else {
        Err(AppError::Export(
            "cancelled: existing file not overwritten".to_string(),
        ))
    }
}

/// Column order shared by every roster format.
pub(crate) fn roster_headers() -> Vec<&'static str> {
    vec![
        "id",
        "name",
        "position",
        "start_date",
        "location",
        "salary",
        "benefits",
    ]
}

pub(crate) fn employee_to_row(e: &crate::models::employee::Employee) -> Vec<String> {
    vec![
        e.id.clone(),
        e.name.clone(),
        e.position.clone(),
        e.start_date.clone(),
        e.location.clone(),
        e.salary.to_string(),
        e.benefits.clone(),
    ]
}
