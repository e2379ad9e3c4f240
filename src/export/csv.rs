use crate::errors::{AppError, AppResult};
use crate::export::logic::{employee_to_row, roster_headers};
use crate::export::notify_export_success;
use crate::models::employee::Employee;
use csv::Writer;
use std::path::Path;

pub(crate) fn export_csv(employees: &[Employee], path: &Path) -> AppResult<()> {
    let mut wtr = Writer::from_path(path).map_err(to_export_error)?;

    wtr.write_record(roster_headers()).map_err(to_export_error)?;
    for e in employees {
        wtr.write_record(employee_to_row(e)).map_err(to_export_error)?;
    }
    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}

fn to_export_error(e: csv::Error) -> AppError {
    AppError::Export(e.to_string())
}
