//! XLSX roster export with styled header and banded rows.

use crate::errors::{AppError, AppResult};
use crate::export::logic::{employee_to_row, roster_headers};
use crate::export::notify_export_success;
use crate::models::employee::Employee;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook};
use std::io;
use std::path::Path;
use unicode_width::UnicodeWidthStr;

pub(crate) fn export_xlsx(employees: &[Employee], path: &Path) -> AppResult<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    let headers = roster_headers();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_io_app_error)?;
    }

    worksheet.set_freeze_panes(1, 0).ok();

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    for (row_index, employee) in employees.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band = if row_index % 2 == 0 { band1 } else { band2 };

        for (col, value) in employee_to_row(employee).iter().enumerate() {
            write_cell(worksheet, row, col as u16, value, band)?;
            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(value.as_str()));
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_io_app_error)?;
    }

    let path_str = path
        .to_str()
        .ok_or_else(|| AppError::from(io::Error::other("invalid path")))?;
    workbook.save(path_str).map_err(to_io_app_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

/// Numbers land right-aligned so the salary column reads like a ledger.
fn write_cell(
    worksheet: &mut rust_xlsxwriter::Worksheet,
    row: u32,
    col: u16,
    value: &str,
    band: Color,
) -> AppResult<()> {
    let base = Format::new()
        .set_background_color(band)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    if let Ok(num) = value.parse::<f64>() {
        let fmt = base.set_align(FormatAlign::Right);
        worksheet
            .write_with_format(row, col, num, &fmt)
            .map_err(to_io_app_error)?;
    } else {
        worksheet
            .write_with_format(row, col, value, &base)
            .map_err(to_io_app_error)?;
    }

    Ok(())
}

fn to_io_app_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::from(io::Error::other(e.to_string()))
}
