//! Calendar-date helpers for employee start dates.

use chrono::{Datelike, NaiveDate};

/// Parse a `YYYY-MM-DD` date string.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Render a stored date for the letter body, e.g. "January 15, 2024".
/// Unparseable input is passed through untouched so free-text dates
/// entered by an admin still show up.
pub fn long_date(s: &str) -> String {
    match parse_date(s) {
        Some(d) => format!("{} {}, {}", d.format("%B"), d.day(), d.year()),
        None => s.to_string(),
    }
}
