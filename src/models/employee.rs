use crate::errors::{AppError, AppResult};
use crate::utils::date;
use serde::{Deserialize, Serialize};

/// An employee record as managed from the admin commands.
/// `id` is an opaque identifier generated at creation time and unique
/// across the store. `start_date` is kept as a `YYYY-MM-DD` string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub position: String,
    pub start_date: String,
    pub location: String,
    pub salary: i64,
    pub benefits: String,
}

impl Employee {
    /// Validate the record before it is written to the store.
    /// Every field is required, the salary must be non-negative and the
    /// start date must parse as a calendar date.
    pub fn validate(&self) -> AppResult<()> {
        for (field, value) in [
            ("id", &self.id),
            ("name", &self.name),
            ("position", &self.position),
            ("start-date", &self.start_date),
            ("location", &self.location),
            ("benefits", &self.benefits),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::MissingField(field.to_string()));
            }
        }

        if self.salary < 0 {
            return Err(AppError::InvalidSalary(self.salary));
        }

        if date::parse_date(&self.start_date).is_none() {
            return Err(AppError::InvalidDate(self.start_date.clone()));
        }

        Ok(())
    }
}
