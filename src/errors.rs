//! Unified application error type.
//! All modules (db, core, cli, export) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    #[error("Record serialization error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Validation errors
    // ---------------------------
    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Salary must be a non-negative amount, got {0}")]
    InvalidSalary(i64),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Not an image file: {0}")]
    NotAnImage(String),

    #[error("Image exceeds the 2 MiB limit ({0} bytes)")]
    ImageTooLarge(u64),

    // ---------------------------
    // Workflow errors
    // ---------------------------
    #[error("No employee found with id {0}")]
    EmployeeNotFound(String),

    #[error("No offer found for employee {0}")]
    OfferNotFound(String),

    #[error("Not signed in: provide an employee id or run `login` first")]
    NotSignedIn,

    #[error("Terms and conditions must be agreed to before accepting")]
    TermsNotAgreed,

    #[error("Missing prerequisite: {0}")]
    MissingPrerequisite(String),

    #[error("Signature error: {0}")]
    Signature(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export format not supported: {0}")]
    InvalidExportFormat(String),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
