//! Schema creation and upgrades, tracked through `PRAGMA user_version`.

use crate::errors::{AppError, AppResult};
use rusqlite::Connection;

/// Schema version the binary expects.
pub const SCHEMA_VERSION: i64 = 1;

pub fn current_version(conn: &Connection) -> AppResult<i64> {
    let v: i64 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;
    Ok(v)
}

/// Apply every migration above the database's recorded version.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    let mut version = current_version(conn)?;

    while version < SCHEMA_VERSION {
        match version {
            0 => create_initial_schema(conn)?,
            v => {
                return Err(AppError::Migration(format!(
                    "No migration registered for schema version {v}"
                )));
            }
        }
        version += 1;
        conn.execute_batch(&format!("PRAGMA user_version = {version}"))?;
    }

    Ok(())
}

/// v0 -> v1: the two record collections.
fn create_initial_schema(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS employees (
            id          TEXT PRIMARY KEY,
            name        TEXT NOT NULL,
            position    TEXT NOT NULL,
            start_date  TEXT NOT NULL,
            location    TEXT NOT NULL,
            salary      INTEGER NOT NULL CHECK(salary >= 0),
            benefits    TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS offers (
            id           TEXT PRIMARY KEY,
            employee_id  TEXT NOT NULL,
            content      TEXT NOT NULL,
            accepted     INTEGER NOT NULL DEFAULT 0
        );
        "#,
    )?;
    Ok(())
}
