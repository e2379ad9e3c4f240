//! Database maintenance helpers for the `db` admin command.

use crate::db::Store;
use crate::db::migrate;
use crate::errors::AppResult;
use std::fs;
use std::path::Path;

pub struct DbInfo {
    pub path: String,
    pub size_bytes: u64,
    pub schema_version: i64,
    pub employees: i64,
    pub offers: i64,
}

/// PRAGMA integrity_check; "ok" means a healthy file.
pub fn integrity_check(store: &Store) -> AppResult<String> {
    let result: String = store
        .conn
        .query_row("PRAGMA integrity_check", [], |row| row.get(0))?;
    Ok(result)
}

pub fn vacuum(store: &Store) -> AppResult<()> {
    store.conn.execute_batch("VACUUM")?;
    Ok(())
}

pub fn info(store: &Store, db_path: &str) -> AppResult<DbInfo> {
    let employees: i64 = store
        .conn
        .query_row("SELECT COUNT(*) FROM employees", [], |row| row.get(0))?;
    let offers: i64 = store
        .conn
        .query_row("SELECT COUNT(*) FROM offers", [], |row| row.get(0))?;

    let size_bytes = fs::metadata(Path::new(db_path)).map(|m| m.len()).unwrap_or(0);

    Ok(DbInfo {
        path: db_path.to_string(),
        size_bytes,
        schema_version: migrate::current_version(&store.conn)?,
        employees,
        offers,
    })
}
