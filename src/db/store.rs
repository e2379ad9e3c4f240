//! The local record store: employee and offer collections over SQLite.
//!
//! The handle is an explicit value constructed once per command and passed
//! by reference to whatever needs it. Schema creation runs on open, so a
//! store is usable from its first call.

use crate::db::migrate::run_pending_migrations;
use crate::errors::AppResult;
use crate::models::employee::Employee;
use crate::models::offer::Offer;
use rusqlite::{Connection, OptionalExtension, params};
use std::path::Path;

pub struct Store {
    pub conn: Connection,
}

impl Store {
    /// Open (and if needed create) the database at `path`.
    pub fn open(path: &str) -> AppResult<Self> {
        let conn = Connection::open(Path::new(path))?;
        run_pending_migrations(&conn)?;
        Ok(Self { conn })
    }

    // ---------------------------
    // Employee operations
    // ---------------------------

    /// Insert or replace an employee keyed by its id.
    pub fn put_employee(&self, employee: &Employee) -> AppResult<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO employees
             (id, name, position, start_date, location, salary, benefits)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                employee.id,
                employee.name,
                employee.position,
                employee.start_date,
                employee.location,
                employee.salary,
                employee.benefits,
            ],
        )?;
        Ok(())
    }

    pub fn employee(&self, id: &str) -> AppResult<Option<Employee>> {
        let row = self
            .conn
            .query_row(
                "SELECT id, name, position, start_date, location, salary, benefits
                 FROM employees WHERE id = ?1",
                params![id],
                row_to_employee,
            )
            .optional()?;
        Ok(row)
    }

    pub fn employees(&self) -> AppResult<Vec<Employee>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, position, start_date, location, salary, benefits
             FROM employees",
        )?;
        let rows = stmt.query_map([], row_to_employee)?;
        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    /// Delete by id; returns whether a record existed.
    pub fn delete_employee(&self, id: &str) -> AppResult<bool> {
        let n = self
            .conn
            .execute("DELETE FROM employees WHERE id = ?1", params![id])?;
        Ok(n > 0)
    }

    // ---------------------------
    // Offer operations
    // ---------------------------

    /// Insert or replace an offer keyed by its id.
    /// The paragraph sequence is stored as a JSON array.
    pub fn put_offer(&self, offer: &Offer) -> AppResult<()> {
        let content = serde_json::to_string(&offer.content)?;
        self.conn.execute(
            "INSERT OR REPLACE INTO offers (id, employee_id, content, accepted)
             VALUES (?1, ?2, ?3, ?4)",
            params![offer.id, offer.employee_id, content, offer.accepted],
        )?;
        Ok(())
    }

    pub fn offer(&self, id: &str) -> AppResult<Option<Offer>> {
        let row = self
            .conn
            .query_row(
                "SELECT id, employee_id, content, accepted FROM offers WHERE id = ?1",
                params![id],
                row_to_offer_raw,
            )
            .optional()?;
        row.map(parse_offer).transpose()
    }

    /// The offer generated for one employee, if any.
    /// `employee_id` is not indexed or constrained; a scan is fine at this
    /// scale and matches the soft-reference contract.
    pub fn offer_for_employee(&self, employee_id: &str) -> AppResult<Option<Offer>> {
        let row = self
            .conn
            .query_row(
                "SELECT id, employee_id, content, accepted FROM offers
                 WHERE employee_id = ?1",
                params![employee_id],
                row_to_offer_raw,
            )
            .optional()?;
        row.map(parse_offer).transpose()
    }

    pub fn offers(&self) -> AppResult<Vec<Offer>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, employee_id, content, accepted FROM offers")?;
        let rows = stmt.query_map([], row_to_offer_raw)?;
        let mut out = Vec::new();
        for r in rows {
            out.push(parse_offer(r?)?);
        }
        Ok(out)
    }

    pub fn delete_offer(&self, id: &str) -> AppResult<bool> {
        let n = self
            .conn
            .execute("DELETE FROM offers WHERE id = ?1", params![id])?;
        Ok(n > 0)
    }

    // ---------------------------
    // Bulk operations
    // ---------------------------

    /// Empty both collections inside a single transaction.
    pub fn clear_all(&mut self) -> AppResult<()> {
        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM employees", [])?;
        tx.execute("DELETE FROM offers", [])?;
        tx.commit()?;
        Ok(())
    }
}

fn row_to_employee(row: &rusqlite::Row) -> rusqlite::Result<Employee> {
    Ok(Employee {
        id: row.get(0)?,
        name: row.get(1)?,
        position: row.get(2)?,
        start_date: row.get(3)?,
        location: row.get(4)?,
        salary: row.get(5)?,
        benefits: row.get(6)?,
    })
}

/// Offer row with the content column still in its JSON form.
fn row_to_offer_raw(row: &rusqlite::Row) -> rusqlite::Result<(String, String, String, bool)> {
    Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?))
}

fn parse_offer((id, employee_id, content, accepted): (String, String, String, bool)) -> AppResult<Offer> {
    Ok(Offer {
        id,
        employee_id,
        content: serde_json::from_str(&content)?,
        accepted,
    })
}
