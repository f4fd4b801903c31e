//! Header-driven batch loading of delimited files

use super::models::{LoadReport, RecordSet};
use super::schema::{quote_ident, Database};
use crate::error::{CourtsideError, Result};
use rusqlite::params_from_iter;
use std::path::Path;
use tracing::{debug, info};

/// Read `path` and insert all of its data rows into `table` in one
/// transaction.
///
/// The first line names the target columns. Either every row is committed
/// or none is.
pub fn load_table(db: &mut Database, path: impl AsRef<Path>, table: &str) -> Result<LoadReport> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| CourtsideError::io(path, e))?;
    let records = RecordSet::parse(&text).ok_or_else(|| CourtsideError::EmptyFile {
        path: path.to_path_buf(),
    })?;

    let mut report = load_record_set(db, &records, table)?;
    report.file = Some(path.to_path_buf());
    info!(
        "reading from {} and populating {} completed",
        path.display(),
        table
    );
    Ok(report)
}

/// Insert an already-parsed record set into `table`.
pub fn load_record_set(db: &mut Database, records: &RecordSet, table: &str) -> Result<LoadReport> {
    let sql = insert_statement(table, &records.header);
    debug!("{}", sql);

    // Every row is checked before the transaction opens, so a short row
    // anywhere leaves the table untouched.
    let batch = records.bound_rows()?;
    let wide = records
        .rows
        .iter()
        .filter(|r| r.len() > records.width())
        .count();
    if wide > 0 {
        debug!("{} rows for {} have extra fields, ignoring them", wide, table);
    }

    let tx = db.conn.transaction()?;
    {
        let mut stmt = tx.prepare(&sql)?;
        for row in &batch {
            stmt.execute(params_from_iter(row.iter()))?;
        }
    }
    tx.commit()?;

    Ok(LoadReport {
        table: table.to_string(),
        file: None,
        columns: records.header.clone(),
        rows: batch.len(),
    })
}

/// Build `INSERT INTO "table" ("c1", ...) VALUES (?1, ...)` for any column list.
pub fn insert_statement(table: &str, columns: &[String]) -> String {
    let names = columns
        .iter()
        .map(|c| quote_ident(c))
        .collect::<Vec<_>>()
        .join(", ");
    let placeholders = (1..=columns.len())
        .map(|i| format!("?{}", i))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        quote_ident(table),
        names,
        placeholders
    )
}
