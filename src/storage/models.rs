//! Data models for the storage layer

use crate::error::{CourtsideError, Result};
use std::path::PathBuf;

/// Field separator for input files. There is no quoting or escaping, so a
/// value containing it splits into extra fields.
pub const DELIMITER: char = ',';

/// A parsed delimited file: header column names plus raw data rows.
///
/// Rows are kept exactly as split; length checks against the header happen
/// when the rows are bound for insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSet {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RecordSet {
    /// Split `text` into a header line and data rows.
    ///
    /// A `\r` before each newline is dropped and a trailing newline does not
    /// add a row. Header names are trimmed; values are not.
    pub fn parse(text: &str) -> Option<Self> {
        let mut lines = text.lines();
        let header = split_line(lines.next()?)
            .into_iter()
            .map(|h| h.trim().to_string())
            .collect();
        let rows = lines.map(split_line).collect();
        Some(Self { header, rows })
    }

    /// Number of header columns
    pub fn width(&self) -> usize {
        self.header.len()
    }

    /// Truncate every row to the header width, failing on the first row
    /// that is too short.
    ///
    /// Line numbers in the error are 1-based file lines (the header is
    /// line 1).
    pub fn bound_rows(&self) -> Result<Vec<&[String]>> {
        let width = self.width();
        self.rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                if row.len() < width {
                    Err(CourtsideError::MalformedRow {
                        line: i + 2,
                        expected: width,
                        found: row.len(),
                    })
                } else {
                    Ok(&row[..width])
                }
            })
            .collect()
    }
}

fn split_line(line: &str) -> Vec<String> {
    line.split(DELIMITER).map(str::to_string).collect()
}

/// Summary of a committed file load
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub table: String,
    pub file: Option<PathBuf>,
    pub columns: Vec<String>,
    pub rows: usize,
}

/// Result of a read query, with every value already converted to text.
///
/// `None` marks an SQL NULL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryResult {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}
