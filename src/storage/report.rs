//! Query execution and fixed-width result rendering

use super::models::QueryResult;
use super::schema::Database;
use crate::cli::types::ColumnWidth;
use crate::error::Result;
use rusqlite::types::ValueRef;
use serde_json::{Map, Value as JsonValue};

/// Dash run printed once per column under the header line.
///
/// Its length does not follow the column width, so wide reports get a short
/// divider and narrow ones a long one.
pub const SEPARATOR_UNIT: &str = "---------------------------";

/// Text printed for an SQL NULL
pub const NULL_TEXT: &str = "null";

/// Run `query` and collect its column names and text-converted values.
///
/// Column names come from the statement itself, so aliases and computed
/// columns work without any schema knowledge.
pub fn query_rows(db: &Database, query: &str) -> Result<QueryResult> {
    let mut stmt = db.conn.prepare(query)?;
    let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();
    let count = columns.len();

    let mut rows = Vec::new();
    let mut cursor = stmt.query([])?;
    while let Some(row) = cursor.next()? {
        let mut values = Vec::with_capacity(count);
        for i in 0..count {
            values.push(value_to_text(row.get_ref(i)?));
        }
        rows.push(values);
    }

    Ok(QueryResult { columns, rows })
}

/// Run `query` and render it as an aligned text table.
pub fn report(db: &Database, query: &str, width: ColumnWidth) -> Result<String> {
    let result = query_rows(db, query)?;
    Ok(render_table(&result, width))
}

/// Render a header line, a dash separator and one line per row.
///
/// Every cell is left-justified and padded to `width`; nothing is truncated.
pub fn render_table(result: &QueryResult, width: ColumnWidth) -> String {
    let width = width.as_usize();
    let mut out = String::new();

    for name in &result.columns {
        out.push_str(&format!("{:<width$}", name, width = width));
    }
    out.push('\n');

    out.push_str(&SEPARATOR_UNIT.repeat(result.columns.len()));
    out.push('\n');

    for row in &result.rows {
        for value in row {
            let text = value.as_deref().unwrap_or(NULL_TEXT);
            out.push_str(&format!("{:<width$}", text, width = width));
        }
        out.push('\n');
    }

    out
}

/// Render rows as a pretty JSON array of `{column: value}` objects.
///
/// Keys keep the query's column order. A repeated column name gets a
/// `_2`, `_3`, ... suffix so no value is lost.
pub fn render_json(result: &QueryResult) -> Result<String> {
    let keys = unique_keys(&result.columns);
    let rows: Vec<JsonValue> = result
        .rows
        .iter()
        .map(|row| {
            let mut obj = Map::new();
            for (name, value) in keys.iter().zip(row) {
                let json_val = match value {
                    Some(s) => JsonValue::String(s.clone()),
                    None => JsonValue::Null,
                };
                obj.insert(name.clone(), json_val);
            }
            JsonValue::Object(obj)
        })
        .collect();

    Ok(serde_json::to_string_pretty(&rows)?)
}

fn unique_keys(columns: &[String]) -> Vec<String> {
    let mut keys: Vec<String> = Vec::with_capacity(columns.len());
    for name in columns {
        let mut key = name.clone();
        let mut n = 1;
        while keys.contains(&key) {
            n += 1;
            key = format!("{}_{}", name, n);
        }
        keys.push(key);
    }
    keys
}

/// Convert a stored value the way SQLite's own text cast would.
fn value_to_text(value: ValueRef<'_>) -> Option<String> {
    match value {
        ValueRef::Null => None,
        ValueRef::Integer(i) => Some(i.to_string()),
        ValueRef::Real(f) => Some(real_to_text(f)),
        ValueRef::Text(t) | ValueRef::Blob(t) => Some(String::from_utf8_lossy(t).into_owned()),
    }
}

/// Format a REAL like SQLite's `%!.15g`: 15 significant digits, trailing
/// zeros dropped but at least one digit after the point, and exponent form
/// below 1e-4 or from 1e15 up.
fn real_to_text(f: f64) -> String {
    if f.is_nan() {
        return "NaN".to_string();
    }
    if f.is_infinite() {
        return if f > 0.0 { "Inf" } else { "-Inf" }.to_string();
    }
    if f == 0.0 {
        return "0.0".to_string();
    }

    // `{:.14e}` rounds to 15 significant digits, e.g. "1.66666666666667e0"
    let sci = format!("{:.14e}", f);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if !(-4..15).contains(&exp) {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exp.abs())
    } else {
        let decimals = (14 - exp) as usize;
        trim_fraction(&format!("{:.*}", decimals, f))
    }
}

/// Drop trailing zeros after the decimal point, keeping at least one digit.
fn trim_fraction(text: &str) -> String {
    if !text.contains('.') {
        return format!("{}.0", text);
    }
    let trimmed = text.trim_end_matches('0');
    if trimmed.ends_with('.') {
        format!("{}0", trimmed)
    } else {
        trimmed.to_string()
    }
}
