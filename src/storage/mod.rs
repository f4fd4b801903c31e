//! Storage layer for the courtside loader
//!
//! This module wraps the single SQLite connection and the operations that
//! run through it:
//! - `models`: Parsed record sets, load and query results
//! - `schema`: Database connection management
//! - `tables`: Static table definitions and drop/create
//! - `loader`: Header-driven CSV batch loading
//! - `report`: Query execution and fixed-width rendering

pub mod loader;
pub mod models;
pub mod report;
pub mod schema;
pub mod tables;


pub use loader::{load_record_set, load_table};
pub use models::*;
pub use report::{query_rows, render_json, render_table, report, SEPARATOR_UNIT};
pub use schema::Database;
pub use tables::{find_table, recreate_table, TableDef, TABLES};
