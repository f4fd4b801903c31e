//! Courtside: NBA CSV loader and report printer
//!
//! Loads team, player and game CSV files into a SQLite database and prints a
//! fixed set of analytical reports as aligned text tables.
//!
//! ## Features
//!
//! - **Header-driven loading**: the insert column list comes from each file's
//!   first line, so any CSV whose header matches table columns can be loaded
//! - **Atomic batches**: a file's rows are committed together or not at all
//! - **Shape-agnostic reports**: any read query renders as a fixed-width table
//!   or as JSON
//!
//! ## Quick Start
//!
//! ```rust
//! use courtside::storage::{self, Database, RecordSet};
//! use courtside::ColumnWidth;
//!
//! # fn example() -> courtside::Result<()> {
//! let mut db = Database::open_in_memory()?;
//! storage::recreate_table(&db, storage::find_table("teams")?)?;
//!
//! let records = RecordSet::parse("team_id,name,location,nba_titles\n1,Lakers,LA,17\n").unwrap();
//! storage::load_record_set(&mut db, &records, "teams")?;
//!
//! let text = storage::report(&db, "SELECT name FROM teams", ColumnWidth::new(10))?;
//! assert_eq!(text.lines().nth(2), Some("Lakers    "));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Environment Configuration
//!
//! Set the database file to avoid passing `--db-path` on every run:
//! ```bash
//! export COURTSIDE_DB_PATH=/var/lib/courtside/nba.db
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod reports;
pub mod storage;

// Re-export commonly used types
pub use cli::types::ColumnWidth;
pub use error::{CourtsideError, Result};

pub const DB_PATH_ENV_VAR: &str = "COURTSIDE_DB_PATH";

/// Database file used when neither `--db-path` nor the env var is given
pub const DEFAULT_DB_PATH: &str = "dbApp.db";
