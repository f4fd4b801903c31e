//! Command implementations for the courtside CLI

pub mod run;

use crate::{DB_PATH_ENV_VAR, DEFAULT_DB_PATH};
use std::path::PathBuf;


/// Resolve the database path: explicit value, then env var, then the default.
pub fn resolve_db_path(db_path: Option<PathBuf>) -> PathBuf {
    db_path
        .or_else(|| {
            std::env::var(DB_PATH_ENV_VAR)
                .ok()
                .filter(|s| !s.is_empty())
                .map(PathBuf::from)
        })
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_PATH))
}
