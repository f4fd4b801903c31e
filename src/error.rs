//! Error types for the courtside loader

use std::path::PathBuf;
use thiserror::Error;


pub type Result<T> = std::result::Result<T, CourtsideError>;

#[derive(Error, Debug)]
pub enum CourtsideError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),

    #[error("JSON rendering failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{} has no header line", path.display())]
    EmptyFile { path: PathBuf },

    #[error("Row on line {line} has {found} fields, header has {expected}")]
    MalformedRow {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("No table definition named {name}")]
    UnknownTable { name: String },
}

impl CourtsideError {
    /// Wrap an I/O error with the path that produced it.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CourtsideError::Io {
            path: path.into(),
            source,
        }
    }
}
