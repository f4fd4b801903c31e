//! Database connection management

use crate::error::Result;
use rusqlite::Connection;
use std::path::Path;
use tracing::{error, info};

/// Owner of the one SQLite connection used for a whole run.
///
/// The connection is released by [`Database::close`] on the normal path and
/// by `Drop` on any early return.
pub struct Database {
    pub(crate) conn: Connection,
}

impl Database {
    /// Open (creating if needed) the database file at `path`
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match Connection::open(path).and_then(Self::configure) {
            Ok(db) => {
                info!("connection to SQLite established ({})", path.display());
                Ok(db)
            }
            Err(e) => {
                error!("could not open {}: {}", path.display(), e);
                Err(e.into())
            }
        }
    }

    /// Create an in-memory database for testing
    pub fn open_in_memory() -> Result<Self> {
        let db = Connection::open_in_memory().and_then(Self::configure)?;
        Ok(db)
    }

    /// Turn off foreign-key enforcement, which the bundled SQLite enables.
    ///
    /// References are declared in the schema but never checked: a player may
    /// name a team that was not loaded, and tables are dropped in any order.
    fn configure(conn: Connection) -> rusqlite::Result<Self> {
        conn.pragma_update(None, "foreign_keys", false)?;
        Ok(Self { conn })
    }

    /// Borrow the underlying connection for ad-hoc queries
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Count the rows currently stored in `table`
    pub fn row_count(&self, table: &str) -> Result<i64> {
        let sql = format!("SELECT COUNT(*) FROM {}", quote_ident(table));
        let count = self.conn.query_row(&sql, [], |row| row.get(0))?;
        Ok(count)
    }

    /// Close the connection, surfacing any error SQLite reports on close
    pub fn close(self) -> Result<()> {
        match self.conn.close() {
            Ok(()) => {
                info!("database connection closed");
                Ok(())
            }
            // The connection handed back is dropped here, which finalizes it.
            Err((_conn, e)) => {
                error!("closing database connection failed: {}", e);
                Err(e.into())
            }
        }
    }
}

/// Quote an SQL identifier, doubling any embedded double quotes.
pub(crate) fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
