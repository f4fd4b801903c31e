//! CLI argument definitions and parsing.

pub mod types;

use clap::Parser;
use std::path::PathBuf;

/// Load the team, player and game CSV files into SQLite and print the
/// fixed reports.
///
/// With no arguments the database is `dbApp.db` and the CSV files are read
/// from the working directory.
#[derive(Debug, Parser)]
#[clap(name = "courtside", about = "Load NBA CSV data into SQLite and print reports")]
pub struct Courtside {
    /// SQLite database file (or set `COURTSIDE_DB_PATH` env var).
    #[clap(long)]
    pub db_path: Option<PathBuf>,

    /// Directory holding teams.csv, players.csv and games.csv.
    #[clap(long, default_value = ".")]
    pub data_dir: PathBuf,

    /// Output report rows as JSON instead of aligned text.
    #[clap(long)]
    pub json: bool,

    /// Exit with a failure status if any step failed.
    #[clap(long)]
    pub strict: bool,

    /// Log debug-level diagnostics.
    #[clap(long, short)]
    pub verbose: bool,
}
