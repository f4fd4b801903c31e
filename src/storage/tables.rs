//! Static table definitions and schema (re)creation

use super::schema::{quote_ident, Database};
use crate::error::{CourtsideError, Result};
use tracing::info;

/// A table the loader can target: its name and full `CREATE TABLE` statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableDef {
    pub name: &'static str,
    pub create_sql: &'static str,
}

/// SQL to create the players table
///
/// `team_id` is nullable; the `ON DELETE SET NULL` rule is declared but no
/// operation deletes teams.
const CREATE_PLAYERS_TABLE: &str = r#"
CREATE TABLE players (
    player_id integer PRIMARY KEY,
    name text NOT NULL,
    position text NOT NULL,
    team_id integer,
    FOREIGN KEY(team_id) REFERENCES teams(team_id) ON DELETE SET NULL
)
"#;

/// SQL to create the teams table
const CREATE_TEAMS_TABLE: &str = r#"
CREATE TABLE teams (
    team_id integer PRIMARY KEY,
    name text NOT NULL,
    location text NOT NULL,
    nba_titles integer NOT NULL
)
"#;

/// SQL to create the games table
const CREATE_GAMES_TABLE: &str = r#"
CREATE TABLE games (
    game_id integer PRIMARY KEY,
    date text NOT NULL,
    home_team_id integer NOT NULL,
    away_team_id integer NOT NULL,
    home_team_score integer NOT NULL,
    away_team_score integer NOT NULL,
    FOREIGN KEY(home_team_id) REFERENCES teams(team_id),
    FOREIGN KEY(away_team_id) REFERENCES teams(team_id)
)
"#;

pub const PLAYERS: TableDef = TableDef {
    name: "players",
    create_sql: CREATE_PLAYERS_TABLE,
};

pub const TEAMS: TableDef = TableDef {
    name: "teams",
    create_sql: CREATE_TEAMS_TABLE,
};

pub const GAMES: TableDef = TableDef {
    name: "games",
    create_sql: CREATE_GAMES_TABLE,
};

/// Every table, in creation order
pub const TABLES: &[TableDef] = &[PLAYERS, TEAMS, GAMES];

/// Look up a table definition by name
pub fn find_table(name: &str) -> Result<&'static TableDef> {
    TABLES
        .iter()
        .find(|t| t.name == name)
        .ok_or_else(|| CourtsideError::UnknownTable {
            name: name.to_string(),
        })
}

/// Drop `table` if it exists and create it again from its definition
pub fn recreate_table(db: &Database, table: &TableDef) -> Result<()> {
    let sql = format!(
        "DROP TABLE IF EXISTS {};\n{};",
        quote_ident(table.name),
        table.create_sql.trim()
    );
    db.conn.execute_batch(&sql)?;
    info!("table {} created", table.name);
    Ok(())
}
