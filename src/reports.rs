//! The fixed set of reports printed at the end of every run.

use crate::cli::types::ColumnWidth;

/// A titled read query and the column width it is printed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportDef {
    pub title: &'static str,
    pub query: &'static str,
    pub width: ColumnWidth,
}

pub const REPORTS: &[ReportDef] = &[
    ReportDef {
        title: "displaying all players whose team has won more than 5 NBA titles",
        query: "SELECT players.name AS player_name, teams.name AS team_name, \
                teams.nba_titles AS nba_titles \
                FROM players \
                INNER JOIN teams ON players.team_id = teams.team_id \
                WHERE teams.nba_titles > 5",
        width: ColumnWidth::new(27),
    },
    ReportDef {
        title: "displaying all games where the player by the name of Davis Bertans has played...",
        query: "SELECT games.date, home_teams.name AS home_team, away_teams.name AS away_team \
                FROM games \
                INNER JOIN teams home_teams ON games.home_team_id = home_teams.team_id \
                INNER JOIN teams away_teams ON games.away_team_id = away_teams.team_id \
                INNER JOIN players ON players.team_id = home_teams.team_id \
                OR players.team_id = away_teams.team_id \
                WHERE players.name = 'Davis Bertans'",
        width: ColumnWidth::new(25),
    },
    ReportDef {
        title: "displaying all players whose team has participated in more than one game...",
        query: "SELECT players.name, COUNT(games.game_id) AS games_played \
                FROM players \
                INNER JOIN teams on players.team_id = teams.team_id \
                LEFT JOIN games ON games.home_team_id = teams.team_id \
                OR games.away_team_id = teams.team_id \
                GROUP BY players.player_id \
                HAVING COUNT(games.game_id)>1",
        width: ColumnWidth::new(30),
    },
    ReportDef {
        title: "displaying teams sorted in descending order by the total amount of points \
                they have accumulated in their home games...",
        query: "SELECT teams.name, SUM(games.home_team_score) AS total_home_points \
                FROM teams \
                LEFT JOIN games ON teams.team_id = games.home_team_id \
                GROUP BY teams.team_id \
                ORDER BY SUM(games.home_team_score) DESC",
        width: ColumnWidth::new(30),
    },
    ReportDef {
        title: "displaying top 10 players sorted in descending order by the amount of points \
                their team has accumulated in all games...",
        query: "SELECT players.name AS player, teams.name AS team, \
                SUM(games.home_team_score) + SUM(games.away_team_score) AS total_points \
                FROM players \
                INNER JOIN teams ON players.team_id = teams.team_id \
                LEFT JOIN games ON teams.team_id = games.home_team_id \
                OR teams.team_id = games.away_team_id \
                GROUP BY players.player_id \
                ORDER BY total_points DESC \
                LIMIT 10",
        width: ColumnWidth::new(30),
    },
];
