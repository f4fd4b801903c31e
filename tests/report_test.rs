//! Integration tests for query reports

use courtside::{
    reports::REPORTS,
    storage::{load_record_set, recreate_table, report, Database, RecordSet, SEPARATOR_UNIT, TABLES},
    ColumnWidth, CourtsideError,
};

fn create_loaded_db() -> Database {
    let mut db = Database::open_in_memory().unwrap();
    for table in TABLES {
        recreate_table(&db, table).unwrap();
    }

    let teams = RecordSet::parse(
        "team_id,name,location,nba_titles\n\
         1,Lakers,LA,17\n\
         2,Wizards,Washington,1\n\
         3,Celtics,Boston,17\n",
    )
    .unwrap();
    let players = RecordSet::parse(
        "player_id,name,position,team_id\n\
         1,Davis Bertans,PF,2\n\
         2,LeBron James,SF,1\n\
         3,Free Agent,G,99\n",
    )
    .unwrap();
    let games = RecordSet::parse(
        "game_id,date,home_team_id,away_team_id,home_team_score,away_team_score\n\
         1,2020-01-01,1,2,110,100\n\
         2,2020-01-03,2,3,98,120\n\
         3,2020-01-05,1,3,101,99\n",
    )
    .unwrap();

    load_record_set(&mut db, &teams, "teams").unwrap();
    load_record_set(&mut db, &players, "players").unwrap();
    load_record_set(&mut db, &games, "games").unwrap();
    db
}

#[test]
fn test_report_line_count_and_separator() {
    let db = create_loaded_db();
    let text = report(&db, "SELECT team_id, name, location FROM teams", ColumnWidth::new(12)).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 2 + 3);
    assert_eq!(lines[1].len(), 3 * SEPARATOR_UNIT.len());
}

#[test]
fn test_report_cells_padded_to_width() {
    let db = create_loaded_db();
    let text = report(
        &db,
        "SELECT name, location FROM teams WHERE team_id = 1",
        ColumnWidth::new(10),
    )
    .unwrap();

    assert_eq!(text.lines().next(), Some("name      location  "));
    assert_eq!(text.lines().nth(2), Some("Lakers    LA        "));
}

#[test]
fn test_report_long_values_not_truncated() {
    let db = create_loaded_db();
    let text = report(
        &db,
        "SELECT location, name FROM teams WHERE team_id = 2",
        ColumnWidth::new(4),
    )
    .unwrap();

    assert_eq!(text.lines().next(), Some("locationname"));
    assert_eq!(text.lines().nth(2), Some("WashingtonWizards"));
}

#[test]
fn test_title_threshold_filter() {
    let db = create_loaded_db();
    let query = |threshold: i64| {
        format!(
            "SELECT name FROM teams WHERE nba_titles > {} AND team_id = 1",
            threshold
        )
    };

    let included = report(&db, &query(16), ColumnWidth::new(8)).unwrap();
    assert_eq!(included.lines().count(), 3);

    let excluded = report(&db, &query(17), ColumnWidth::new(8)).unwrap();
    assert_eq!(excluded.lines().count(), 2);
}

#[test]
fn test_failed_query_returns_error() {
    let db = create_loaded_db();
    let result = report(&db, "SELECT nope FROM teams", ColumnWidth::default());
    assert!(matches!(result, Err(CourtsideError::Sqlite(_))));
}

#[test]
fn test_fixed_reports_run_against_loaded_data() {
    let db = create_loaded_db();

    for def in REPORTS {
        let text = report(&db, def.query, def.width).unwrap();
        assert!(text.lines().count() >= 2, "{} produced no header", def.title);
        assert!(!text.contains("Free Agent"), "{} joined a teamless player", def.title);
    }
}

#[test]
fn test_titles_report_rows() {
    let db = create_loaded_db();
    let text = report(&db, REPORTS[0].query, REPORTS[0].width).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert!(lines[0].starts_with("player_name"));
    assert_eq!(lines.len(), 3);
    assert!(lines[2].starts_with("LeBron James"));
    assert!(lines[2].trim_end().ends_with("17"));
}

#[test]
fn test_bertans_games_report_rows() {
    let db = create_loaded_db();
    let text = report(&db, REPORTS[1].query, REPORTS[1].width).unwrap();

    // Wizards played games 1 and 2
    assert_eq!(text.lines().count(), 4);
    assert!(text.contains("2020-01-01"));
    assert!(text.contains("2020-01-03"));
    assert!(!text.contains("2020-01-05"));
}
