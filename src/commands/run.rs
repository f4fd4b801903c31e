//! The full batch run: recreate tables, load CSV files, print reports.

use crate::{
    reports::{ReportDef, REPORTS},
    storage::{load_table, query_rows, recreate_table, render_json, render_table, Database, TABLES},
    Result,
};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use tracing::{error, info};

/// Input files and the table each one is loaded into, in load order
pub const DATA_FILES: &[(&str, &str)] = &[
    ("teams.csv", "teams"),
    ("players.csv", "players"),
    ("games.csv", "games"),
];

/// Everything a run needs to know
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub db_path: PathBuf,
    pub data_dir: PathBuf,
    pub json: bool,
}

/// Whether a single step of the run went through
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StepStatus {
    Succeeded,
    Failed { message: String },
}

/// One recorded step, e.g. `load teams.csv`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepOutcome {
    pub step: String,
    #[serde(flatten)]
    pub status: StepStatus,
}

/// Outcome of every step attempted during a run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub steps: Vec<StepOutcome>,
}

impl RunSummary {
    /// Record `result` under `step`, logging failures, and hand back the value
    fn record<T>(&mut self, step: String, result: Result<T>) -> Option<T> {
        match result {
            Ok(value) => {
                self.steps.push(StepOutcome {
                    step,
                    status: StepStatus::Succeeded,
                });
                Some(value)
            }
            Err(e) => {
                error!("{} failed: {}", step, e);
                self.steps.push(StepOutcome {
                    step,
                    status: StepStatus::Failed {
                        message: e.to_string(),
                    },
                });
                None
            }
        }
    }

    /// Steps that did not succeed
    pub fn failures(&self) -> Vec<&StepOutcome> {
        self.steps
            .iter()
            .filter(|s| matches!(s.status, StepStatus::Failed { .. }))
            .collect()
    }

    pub fn is_success(&self) -> bool {
        self.failures().is_empty()
    }

    /// Pretty JSON listing every step and its status
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Run every step with the fixed [`REPORTS`], printing to stdout.
///
/// Only a failure to open the database is returned as `Err`; every other
/// failure is logged, recorded in the summary, and the run moves on.
pub fn handle_run(config: &RunConfig) -> Result<RunSummary> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(config, REPORTS, &mut out)
}

/// Run every step, writing the output of `reports` to `out`.
///
/// With `config.json` set, the step summary is written as JSON after the
/// last report.
pub fn run(config: &RunConfig, reports: &[ReportDef], out: &mut impl Write) -> Result<RunSummary> {
    info!("Connecting to the database...");
    let mut db = Database::open(&config.db_path)?;

    let mut summary = RunSummary::default();
    run_steps(&mut db, config, reports, out, &mut summary);

    info!("Closing database connection...");
    summary.record("close database".to_string(), db.close());

    if !summary.is_success() {
        info!("{} of {} steps failed", summary.failures().len(), summary.steps.len());
    }

    if config.json {
        if let Err(e) = write_summary(&summary, out) {
            error!("writing run summary failed: {}", e);
        }
    }
    Ok(summary)
}

fn run_steps(
    db: &mut Database,
    config: &RunConfig,
    reports: &[ReportDef],
    out: &mut impl Write,
    summary: &mut RunSummary,
) {
    info!("Creating tables...");
    for table in TABLES {
        summary.record(format!("create {}", table.name), recreate_table(db, table));
    }

    info!("Transferring data from CSV into the tables...");
    for (file, table) in DATA_FILES {
        let path = config.data_dir.join(file);
        summary.record(format!("load {}", file), load_table(db, &path, table));
    }

    info!("Performing SELECT queries...");
    for def in reports {
        summary.record(
            format!("report \"{}\"", def.title),
            write_report(db, def, config.json, out),
        );
    }
}

/// Print one report's title and its rendered rows
fn write_report(db: &Database, def: &ReportDef, json: bool, out: &mut impl Write) -> Result<()> {
    writeln!(out, "\n{}\n", def.title)?;
    let result = query_rows(db, def.query)?;
    let text = if json {
        let mut text = render_json(&result)?;
        text.push('\n');
        text
    } else {
        render_table(&result, def.width)
    };
    out.write_all(text.as_bytes())?;
    Ok(())
}

fn write_summary(summary: &RunSummary, out: &mut impl Write) -> Result<()> {
    writeln!(out, "\n{}", summary.to_json()?)?;
    Ok(())
}
