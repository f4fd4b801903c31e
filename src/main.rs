//! Entry point: parse CLI, set up logging and run the load-and-report batch.

use anyhow::{Context, Result};
use clap::Parser;
use courtside::{
    cli::Courtside,
    commands::{
        resolve_db_path,
        run::{handle_run, RunConfig},
    },
};
use std::process::ExitCode;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let args = Courtside::parse();

    setup_logging(args.verbose);

    let config = RunConfig {
        db_path: resolve_db_path(args.db_path),
        data_dir: args.data_dir,
        json: args.json,
    };

    let summary = handle_run(&config)
        .with_context(|| format!("Could not open database {}", config.db_path.display()))?;

    let failures = summary.failures();
    if failures.is_empty() {
        return Ok(ExitCode::SUCCESS);
    }

    for step in &failures {
        warn!("step failed: {}", step.step);
    }
    if args.strict {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn setup_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("courtside=debug,warn")
    } else {
        EnvFilter::new("courtside=info,warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stdout)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}
