//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `banks_etl` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All pipeline stages are implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use banks_etl::initialization::init_logger_with;
use banks_etl::{run_pipeline, Config};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Settings may come from a .env file in the working directory or next to the executable
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match run_pipeline(config).await {
        Ok(report) => {
            println!(
                "Loaded {} bank{} into table {} in {:.1}s",
                report.records.len(),
                if report.records.len() == 1 { "" } else { "s" },
                report.table_name,
                report.elapsed_seconds
            );
            println!(
                "Results saved in {} and {}",
                report.csv_path.display(),
                report.db_path.display()
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("banks_etl error: {:#}", e);
            process::exit(1);
        }
    }
}
