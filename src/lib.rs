//! banks_etl library: extract, convert and load the largest banks table.
//!
//! The pipeline reads the "By market capitalization" table of an archived
//! Wikipedia page, converts each bank's USD market cap into GBP, EUR and INR
//! using an exchange-rate CSV, writes the result to a CSV file and a SQLite
//! table, and runs a handful of queries against that table.
//!
//! # Example
//!
//! ```no_run
//! use banks_etl::{run_pipeline, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     exchange_rate_source: "exchange_rate.csv".to_string(),
//!     ..Default::default()
//! };
//!
//! let report = run_pipeline(config).await?;
//! println!("Loaded {} banks into {}", report.records.len(), report.table_name);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Every stage is awaited in sequence;
//! nothing is spawned, so a current-thread runtime is sufficient.

#![warn(missing_docs)]

mod app;
pub mod config;
pub mod error_handling;
pub mod export;
pub mod extract;
pub mod fetch;
pub mod initialization;
pub mod models;
pub mod parse;
pub mod progress;
pub mod storage;
pub mod transform;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use extract::extract;
pub use models::{BankRecord, Currency, EnrichedBankRecord, ExchangeRates};
pub use progress::ProgressLog;
pub use run::{run_pipeline, RunReport};
pub use storage::{load_to_db, run_query, QueryOutput, QueryValue, Store};
pub use transform::{load_exchange_rates, transform};

// Internal run module (contains the pipeline driver)
mod run {
    use std::path::PathBuf;
    use std::time::Instant;

    use anyhow::{Context, Result};
    use log::{info, warn};

    use crate::app::{bank_table, enriched_table};
    use crate::config::Config;
    use crate::export::save_to_csv;
    use crate::extract::extract;
    use crate::initialization::init_client;
    use crate::models::EnrichedBankRecord;
    use crate::progress::ProgressLog;
    use crate::storage::{load_to_db, run_query, QueryOutput, Store};
    use crate::transform::{load_exchange_rates, transform};

    /// Results of a pipeline run.
    #[derive(Debug, Clone)]
    pub struct RunReport {
        /// Final record set, in source-table order
        pub records: Vec<EnrichedBankRecord>,
        /// CSV file that was written
        pub csv_path: PathBuf,
        /// SQLite database that was loaded
        pub db_path: PathBuf,
        /// Table that was replaced
        pub table_name: String,
        /// Each executed query with its result, in execution order
        pub query_results: Vec<(String, QueryOutput)>,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Runs the whole pipeline once.
    ///
    /// Stages run strictly in order: extract, transform, CSV load, database
    /// load, queries. Every milestone is appended to the progress log, and the
    /// intermediate tables, query results and final log contents are printed
    /// to stdout.
    ///
    /// The database connection is closed exactly once, including when the
    /// load or a query fails; the original error is returned in that case.
    ///
    /// # Errors
    ///
    /// Returns the first stage failure, with context naming the stage. Nothing
    /// is retried.
    pub async fn run_pipeline(config: Config) -> Result<RunReport> {
        let start_time = Instant::now();
        let progress = ProgressLog::new(&config.log_file);
        let client = init_client(&config).context("Failed to initialize HTTP client")?;

        progress.log("Preliminaries complete. Initiating ETL process");

        let extracted = extract(&client, &config.source_url, config.columns.as_slice())
            .await
            .with_context(|| format!("Extract stage failed for {}", config.source_url))?;
        println!("{}", bank_table(&extracted));

        progress.log("Data extraction complete. Initiating Transformation process");

        let rates = load_exchange_rates(&client, &config.exchange_rate_source)
            .await
            .context("Transform stage failed: could not load exchange rates")?;
        let records = transform(extracted, &rates).context("Transform stage failed")?;
        println!("{}", enriched_table(&records));

        progress.log("Data transformation complete. Initiating Loading process");

        save_to_csv(&records, &config.csv_path).context("CSV load stage failed")?;

        progress.log("Data saved to CSV file");

        let mut store = Store::open(&config.db_path)
            .await
            .context("Database load stage failed: could not open connection")?;

        progress.log("SQL Connection initiated");

        let query_results = match load_and_query(&mut store, &config, &records, &progress).await
        {
            Ok(results) => results,
            Err(e) => {
                if let Err(close_err) = store.close().await {
                    warn!("Failed to close database after error: {}", close_err);
                }
                return Err(e);
            }
        };

        progress.log("Process Complete");

        store
            .close()
            .await
            .context("Failed to close database connection")?;

        progress.log("Server Connection closed");

        let log_contents = progress
            .read_contents()
            .with_context(|| format!("Failed to read {}", progress.path().display()))?;
        print!("{}", log_contents);

        let elapsed_seconds = start_time.elapsed().as_secs_f64();
        info!(
            "Pipeline finished: {} banks in {:.2}s",
            records.len(),
            elapsed_seconds
        );

        Ok(RunReport {
            records,
            csv_path: config.csv_path,
            db_path: config.db_path,
            table_name: config.table_name,
            query_results,
            elapsed_seconds,
        })
    }

    async fn load_and_query(
        store: &mut Store,
        config: &Config,
        records: &[EnrichedBankRecord],
        progress: &ProgressLog,
    ) -> Result<Vec<(String, QueryOutput)>> {
        load_to_db(store, &config.table_name, records)
            .await
            .with_context(|| {
                format!(
                    "Database load stage failed for table {}",
                    config.table_name
                )
            })?;

        progress.log("Data loaded to Database as a table, Executing queries");

        let queries = config.resolved_queries();
        let mut results = Vec::with_capacity(queries.len());
        for query in queries {
            println!("{}", query);
            let output = run_query(store, &query)
                .await
                .with_context(|| format!("Query stage failed: {}", query))?;
            println!("{}", output);
            results.push((query, output));
        }
        Ok(results)
    }
}
