//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    CSV_OUTPUT_PATH, DB_PATH, DEFAULT_QUERIES, DEFAULT_USER_AGENT, EXCHANGE_RATE_SOURCE,
    HTTP_TIMEOUT_SECS, LOG_FILE, SOURCE_URL, TABLE_ATTRIBS, TABLE_NAME, TABLE_PLACEHOLDER,
};

/// Logging level for the application.
///
/// Controls the verbosity of diagnostic output, from most restrictive (Error) to most
/// verbose (Trace). The progress log file is written regardless of this level.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Pipeline configuration.
///
/// Parsed from the command line by the binary, or constructed programmatically
/// by library users. `Default` reproduces the original run.
///
/// # Examples
///
/// ```no_run
/// use banks_etl::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     exchange_rate_source: "exchange_rate.csv".to_string(),
///     db_path: PathBuf::from("/tmp/banks.db"),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "banks_etl",
    about = "Extract the largest banks table, convert market caps, and load them into CSV and SQLite"
)]
pub struct Config {
    /// Page containing the banks-by-market-capitalization table
    #[arg(long, env = "BANKS_ETL_SOURCE_URL", default_value = SOURCE_URL)]
    pub source_url: String,

    /// Columns expected from the extraction stage (repeat for each column)
    #[arg(
        long = "column",
        env = "BANKS_ETL_COLUMNS",
        value_delimiter = ',',
        default_values_t = TABLE_ATTRIBS.map(String::from)
    )]
    pub columns: Vec<String>,

    /// Exchange-rate CSV, as a local path or an http(s) URL
    #[arg(long = "exchange-rates", env = "BANKS_ETL_EXCHANGE_RATES", default_value = EXCHANGE_RATE_SOURCE)]
    pub exchange_rate_source: String,

    /// CSV output path (overwritten on every run)
    #[arg(long, env = "BANKS_ETL_CSV_PATH", default_value = CSV_OUTPUT_PATH)]
    pub csv_path: PathBuf,

    /// SQLite database file
    #[arg(long, env = "BANKS_ETL_DB_PATH", default_value = DB_PATH)]
    pub db_path: PathBuf,

    /// Table that is dropped and recreated on every run
    #[arg(long, env = "BANKS_ETL_TABLE_NAME", default_value = TABLE_NAME)]
    pub table_name: String,

    /// Append-only progress log file
    #[arg(long, env = "BANKS_ETL_LOG_FILE", default_value = LOG_FILE)]
    pub log_file: PathBuf,

    /// Query to run after loading; `{table}` is replaced by the table name (repeatable)
    #[arg(long = "query", default_values_t = DEFAULT_QUERIES.map(String::from))]
    pub queries: Vec<String>,

    /// Per-request timeout in seconds
    #[arg(long, env = "BANKS_ETL_TIMEOUT_SECONDS", default_value_t = HTTP_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, env = "BANKS_ETL_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Config {
    /// Returns the configured queries with the table placeholder substituted.
    pub fn resolved_queries(&self) -> Vec<String> {
        self.queries
            .iter()
            .map(|q| q.replace(TABLE_PLACEHOLDER, &self.table_name))
            .collect()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_url: SOURCE_URL.to_string(),
            columns: TABLE_ATTRIBS.map(String::from).to_vec(),
            exchange_rate_source: EXCHANGE_RATE_SOURCE.to_string(),
            csv_path: PathBuf::from(CSV_OUTPUT_PATH),
            db_path: PathBuf::from(DB_PATH),
            table_name: TABLE_NAME.to_string(),
            log_file: PathBuf::from(LOG_FILE),
            queries: DEFAULT_QUERIES.map(String::from).to_vec(),
            timeout_seconds: HTTP_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}
