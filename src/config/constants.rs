//! Configuration constants.
//!
//! Defaults for every configurable value of the pipeline. They mirror the
//! values the pipeline was originally run with and are overridable through
//! the CLI or `BANKS_ETL_*` environment variables.

/// Archived Wikipedia page holding the "By market capitalization" table.
pub const SOURCE_URL: &str =
    "https://web.archive.org/web/20230908091635/https://en.wikipedia.org/wiki/List_of_largest_banks";

/// Columns the extraction stage produces, in order.
pub const TABLE_ATTRIBS: [&str; 2] = ["Name", "MC_USD_Billion"];

/// Exchange-rate CSV (columns `Currency`, `Rate`).
/// May be overridden with a local path.
pub const EXCHANGE_RATE_SOURCE: &str = "https://cf-courses-data.s3.us.cloud-object-storage.appdomain.cloud/IBMSkillsNetwork-PY0221EN-Coursera/labs/v2/exchange_rate.csv";

/// CSV file written by the CSV loader.
pub const CSV_OUTPUT_PATH: &str = "./Largest_banks_data.csv";
/// SQLite database file.
pub const DB_PATH: &str = "Banks.db";
/// Table replaced by the database loader.
pub const TABLE_NAME: &str = "Largest_banks";
/// Progress log file, appended to across runs.
pub const LOG_FILE: &str = "code_log.txt";

/// Placeholder substituted with the configured table name in query templates.
pub const TABLE_PLACEHOLDER: &str = "{table}";

/// Queries run against the loaded table once the load stage completes.
///
/// 1. Entire table contents
/// 2. Average market capitalization in billion GBP
/// 3. Names of the top 5 banks (relies on insertion order)
pub const DEFAULT_QUERIES: [&str; 3] = [
    "SELECT * FROM {table}",
    "SELECT AVG(MC_GBP_Billion) FROM {table}",
    "SELECT Name FROM {table} LIMIT 5",
];

/// Timestamp layout of progress log lines (Year-MonthAbbrev-Day-Hour:Minute:Second).
pub const PROGRESS_TIMESTAMP_FORMAT: &str = "%Y-%b-%d-%H:%M:%S";

/// HTTP request timeout in seconds for the page and exchange-rate fetches.
pub const HTTP_TIMEOUT_SECS: u64 = 30;

/// Default User-Agent string for HTTP requests.
///
/// The Wayback Machine throttles obviously scripted clients, so a browser
/// string is sent unless overridden with `--user-agent`.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

/// Maximum number of rows per multi-row INSERT statement.
/// Keeps each statement well under SQLite's bound-parameter limit.
pub const INSERT_CHUNK_ROWS: usize = 500;
