//! Error type definitions.
//!
//! One error enum per pipeline concern. The driver wraps these with
//! `anyhow::Context` to name the stage that failed.

use std::num::ParseFloatError;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

use crate::models::Currency;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Failure to retrieve a document over HTTP.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The configured URL could not be parsed.
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        /// URL as configured
        url: String,
        /// Parser failure
        #[source]
        source: url::ParseError,
    },

    /// Only http and https are fetched.
    #[error("Unsupported URL scheme '{scheme}' in {url}")]
    UnsupportedScheme {
        /// URL as configured
        url: String,
        /// Scheme that was rejected
        scheme: String,
    },

    /// Connection, TLS, timeout or body-decoding failure.
    #[error("Request to {url} failed: {source}")]
    Request {
        /// URL that was requested
        url: String,
        /// Underlying client error
        #[source]
        source: ReqwestError,
    },

    /// The server answered with a non-success status.
    #[error("Request to {url} returned HTTP {status}")]
    Status {
        /// URL that was requested
        url: String,
        /// Status the server returned
        status: reqwest::StatusCode,
    },
}

/// The source page does not have the expected table structure.
///
/// Row numbers are 1-based positions within the first table body, counting
/// every `<tr>` (including skipped header rows) so they can be matched against
/// the page source.
#[derive(Error, Debug)]
pub enum ParseError {
    /// The document has no `<tbody>`.
    #[error("No <tbody> element found in document")]
    MissingTableBody,

    /// A data row is too short.
    #[error("Row {row}: expected at least {expected} data cells, found {found}")]
    MissingCell {
        /// Row number
        row: usize,
        /// Cells required
        expected: usize,
        /// Cells present
        found: usize,
    },

    /// The name cell lacks the titled bank link.
    #[error("Row {row}: second cell has no second link with a title attribute")]
    MissingBankName {
        /// Row number
        row: usize,
    },

    /// The market cap cell does not open with text.
    #[error("Row {row}: third cell does not start with a text node")]
    MissingMarketCap {
        /// Row number
        row: usize,
    },

    /// The market cap text is not a number.
    #[error("Row {row}: market cap '{raw}' is not a number: {source}")]
    InvalidMarketCap {
        /// Row number
        row: usize,
        /// Cell text before the suffix was stripped
        raw: String,
        /// Float parse failure
        #[source]
        source: ParseFloatError,
    },
}

/// Error types for the extraction stage.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The page could not be retrieved.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The page could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The caller asked for a column layout the extractor does not produce.
    #[error("Expected columns {expected:?} do not match extracted columns {actual:?}")]
    ColumnMismatch {
        /// Columns the caller asked for
        expected: Vec<String>,
        /// Columns the extractor produces
        actual: Vec<String>,
    },
}

/// The exchange-rate table lacks one of the target currencies.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Exchange rate table has no rate for {currency}")]
pub struct MissingRateError {
    /// Currency with no rate
    pub currency: Currency,
}

/// Error types for loading the exchange-rate table.
#[derive(Error, Debug)]
pub enum ExchangeRateError {
    /// The local rate file could not be read.
    #[error("Failed to read exchange rates from {path}: {source}")]
    Io {
        /// File path
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The remote rate file could not be fetched.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The file is not valid CSV.
    #[error("Malformed exchange rate CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A required header is absent.
    #[error("Exchange rate CSV has no '{0}' column")]
    MissingColumn(&'static str),

    /// A rate is not a number.
    #[error("Invalid rate '{raw}' for currency {currency}")]
    InvalidRate {
        /// Currency code of the row
        currency: String,
        /// Rate text
        raw: String,
    },
}

/// Error types for the CSV loader.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The output file could not be opened.
    #[error("Failed to write {path}: {source}")]
    Io {
        /// File path
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Writing or reading a record failed.
    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),
}

/// Error types for database operations.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// SQL execution error.
    #[error("SQL error: {0}")]
    SqlError(#[from] sqlx::Error),

    /// Table names are interpolated into DDL and must be non-empty.
    #[error("Invalid table name '{0}'")]
    InvalidTableName(String),
}
