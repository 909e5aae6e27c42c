//! Error handling.
//!
//! Errors are grouped by the pipeline concern that raises them:
//! - **Fetch / Parse / Extract**: retrieving and reading the source page
//! - **MissingRate / ExchangeRate**: building the currency conversion table
//! - **Export**: writing the CSV file
//! - **Database**: every SQLite operation
//!
//! Nothing is retried or suppressed; every error aborts the run.

mod types;

// Re-export public API
pub use types::{
    DatabaseError, ExchangeRateError, ExportError, ExtractError, FetchError,
    InitializationError, MissingRateError, ParseError,
};
