//! Database operations.
//!
//! One SQLite connection per run, the table loader, and the query runner.

pub mod connection;
pub mod load;
pub mod query;
#[cfg(test)]
pub(crate) mod test_helpers;

// Re-export commonly used items
pub use connection::Store;
pub use load::load_to_db;
pub use query::{run_query, QueryOutput, QueryValue};
