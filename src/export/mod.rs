//! Export functionality for bank records.
//!
//! This module provides the flat-file loader of the pipeline: the enriched
//! record set written as CSV, and read back for verification.

mod csv;

pub use csv::{read_csv, save_to_csv};
