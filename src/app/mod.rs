//! Main application modules.
//!
//! This module provides the stdout rendering used by the pipeline driver.

pub mod display;

// Re-export public API
pub use display::{bank_table, enriched_table};
