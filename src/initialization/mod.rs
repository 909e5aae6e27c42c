//! Application initialization and resource setup.
//!
//! This module provides functions to initialize the shared resources of a run:
//! - Diagnostic logger
//! - HTTP client
//!
//! The SQLite connection is opened by the driver through [`crate::storage`].

mod client;
mod logger;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;
