//! Append-only progress log.
//!
//! Every pipeline milestone is appended to a plain text file as
//! `<timestamp> : <message>`. The file is never truncated; successive runs
//! accumulate in it.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::Local;
use log::{info, warn};

use crate::config::PROGRESS_TIMESTAMP_FORMAT;

/// Writer for the run's progress log file.
#[derive(Debug, Clone)]
pub struct ProgressLog {
    path: PathBuf,
}

impl ProgressLog {
    /// A log writing to `path`. Nothing is touched until the first message.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The log file's path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one timestamped line, creating the file if needed.
    ///
    /// A failed write does not abort the run; it is reported as a warning
    /// through the diagnostic logger instead.
    pub fn log(&self, message: &str) {
        info!("{}", message);
        if let Err(e) = self.append(message) {
            warn!(
                "Failed to append to progress log {}: {}",
                self.path.display(),
                e
            );
        }
    }

    fn append(&self, message: &str) -> io::Result<()> {
        let timestamp = Local::now().format(PROGRESS_TIMESTAMP_FORMAT);
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{} : {}", timestamp, message)
    }

    /// Returns the full contents of the log file.
    pub fn read_contents(&self) -> io::Result<String> {
        std::fs::read_to_string(&self.path)
    }
}
