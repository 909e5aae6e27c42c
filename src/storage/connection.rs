//! SQLite connection management.
//!
//! The pipeline holds exactly one connection for the whole run. It is owned by
//! the driver through [`Store`] and must be released with [`Store::close`].

use std::path::{Path, PathBuf};

use log::{error, info};
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{Connection, SqliteConnection};

use crate::error_handling::DatabaseError;

/// The run's single SQLite connection.
#[derive(Debug)]
pub struct Store {
    conn: SqliteConnection,
    location: PathBuf,
}

impl Store {
    /// Opens the database at `db_path`, creating the file if it doesn't exist.
    ///
    /// The path is handed to SQLite as a filename, never parsed as a
    /// connection URL, so `?`, `#` and `%` are ordinary characters in it.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::SqlError` if the file cannot be opened or created.
    pub async fn open(db_path: &Path) -> Result<Self, DatabaseError> {
        if db_path.exists() {
            info!("Database file {} already exists.", db_path.display());
        } else {
            info!("Creating database file {}.", db_path.display());
        }

        let options = SqliteConnectOptions::new()
            .filename(db_path)
            .create_if_missing(true);
        let conn = SqliteConnection::connect_with(&options)
            .await
            .map_err(|e| {
                error!("Failed to connect to database: {e}");
                DatabaseError::SqlError(e)
            })?;

        Ok(Self {
            conn,
            location: db_path.to_path_buf(),
        })
    }

    /// Opens a private in-memory database.
    pub async fn open_in_memory() -> Result<Self, DatabaseError> {
        let conn = SqliteConnection::connect("sqlite::memory:").await?;
        Ok(Self {
            conn,
            location: PathBuf::from(":memory:"),
        })
    }

    /// Path the store was opened from.
    pub fn location(&self) -> &Path {
        &self.location
    }

    /// The underlying connection, for the loader and query runner.
    pub(crate) fn connection(&mut self) -> &mut SqliteConnection {
        &mut self.conn
    }

    /// Closes the connection, flushing any pending work to disk.
    pub async fn close(self) -> Result<(), DatabaseError> {
        self.conn.close().await?;
        info!("Closed database {}", self.location.display());
        Ok(())
    }
}
