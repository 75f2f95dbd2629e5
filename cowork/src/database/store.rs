//! Scoped access to the store.
//!
//! A [`Store`] is the single handle the rest of the program holds. It never
//! keeps a connection open between operations: each unit of work opens one,
//! runs, and drops it on every exit path.

use std::path::Path;

use crate::error::Result;

use super::config::DatabaseConfig;
use super::connection::Database;

/// Handle to the store that opens a connection per unit of work.
///
/// # Examples
///
/// ```
/// use cowork::database::{Database, DatabaseConfig, Store};
///
/// let dir = tempfile::tempdir().unwrap();
/// let store = Store::new(DatabaseConfig::in_data_dir(dir.path()));
///
/// let shifts = store
///     .with_database(|db| Database::list_shifts(db.connection()))
///     .unwrap();
/// assert_eq!(shifts.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct Store {
    config: DatabaseConfig,
}

impl Store {
    /// Creates a handle; nothing is opened until the first unit of work.
    #[must_use]
    pub const fn new(config: DatabaseConfig) -> Self {
        Self { config }
    }

    /// Returns the connection configuration.
    #[must_use]
    pub const fn config(&self) -> &DatabaseConfig {
        &self.config
    }

    /// Returns the path of the database file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.config.path
    }

    /// Returns `true` if the database file exists.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.config.path.exists()
    }

    /// Opens a connection that the caller owns.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be opened.
    pub fn open(&self) -> Result<Database> {
        Database::open(self.config.clone())
    }

    /// Runs `work` against a fresh connection and closes it afterwards.
    ///
    /// The connection is dropped whether `work` succeeds or fails.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be opened, or whatever
    /// error `work` returns.
    pub fn with_database<T, F>(&self, work: F) -> Result<T>
    where
        F: FnOnce(&Database) -> Result<T>,
    {
        let db = self.open()?;
        let outcome = work(&db);
        drop(db);
        if let Err(e) = &outcome {
            log::debug!("unit of work on {} failed: {e}", self.config.path.display());
        }
        outcome
    }
}
