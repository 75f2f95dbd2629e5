//! Database configuration and location.
//!
//! The store lives in a single SQLite file, `coworking.db`, inside the data
//! directory. The data directory comes from an explicit argument, then the
//! `COWORK_DATA_DIR` environment variable, then `~/.cowork`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Error, Result};

/// File name of the store inside the data directory.
pub const DATABASE_FILE_NAME: &str = "coworking.db";

/// Environment variable naming the data directory.
pub const DATA_DIR_ENV: &str = "COWORK_DATA_DIR";

/// Default busy timeout applied to new connections.
pub const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_millis(5000);

/// Connection parameters for the store.
///
/// # Examples
///
/// ```
/// use cowork::database::DatabaseConfig;
/// use std::time::Duration;
///
/// let config = DatabaseConfig::new("/tmp/coworking.db")
///     .with_busy_timeout(Duration::from_secs(10));
/// assert_eq!(config.busy_timeout, Duration::from_secs(10));
/// assert!(config.auto_create);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// Path to the database file.
    pub path: PathBuf,
    /// How long to wait on a locked database.
    pub busy_timeout: Duration,
    /// Create the file and schema when missing.
    pub auto_create: bool,
    /// Open without write access.
    pub read_only: bool,
}

impl DatabaseConfig {
    /// Creates a configuration with a 5 second busy timeout, auto-creation
    /// enabled and write access.
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            busy_timeout: DEFAULT_BUSY_TIMEOUT,
            auto_create: true,
            read_only: false,
        }
    }

    /// Configuration for `coworking.db` inside `data_dir`.
    #[must_use]
    pub fn in_data_dir(data_dir: impl AsRef<Path>) -> Self {
        Self::new(data_dir.as_ref().join(DATABASE_FILE_NAME))
    }

    /// Sets the busy timeout.
    #[must_use]
    pub fn with_busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }

    /// Enables or disables creating a missing database.
    #[must_use]
    pub fn with_auto_create(mut self, auto_create: bool) -> Self {
        self.auto_create = auto_create;
        self
    }

    /// Opens the database read-only. Disables auto-creation.
    #[must_use]
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self.auto_create = false;
        self
    }
}

/// Returns `~/.cowork`.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn default_data_dir() -> Result<PathBuf> {
    home::home_dir()
        .map(|home| home.join(".cowork"))
        .ok_or_else(|| Error::Validation {
            field: "home_directory".into(),
            message: "cannot determine home directory".into(),
        })
}

/// Resolves the data directory.
///
/// The resolution order is:
/// 1. `explicit`, when given
/// 2. `$COWORK_DATA_DIR`, when set and non-empty
/// 3. `~/.cowork`
///
/// # Errors
///
/// Returns an error if the fallback home directory cannot be determined.
pub fn resolve_data_dir(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir.to_path_buf());
    }
    match std::env::var(DATA_DIR_ENV) {
        Ok(dir) if !dir.trim().is_empty() => Ok(PathBuf::from(dir)),
        _ => default_data_dir(),
    }
}

/// Resolves the path of `coworking.db` using [`resolve_data_dir`].
///
/// # Errors
///
/// Returns an error if the data directory cannot be determined.
///
/// # Examples
///
/// ```
/// use cowork::database::resolve_database_path;
/// use std::path::Path;
///
/// let path = resolve_database_path(Some(Path::new("/srv/cowork"))).unwrap();
/// assert_eq!(path, Path::new("/srv/cowork/coworking.db"));
/// ```
pub fn resolve_database_path(explicit_data_dir: Option<&Path>) -> Result<PathBuf> {
    Ok(resolve_data_dir(explicit_data_dir)?.join(DATABASE_FILE_NAME))
}
