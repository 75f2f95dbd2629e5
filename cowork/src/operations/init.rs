//! Data directory initialization.
//!
//! Creates the data directory and the store, and can drop a commented
//! `config.yaml` next to it listing every tunable with its default.

use std::fs;
use std::path::{Path, PathBuf};

use crate::database::{DATABASE_FILE_NAME, Database, DatabaseConfig};
use crate::error::{Error, Result};

/// Options for initializing a data directory.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Data directory to initialize.
    pub data_dir: PathBuf,
    /// Replace an existing database file.
    pub overwrite: bool,
    /// Write a commented default configuration file.
    pub create_config: bool,
}

impl InitOptions {
    /// Creates options that neither overwrite nor write a config file.
    #[must_use]
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            overwrite: false,
            create_config: false,
        }
    }

    /// Sets whether to replace an existing database.
    #[must_use]
    pub const fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Sets whether to write a default configuration file.
    #[must_use]
    pub const fn with_create_config(mut self, create_config: bool) -> Self {
        self.create_config = create_config;
        self
    }
}

/// What [`init_database`] did.
#[derive(Debug)]
pub struct InitResult {
    /// The data directory was created.
    pub data_dir_created: bool,
    /// The database was created or recreated.
    pub database_created: bool,
    /// A configuration file was written.
    pub config_created: bool,
    /// Reservations held by the database that `overwrite` replaced.
    pub discarded_reservations: Option<u64>,
    /// The initialized data directory.
    pub data_dir: PathBuf,
}

const DEFAULT_CONFIG_TEMPLATE: &str = r"# cowork configuration
# Every key is optional; the values shown are the defaults.

# booking:
#   min_advance_days: 2      # days between today and the event date
#   min_cancel_days: 2       # days that must remain to cancel
#   closed_weekday: sunday   # or none

# prompts:
#   max_empty_inputs: 3      # empty answers before a prompt gives up

# export:
#   directory: .
#   table_file: Reservaciones.csv
#   spreadsheet_file: DatosReservaciones.xlsx
#   json_file: ReservacionesJSON.json

# maximum_lock_wait_seconds: 5
# disable_autoinit: false
";

/// Initializes a data directory and its database.
///
/// # Errors
///
/// Returns [`Error::Validation`] if the database exists and `overwrite`
/// is not set, [`Error::Io`] if the directory or files cannot be written,
/// or a storage error if the schema cannot be created.
///
/// # Examples
///
/// ```
/// use cowork::operations::{init_database, InitOptions};
///
/// let dir = tempfile::tempdir().unwrap();
/// let options = InitOptions::new(dir.path().join("cowork")).with_create_config(true);
///
/// let result = init_database(&options).unwrap();
/// assert!(result.data_dir_created);
/// assert!(result.config_created);
/// ```
pub fn init_database(options: &InitOptions) -> Result<InitResult> {
    let mut result = InitResult {
        data_dir_created: false,
        database_created: false,
        config_created: false,
        discarded_reservations: None,
        data_dir: options.data_dir.clone(),
    };

    if !options.data_dir.exists() {
        fs::create_dir_all(&options.data_dir)?;
        result.data_dir_created = true;
    }

    let db_path = options.data_dir.join(DATABASE_FILE_NAME);
    if db_path.exists() {
        if !options.overwrite {
            return Err(Error::Validation {
                field: "database".into(),
                message: format!(
                    "database already exists at {}; use --overwrite to replace it",
                    db_path.display()
                ),
            });
        }
        result.discarded_reservations = count_existing_reservations(&db_path);
        log::info!("removing existing database at {}", db_path.display());
        fs::remove_file(&db_path)?;
    }

    let db = Database::open(DatabaseConfig::new(&db_path))?;
    db.verify_integrity()?;
    result.database_created = true;

    if options.create_config {
        let config_path = options.data_dir.join("config.yaml");
        if config_path.exists() {
            log::debug!("keeping existing {}", config_path.display());
        } else {
            fs::write(&config_path, DEFAULT_CONFIG_TEMPLATE)?;
            result.config_created = true;
        }
    }

    Ok(result)
}

/// Counts reservations in a database about to be replaced.
///
/// An unreadable database yields `None`; it is replaced all the same.
fn count_existing_reservations(db_path: &Path) -> Option<u64> {
    let db = match Database::open(DatabaseConfig::new(db_path).with_auto_create(false)) {
        Ok(db) => db,
        Err(e) => {
            log::warn!("cannot read {} before replacing it: {e}", db_path.display());
            return None;
        }
    };
    match Database::count_reservations(db.connection()) {
        Ok(count) => Some(count),
        Err(e) => {
            log::warn!("cannot count reservations in {}: {e}", db_path.display());
            None
        }
    }
}
