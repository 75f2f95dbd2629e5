//! Utility functions for CLI operations.
//!
//! Configuration loading, store access and the argument parsers shared by
//! the subcommands.

use std::path::PathBuf;
use std::time::Duration;

use chrono::NaiveDate;
use cowork::database::{resolve_data_dir, DATABASE_FILE_NAME};
use cowork::schedule::parse_date;
use cowork::{
    Config, ConfigBuilder, Database, DatabaseConfig, DateRange, ExecutionResult, OperationPlan,
    PlanExecutor, Shift, Store,
};

use crate::error::CliError;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Override the busy timeout (in seconds).
    pub busy_timeout: Option<u64>,

    /// An additional configuration file.
    pub config: Option<PathBuf>,
}

/// Resolves the data directory from `--data-dir`, `COWORK_DATA_DIR` or the
/// home directory.
pub fn data_dir(global: &GlobalOptions) -> Result<PathBuf, CliError> {
    resolve_data_dir(global.data_dir.as_deref()).map_err(|e| CliError::Config(e.to_string()))
}

/// Load layered configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Environment variables (highest priority)
/// 2. The `--config` file
/// 3. `config.yaml` in the data directory
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new().with_data_dir(data_dir(global)?);
    if let Some(ref path) = global.config {
        builder = builder.with_config_file(path);
    }

    builder.build().map_err(|e| CliError::Config(e.to_string()))
}

/// Builds the store handle for this invocation.
///
/// # Errors
///
/// Returns `NoDataDirectory` if the database doesn't exist and auto-init is
/// disabled.
pub fn open_store(global: &GlobalOptions, config: &Config) -> Result<Store, CliError> {
    let db_path = data_dir(global)?.join(DATABASE_FILE_NAME);

    if !db_path.exists() && !config.autoinit_enabled() {
        return Err(CliError::NoDataDirectory);
    }

    let busy_timeout = global
        .busy_timeout
        .map_or_else(|| config.lock_wait(), Duration::from_secs);
    let db_config = DatabaseConfig::new(db_path)
        .with_busy_timeout(busy_timeout)
        .with_auto_create(config.autoinit_enabled());

    Ok(Store::new(db_config))
}

/// Plans and executes one operation on a single connection.
///
/// With `dry_run` the plan is reported but nothing is written.
pub fn run_plan<F>(store: &Store, dry_run: bool, build: F) -> Result<ExecutionResult, CliError>
where
    F: FnOnce(&Database) -> cowork::Result<OperationPlan>,
{
    let result = store.with_database(|db| {
        let plan = build(db)?;
        let executor = PlanExecutor::new(db.connection());
        if dry_run {
            executor.dry_run().execute(&plan)
        } else {
            executor.execute(&plan)
        }
    })?;
    Ok(result)
}

/// Clap value parser for `MM-DD-YYYY` dates.
pub fn parse_date_arg(s: &str) -> Result<NaiveDate, String> {
    parse_date(s).map_err(|e| e.to_string())
}

/// Clap value parser for shifts (number, English or Spanish name).
pub fn parse_shift_arg(s: &str) -> Result<Shift, String> {
    s.parse::<Shift>().map_err(|e| e.to_string())
}

/// Builds a date range from two command-line dates.
pub fn date_range(from: NaiveDate, to: NaiveDate) -> Result<DateRange, CliError> {
    DateRange::new(from, to).map_err(|e| CliError::InvalidArguments(e.to_string()))
}
