//! Environment variable handling for configuration overrides.
//!
//! `COWORK_*` variables override configuration file values.

use std::env;
use std::path::PathBuf;

use crate::config::schema::{ClosedWeekday, Config};
use crate::error::{Error, Result};

/// Days of notice for a new reservation.
pub const MIN_ADVANCE_DAYS_ENV: &str = "COWORK_MIN_ADVANCE_DAYS";
/// Days that must remain to cancel.
pub const MIN_CANCEL_DAYS_ENV: &str = "COWORK_MIN_CANCEL_DAYS";
/// Closed weekday name or `none`.
pub const CLOSED_WEEKDAY_ENV: &str = "COWORK_CLOSED_WEEKDAY";
/// Empty answers before a prompt gives up.
pub const MAX_EMPTY_INPUTS_ENV: &str = "COWORK_MAX_EMPTY_INPUTS";
/// Export directory.
pub const EXPORT_DIR_ENV: &str = "COWORK_EXPORT_DIR";
/// Maximum database lock wait in seconds.
pub const LOCK_WAIT_ENV: &str = "COWORK_MAXIMUM_LOCK_WAIT_SECONDS";
/// Refuse implicit database creation.
pub const DISABLE_AUTOINIT_ENV: &str = "COWORK_DISABLE_AUTOINIT";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use cowork::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Applies all `COWORK_*` overrides to `config`.
    ///
    /// Unset variables leave the configuration untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable holds a value that does not parse.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        Self::apply_booking_overrides(config)?;

        if let Ok(val) = env::var(MAX_EMPTY_INPUTS_ENV) {
            let prompts = config.prompts.get_or_insert_with(Default::default);
            prompts.max_empty_inputs = Some(Self::parse_number(MAX_EMPTY_INPUTS_ENV, &val)?);
        }

        if let Ok(dir) = env::var(EXPORT_DIR_ENV) {
            if !dir.trim().is_empty() {
                let export = config.export.get_or_insert_with(Default::default);
                export.directory = Some(PathBuf::from(dir));
            }
        }

        if let Ok(val) = env::var(LOCK_WAIT_ENV) {
            config.maximum_lock_wait_seconds = Some(Self::parse_number(LOCK_WAIT_ENV, &val)?);
        }

        if let Ok(val) = env::var(DISABLE_AUTOINIT_ENV) {
            config.disable_autoinit = Some(Self::parse_bool(DISABLE_AUTOINIT_ENV, &val)?);
        }

        Ok(())
    }

    fn apply_booking_overrides(config: &mut Config) -> Result<()> {
        let mut booking = config.booking.clone().unwrap_or_default();
        let mut modified = false;

        if let Ok(val) = env::var(MIN_ADVANCE_DAYS_ENV) {
            booking.min_advance_days = Some(Self::parse_number(MIN_ADVANCE_DAYS_ENV, &val)?);
            modified = true;
        }

        if let Ok(val) = env::var(MIN_CANCEL_DAYS_ENV) {
            booking.min_cancel_days = Some(Self::parse_number(MIN_CANCEL_DAYS_ENV, &val)?);
            modified = true;
        }

        if let Ok(val) = env::var(CLOSED_WEEKDAY_ENV) {
            let day = val.parse::<ClosedWeekday>().map_err(|e| Error::Validation {
                field: CLOSED_WEEKDAY_ENV.into(),
                message: e.message,
            })?;
            booking.closed_weekday = Some(day);
            modified = true;
        }

        if modified {
            config.booking = Some(booking);
        }

        Ok(())
    }

    fn parse_number<T: std::str::FromStr>(field: &str, s: &str) -> Result<T> {
        s.trim().parse().map_err(|_| Error::Validation {
            field: field.into(),
            message: format!("'{s}' is not a whole number"),
        })
    }

    /// Parses a boolean value.
    ///
    /// Accepts true/1/yes/on and false/0/no/off, case-insensitive.
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}
