//! Configuration validation.

use std::path::Path;

use crate::config::schema::{BookingConfig, Config, ExportConfig};
use crate::error::{Error, Result};

/// Largest accepted notice period, in days.
pub const MAX_NOTICE_DAYS: i64 = 365;

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use cowork::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::with_defaults()).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the first invalid field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref booking) = config.booking {
            Self::validate_booking(booking)?;
        }

        if let Some(max) = config.prompts.as_ref().and_then(|p| p.max_empty_inputs) {
            if max == 0 {
                return Err(Error::Validation {
                    field: "prompts.max_empty_inputs".into(),
                    message: "must be at least 1".into(),
                });
            }
        }

        if let Some(ref export) = config.export {
            Self::validate_export(export)?;
        }

        if let Some(timeout) = config.maximum_lock_wait_seconds {
            if timeout == 0 {
                return Err(Error::Validation {
                    field: "maximum_lock_wait_seconds".into(),
                    message: "timeout must be greater than 0".into(),
                });
            }
        }

        Ok(())
    }

    fn validate_booking(booking: &BookingConfig) -> Result<()> {
        for (field, days) in [
            ("booking.min_advance_days", booking.min_advance_days),
            ("booking.min_cancel_days", booking.min_cancel_days),
        ] {
            if let Some(days) = days {
                if !(0..=MAX_NOTICE_DAYS).contains(&days) {
                    return Err(Error::Validation {
                        field: field.into(),
                        message: format!("{days} is outside 0..={MAX_NOTICE_DAYS}"),
                    });
                }
            }
        }
        Ok(())
    }

    fn validate_export(export: &ExportConfig) -> Result<()> {
        for (field, name) in [
            ("export.table_file", &export.table_file),
            ("export.spreadsheet_file", &export.spreadsheet_file),
            ("export.json_file", &export.json_file),
        ] {
            if let Some(name) = name {
                Self::validate_file_name(field, name)?;
            }
        }

        if let Some(ref dir) = export.directory {
            if dir.as_os_str().is_empty() {
                return Err(Error::Validation {
                    field: "export.directory".into(),
                    message: "cannot be empty".into(),
                });
            }
        }

        Ok(())
    }

    /// File names must be a single non-empty path component.
    fn validate_file_name(field: &str, name: &str) -> Result<()> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(Error::Validation {
                field: field.into(),
                message: "cannot be empty or only whitespace".into(),
            });
        }

        let is_plain = Path::new(trimmed)
            .file_name()
            .is_some_and(|f| f == trimmed);
        if !is_plain {
            return Err(Error::Validation {
                field: field.into(),
                message: format!("'{trimmed}' must be a file name, not a path"),
            });
        }

        Ok(())
    }
}
