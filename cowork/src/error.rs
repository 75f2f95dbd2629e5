//! Error types for the cowork library.
//!
//! This module provides the error hierarchy for every operation in the
//! library, using `thiserror` for ergonomic error handling. Errors fall into
//! three families that callers treat differently: validation errors (bad
//! input, re-prompt the field), business-rule violations (the request is
//! well-formed but refused) and storage errors (the store failed).

use chrono::NaiveDate;
use thiserror::Error;

use crate::reservation::ReservationId;
use crate::schedule::Slot;

/// Result type alias for operations that may fail with a cowork error.
///
/// # Examples
///
/// ```
/// use cowork::{Error, Result};
///
/// fn example_operation() -> Result<u32> {
///     Ok(4)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the cowork library.
#[derive(Debug, Error)]
pub enum Error {
    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON document could not be written or read.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A tabular export could not be written or read.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The spreadsheet writer failed.
    #[error("spreadsheet error: {details}")]
    Spreadsheet {
        /// Details reported by the spreadsheet writer.
        details: String,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// The requested record was not found.
    #[error("not found: {resource}")]
    NotFound {
        /// The resource that was not found.
        resource: String,
    },

    /// A date range whose end precedes its start.
    #[error("invalid date range {start} to {end}: end date is before start date")]
    InvalidDateRange {
        /// First day of the range.
        start: NaiveDate,
        /// Last day of the range.
        end: NaiveDate,
    },

    /// The event date is too close to today.
    #[error("reservations need at least {required_days} days of notice: {date} is too close to {today}")]
    InsufficientNotice {
        /// The requested event date.
        date: NaiveDate,
        /// The operation's notion of today.
        today: NaiveDate,
        /// Minimum number of days between today and the event.
        required_days: i64,
    },

    /// The event date falls on the weekday with no bookings.
    #[error("no reservations on {}: {substitute} is proposed instead", date.format("%A %Y-%m-%d"))]
    ClosedWeekday {
        /// The requested event date.
        date: NaiveDate,
        /// The following day, offered as a substitute.
        substitute: NaiveDate,
    },

    /// Another active reservation already holds the slot.
    #[error("slot already reserved: {slot}")]
    SlotOccupied {
        /// The contested slot.
        slot: Slot,
    },

    /// The reservation is not part of the candidate set for the given range.
    #[error("reservation {id} is not in the selected date range")]
    NotInRange {
        /// The requested reservation.
        id: ReservationId,
    },

    /// The reservation has already been cancelled.
    #[error("reservation {id} is already cancelled")]
    AlreadyCancelled {
        /// The requested reservation.
        id: ReservationId,
    },

    /// The reservation is too close to its date to be cancelled.
    #[error("reservation {id} on {date} can only be cancelled at least {required_days} days in advance")]
    CancellationTooLate {
        /// The reservation being cancelled.
        id: ReservationId,
        /// Its event date.
        date: NaiveDate,
        /// Minimum number of days between today and the event.
        required_days: i64,
    },

    /// A destructive operation was requested without confirmation.
    #[error("operation requires explicit confirmation")]
    NotConfirmed,

    /// An export was requested for an empty result set.
    #[error("no reservations to export")]
    NothingToExport,

    /// Database corruption was detected.
    #[error("database corruption detected: {details}")]
    DatabaseCorruption {
        /// Details about the corruption.
        details: String,
    },

    /// An unsupported schema version was encountered.
    #[error("unsupported schema version: expected {expected}, found {found}")]
    UnsupportedSchemaVersion {
        /// The expected schema version.
        expected: i32,
        /// The schema version found in the database.
        found: i32,
    },
}

impl From<crate::reservation::ValidationError> for Error {
    fn from(err: crate::reservation::ValidationError) -> Self {
        Self::Validation {
            field: err.field,
            message: err.message,
        }
    }
}

impl From<crate::schedule::InvalidDateError> for Error {
    fn from(err: crate::schedule::InvalidDateError) -> Self {
        Self::Validation {
            field: "date".into(),
            message: err.to_string(),
        }
    }
}

impl From<crate::schedule::InvalidShiftError> for Error {
    fn from(err: crate::schedule::InvalidShiftError) -> Self {
        Self::Validation {
            field: "shift".into(),
            message: err.to_string(),
        }
    }
}

impl From<crate::schedule::InvalidDateRangeError> for Error {
    fn from(err: crate::schedule::InvalidDateRangeError) -> Self {
        Self::InvalidDateRange {
            start: err.start,
            end: err.end,
        }
    }
}

impl From<rust_xlsxwriter::XlsxError> for Error {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        Self::Spreadsheet {
            details: err.to_string(),
        }
    }
}

impl Error {
    /// Check if the error is caused by malformed or unknown input.
    ///
    /// # Examples
    ///
    /// ```
    /// use cowork::Error;
    ///
    /// let err = Error::NotFound { resource: "client 7".into() };
    /// assert!(err.is_validation());
    /// ```
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Validation { .. } | Self::NotFound { .. } | Self::InvalidDateRange { .. }
        )
    }

    /// Check if the error is a business-rule refusal of a well-formed request.
    ///
    /// # Examples
    ///
    /// ```
    /// use cowork::Error;
    ///
    /// assert!(Error::NotConfirmed.is_business_rule());
    /// ```
    #[must_use]
    pub fn is_business_rule(&self) -> bool {
        matches!(
            self,
            Self::InsufficientNotice { .. }
                | Self::ClosedWeekday { .. }
                | Self::SlotOccupied { .. }
                | Self::NotInRange { .. }
                | Self::AlreadyCancelled { .. }
                | Self::CancellationTooLate { .. }
                | Self::NotConfirmed
                | Self::NothingToExport
        )
    }

    /// Check if the error originates in the storage layer.
    #[must_use]
    pub fn is_storage(&self) -> bool {
        matches!(
            self,
            Self::Database(_)
                | Self::DatabaseCorruption { .. }
                | Self::UnsupportedSchemaVersion { .. }
        )
    }

    /// Check if the database stayed locked past the busy timeout.
    #[must_use]
    pub fn is_lock_timeout(&self) -> bool {
        matches!(
            self,
            Self::Database(rusqlite::Error::SqliteFailure(e, _))
                if e.code == rusqlite::ErrorCode::DatabaseBusy
        )
    }

    /// Check if a database error is a violation of a uniqueness constraint.
    pub(crate) fn is_unique_violation(err: &rusqlite::Error) -> bool {
        matches!(
            err,
            rusqlite::Error::SqliteFailure(e, _)
                if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::RoomId;
    use crate::schedule::Shift;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_validation_error() {
        let err = Error::Validation {
            field: "first_name".to_string(),
            message: "only letters and spaces are allowed".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("validation error"));
        assert!(display.contains("first_name"));
        assert!(display.contains("letters"));
        assert!(err.is_validation());
        assert!(!err.is_business_rule());
    }

    #[test]
    fn test_insufficient_notice_error() {
        let err = Error::InsufficientNotice {
            date: date(2026, 3, 11),
            today: date(2026, 3, 10),
            required_days: 2,
        };
        let display = format!("{err}");
        assert!(display.contains("at least 2 days"));
        assert!(display.contains("2026-03-11"));
        assert!(err.is_business_rule());
    }

    #[test]
    fn test_closed_weekday_error_names_day_and_substitute() {
        let err = Error::ClosedWeekday {
            date: date(2026, 3, 15),
            substitute: date(2026, 3, 16),
        };
        let display = format!("{err}");
        assert!(display.contains("Sunday"));
        assert!(display.contains("2026-03-16"));
    }

    #[test]
    fn test_slot_occupied_error() {
        let err = Error::SlotOccupied {
            slot: Slot::new(RoomId::new(3), date(2026, 3, 12), Shift::Night),
        };
        let display = format!("{err}");
        assert!(display.contains("already reserved"));
        assert!(display.contains("room 3"));
        assert!(display.contains("Night"));
    }

    #[test]
    fn test_cancellation_too_late_error() {
        let err = Error::CancellationTooLate {
            id: ReservationId::new(9),
            date: date(2026, 3, 12),
            required_days: 2,
        };
        let display = format!("{err}");
        assert!(display.contains("reservation 9"));
        assert!(display.contains("2 days in advance"));
        assert!(err.is_business_rule());
    }

    #[test]
    fn test_unsupported_schema_version_error() {
        let err = Error::UnsupportedSchemaVersion {
            expected: 1,
            found: 2,
        };
        let display = format!("{err}");
        assert!(display.contains("expected 1"));
        assert!(display.contains("found 2"));
        assert!(err.is_storage());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(format!("{err}").contains("I/O error"));
        assert!(!err.is_storage());
    }

    #[test]
    fn test_invalid_range_conversion() {
        let err: Error = crate::schedule::DateRange::new(date(2026, 3, 5), date(2026, 3, 1))
            .unwrap_err()
            .into();
        assert!(matches!(err, Error::InvalidDateRange { .. }));
        assert!(err.is_validation());
    }
}
