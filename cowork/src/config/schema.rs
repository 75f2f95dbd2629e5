//! Configuration schema definitions.
//!
//! Every field is optional so that partial files can be layered. The
//! accessors on [`Config`] fill in the built-in defaults.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::export::{
    ExportSettings, DEFAULT_JSON_FILE, DEFAULT_SPREADSHEET_FILE, DEFAULT_TABLE_FILE,
};
use crate::reservation::ValidationError;
use crate::schedule::policy::{
    BookingPolicy, DEFAULT_CLOSED_WEEKDAY, DEFAULT_MIN_ADVANCE_DAYS, DEFAULT_MIN_CANCEL_DAYS,
};

/// Default number of consecutive empty answers before a prompt gives up.
pub const DEFAULT_MAX_EMPTY_INPUTS: u32 = 3;

/// Default maximum wait for the database lock, in seconds.
pub const DEFAULT_LOCK_WAIT_SECONDS: u64 = 5;

/// Complete configuration structure.
///
/// # Examples
///
/// ```
/// use cowork::config::Config;
///
/// let config: Config = serde_yaml::from_str("booking:\n  min_advance_days: 5\n").unwrap();
/// assert_eq!(config.booking_policy().min_advance_days(), 5);
/// assert_eq!(config.booking_policy().min_cancel_days(), 2);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Booking rules.
    pub booking: Option<BookingConfig>,

    /// Interactive prompt behavior.
    pub prompts: Option<PromptConfig>,

    /// Export locations.
    pub export: Option<ExportConfig>,

    /// Maximum time to wait for database lock acquisition (seconds).
    pub maximum_lock_wait_seconds: Option<u64>,

    /// Refuse to create the database implicitly.
    pub disable_autoinit: Option<bool>,
}

/// Booking rules.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct BookingConfig {
    /// Days of notice for a new reservation.
    pub min_advance_days: Option<i64>,

    /// Days that must remain to cancel.
    pub min_cancel_days: Option<i64>,

    /// The weekday with no bookings.
    pub closed_weekday: Option<ClosedWeekday>,
}

/// Interactive prompt behavior.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PromptConfig {
    /// Consecutive empty answers before a prompt gives up.
    pub max_empty_inputs: Option<u32>,
}

/// Export locations.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ExportConfig {
    /// Directory that receives export files.
    pub directory: Option<PathBuf>,

    /// File name of the table export.
    pub table_file: Option<String>,

    /// File name of the spreadsheet export.
    pub spreadsheet_file: Option<String>,

    /// File name of the JSON export.
    pub json_file: Option<String>,
}

/// A closed weekday setting: a day name, or `none` for no closed day.
///
/// # Examples
///
/// ```
/// use chrono::Weekday;
/// use cowork::config::ClosedWeekday;
///
/// assert_eq!("Sunday".parse::<ClosedWeekday>().unwrap().weekday(), Some(Weekday::Sun));
/// assert_eq!("none".parse::<ClosedWeekday>().unwrap().weekday(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClosedWeekday(Option<Weekday>);

impl ClosedWeekday {
    /// Wraps a weekday setting.
    #[must_use]
    pub const fn new(weekday: Option<Weekday>) -> Self {
        Self(weekday)
    }

    /// The closed weekday, if any.
    #[must_use]
    pub const fn weekday(self) -> Option<Weekday> {
        self.0
    }
}

impl std::str::FromStr for ClosedWeekday {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        if value.eq_ignore_ascii_case("none") {
            return Ok(Self(None));
        }
        value.parse::<Weekday>().map(|day| Self(Some(day))).map_err(|_| ValidationError {
            field: "closed_weekday".into(),
            message: format!("'{value}' is not a weekday name or 'none'"),
        })
    }
}

impl TryFrom<String> for ClosedWeekday {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClosedWeekday> for String {
    fn from(value: ClosedWeekday) -> Self {
        value.to_string()
    }
}

impl fmt::Display for ClosedWeekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(day) => write!(f, "{}", weekday_name(day)),
            None => f.write_str("none"),
        }
    }
}

const fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

impl Config {
    /// A configuration with every field set to its built-in default.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            booking: Some(BookingConfig {
                min_advance_days: Some(DEFAULT_MIN_ADVANCE_DAYS),
                min_cancel_days: Some(DEFAULT_MIN_CANCEL_DAYS),
                closed_weekday: Some(ClosedWeekday(Some(DEFAULT_CLOSED_WEEKDAY))),
            }),
            prompts: Some(PromptConfig {
                max_empty_inputs: Some(DEFAULT_MAX_EMPTY_INPUTS),
            }),
            export: Some(ExportConfig {
                directory: Some(PathBuf::from(".")),
                table_file: Some(DEFAULT_TABLE_FILE.to_string()),
                spreadsheet_file: Some(DEFAULT_SPREADSHEET_FILE.to_string()),
                json_file: Some(DEFAULT_JSON_FILE.to_string()),
            }),
            maximum_lock_wait_seconds: Some(DEFAULT_LOCK_WAIT_SECONDS),
            disable_autoinit: Some(false),
        }
    }

    /// The booking rules this configuration describes.
    #[must_use]
    pub fn booking_policy(&self) -> BookingPolicy {
        let booking = self.booking.clone().unwrap_or_default();
        BookingPolicy::new(
            booking.min_advance_days.unwrap_or(DEFAULT_MIN_ADVANCE_DAYS),
            booking.min_cancel_days.unwrap_or(DEFAULT_MIN_CANCEL_DAYS),
            booking
                .closed_weekday
                .map_or(Some(DEFAULT_CLOSED_WEEKDAY), ClosedWeekday::weekday),
        )
    }

    /// Where exports go.
    #[must_use]
    pub fn export_settings(&self) -> ExportSettings {
        let export = self.export.clone().unwrap_or_default();
        let defaults = ExportSettings::default();
        ExportSettings {
            directory: export.directory.unwrap_or(defaults.directory),
            table_file: export.table_file.unwrap_or(defaults.table_file),
            spreadsheet_file: export.spreadsheet_file.unwrap_or(defaults.spreadsheet_file),
            json_file: export.json_file.unwrap_or(defaults.json_file),
        }
    }

    /// Consecutive empty answers before a prompt gives up.
    #[must_use]
    pub fn max_empty_inputs(&self) -> u32 {
        self.prompts
            .as_ref()
            .and_then(|p| p.max_empty_inputs)
            .unwrap_or(DEFAULT_MAX_EMPTY_INPUTS)
    }

    /// Maximum wait for the database lock.
    #[must_use]
    pub fn lock_wait(&self) -> Duration {
        Duration::from_secs(
            self.maximum_lock_wait_seconds
                .unwrap_or(DEFAULT_LOCK_WAIT_SECONDS),
        )
    }

    /// Whether the database may be created implicitly.
    #[must_use]
    pub fn autoinit_enabled(&self) -> bool {
        !self.disable_autoinit.unwrap_or(false)
    }
}
