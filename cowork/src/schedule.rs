//! Calendar types for reservation scheduling.
//!
//! A reservation occupies one [`Slot`]: a room on a calendar date during one
//! of the three [`Shift`]s of the day. Dates are entered as `MM-DD-YYYY` and
//! stored as ISO `YYYY-MM-DD`.

pub mod availability;
pub mod policy;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};

use crate::registry::RoomId;

/// Format used when reading dates from the operator and in exports.
pub const DATE_INPUT_FORMAT: &str = "%m-%d-%Y";

/// Parses a date written as `MM-DD-YYYY`.
///
/// Surrounding whitespace is ignored.
///
/// # Errors
///
/// Returns an error if the input is not a real calendar date in that format.
///
/// # Examples
///
/// ```
/// use cowork::schedule::parse_date;
///
/// let date = parse_date("03-14-2026").unwrap();
/// assert_eq!(date.to_string(), "2026-03-14");
///
/// assert!(parse_date("2026-03-14").is_err());
/// assert!(parse_date("02-30-2026").is_err());
/// ```
pub fn parse_date(input: &str) -> Result<NaiveDate, InvalidDateError> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, DATE_INPUT_FORMAT).map_err(|_| InvalidDateError {
        value: trimmed.to_string(),
    })
}

/// Formats a date the way the operator types it (`MM-DD-YYYY`).
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use cowork::schedule::format_date;
///
/// let date = NaiveDate::from_ymd_opt(2026, 3, 4).unwrap();
/// assert_eq!(format_date(date), "03-04-2026");
/// ```
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_INPUT_FORMAT).to_string()
}

/// Error returned for text that is not a `MM-DD-YYYY` date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidDateError {
    /// The rejected input.
    pub value: String,
}

impl fmt::Display for InvalidDateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not a valid date in MM-DD-YYYY format", self.value)
    }
}

impl std::error::Error for InvalidDateError {}

/// One of the three bookable periods of a day.
///
/// The discriminants are the identifiers seeded into the `Turnos` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Shift {
    /// The morning shift (id 1).
    Morning = 1,
    /// The afternoon shift (id 2).
    Afternoon = 2,
    /// The night shift (id 3).
    Night = 3,
}

impl Shift {
    /// All shifts in seeding order.
    pub const ALL: [Self; 3] = [Self::Morning, Self::Afternoon, Self::Night];

    /// Returns the stored identifier of the shift.
    #[must_use]
    pub const fn id(self) -> i64 {
        self as i64
    }

    /// Returns the label stored in the shifts table.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Morning => "Morning",
            Self::Afternoon => "Afternoon",
            Self::Night => "Night",
        }
    }

    /// Looks a shift up by its stored identifier.
    ///
    /// # Examples
    ///
    /// ```
    /// use cowork::Shift;
    ///
    /// assert_eq!(Shift::from_id(2), Some(Shift::Afternoon));
    /// assert_eq!(Shift::from_id(4), None);
    /// ```
    #[must_use]
    pub fn from_id(id: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|shift| shift.id() == id)
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Shift {
    type Err = InvalidShiftError;

    /// Accepts the English label, the Spanish label, or the numeric id,
    /// ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "1" | "morning" | "matutino" => Ok(Self::Morning),
            "2" | "afternoon" | "vespertino" => Ok(Self::Afternoon),
            "3" | "night" | "nocturno" => Ok(Self::Night),
            _ => Err(InvalidShiftError {
                value: s.trim().to_string(),
            }),
        }
    }
}

impl ToSql for Shift {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.id()))
    }
}

impl FromSql for Shift {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let id = i64::column_result(value)?;
        Self::from_id(id).ok_or(FromSqlError::OutOfRange(id))
    }
}

/// Error returned for text that names no shift.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidShiftError {
    /// The rejected input.
    pub value: String,
}

impl fmt::Display for InvalidShiftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}' is not a shift (expected Morning, Afternoon or Night)",
            self.value
        )
    }
}

impl std::error::Error for InvalidShiftError {}

/// A bookable unit: one room, one date, one shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slot {
    /// The room being booked.
    pub room_id: RoomId,
    /// The calendar date of the event.
    pub date: NaiveDate,
    /// The shift of the event.
    pub shift: Shift,
}

impl Slot {
    /// Creates a new slot.
    #[must_use]
    pub const fn new(room_id: RoomId, date: NaiveDate, shift: Shift) -> Self {
        Self {
            room_id,
            date,
            shift,
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "room {} on {} ({})",
            self.room_id,
            format_date(self.date),
            self.shift
        )
    }
}

/// An inclusive range of calendar dates.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use cowork::DateRange;
///
/// let start = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2026, 3, 31).unwrap();
/// let range = DateRange::new(start, end).unwrap();
///
/// assert!(range.contains(NaiveDate::from_ymd_opt(2026, 3, 31).unwrap()));
/// assert!(!range.contains(NaiveDate::from_ymd_opt(2026, 4, 1).unwrap()));
/// assert!(DateRange::new(end, start).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Creates a new range.
    ///
    /// # Errors
    ///
    /// Returns an error if `end` is before `start`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, InvalidDateRangeError> {
        if end < start {
            Err(InvalidDateRangeError { start, end })
        } else {
            Ok(Self { start, end })
        }
    }

    /// A range covering a single day.
    #[must_use]
    pub const fn single(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// Returns the first day of the range.
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Returns the last day of the range.
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Returns `true` if the date lies within the range.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Returns the number of days covered by the range.
    #[must_use]
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", format_date(self.start), format_date(self.end))
    }
}

/// Error returned when a range ends before it starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidDateRangeError {
    /// The requested start.
    pub start: NaiveDate,
    /// The requested end.
    pub end: NaiveDate,
}

impl fmt::Display for InvalidDateRangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "end date {} is before start date {}",
            format_date(self.end),
            format_date(self.start)
        )
    }
}

impl std::error::Error for InvalidDateRangeError {}
