//! Reservation types.
//!
//! A reservation books one [`Slot`] for a client's named event. It starts
//! Active; its event name may change any number of times while Active, and it
//! moves to Cancelled exactly once, at which point its date and shift are
//! released.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};

use crate::registry::{validate_letters, ClientId, RoomId};
use crate::schedule::{Shift, Slot};

record_id!(
    /// Identifier of a stored reservation.
    ReservationId
);

/// The name of the event a reservation is for.
///
/// Restricted to letters and spaces, non-empty after trimming.
///
/// # Examples
///
/// ```
/// use cowork::EventName;
///
/// let name = EventName::new("  Taller de Rust ").unwrap();
/// assert_eq!(name.as_str(), "Taller de Rust");
///
/// assert!(EventName::new("Meetup #3").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EventName(String);

impl EventName {
    /// Validates and creates an event name.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty or contains characters other
    /// than letters and spaces.
    pub fn new(name: &str) -> Result<Self, ValidationError> {
        validate_letters("event_name", name).map(Self)
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for EventName {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<EventName> for String {
    fn from(name: EventName) -> Self {
        name.0
    }
}

impl fmt::Display for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lifecycle state of a reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReservationStatus {
    /// The reservation holds its slot.
    Active,
    /// The reservation was cancelled; terminal.
    Cancelled,
}

impl ReservationStatus {
    /// The value stored in the `estatus` column.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReservationStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(Self::Active),
            "Cancelled" => Ok(Self::Cancelled),
            other => Err(ValidationError {
                field: "status".into(),
                message: format!("unknown reservation status '{other}'"),
            }),
        }
    }
}

impl ToSql for ReservationStatus {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for ReservationStatus {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|e: ValidationError| FromSqlError::Other(Box::new(e)))
    }
}

/// A stored reservation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    /// The reservation's identifier.
    pub id: ReservationId,
    /// The client who booked.
    pub client_id: ClientId,
    /// The booked room.
    pub room_id: RoomId,
    /// Event date; cleared on cancellation.
    pub date: Option<NaiveDate>,
    /// Event shift; cleared on cancellation.
    pub shift: Option<Shift>,
    /// The event's name.
    pub event_name: EventName,
    /// Lifecycle state.
    pub status: ReservationStatus,
}

impl Reservation {
    /// Returns `true` while the reservation holds its slot.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == ReservationStatus::Active
    }

    /// The slot held by the reservation, if it still has a date and shift.
    #[must_use]
    pub fn slot(&self) -> Option<Slot> {
        match (self.date, self.shift) {
            (Some(date), Some(shift)) => Some(Slot::new(self.room_id, date, shift)),
            _ => None,
        }
    }
}

/// A reservation that has not been stored yet.
///
/// New reservations are always Active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReservation {
    /// The client who books.
    pub client_id: ClientId,
    /// The slot to hold.
    pub slot: Slot,
    /// The event's name.
    pub event_name: EventName,
}

impl NewReservation {
    /// Creates a new reservation request.
    #[must_use]
    pub const fn new(client_id: ClientId, slot: Slot, event_name: EventName) -> Self {
        Self {
            client_id,
            slot,
            event_name,
        }
    }
}

/// An Active reservation joined with the names it refers to.
///
/// This is the row shape of queries, listings and exports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationView {
    /// The reservation's identifier.
    pub id: ReservationId,
    /// The client's first and last name.
    pub client_name: String,
    /// The room's name.
    pub room_name: String,
    /// Event date.
    pub date: NaiveDate,
    /// Event shift.
    pub shift: Shift,
    /// The event's name.
    pub event_name: String,
}

/// Error type for field validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that failed validation.
    pub field: String,
    /// A description of the validation failure.
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_name_validation() {
        assert_eq!(EventName::new("Taller").unwrap().as_str(), "Taller");
        let err = EventName::new("").unwrap_err();
        assert_eq!(err.field, "event_name");
        assert!(EventName::new("Taller 2026").is_err());
    }

    #[test]
    fn test_event_name_serde_validates() {
        let name: EventName = serde_json::from_str("\"Junta Anual\"").unwrap();
        assert_eq!(name.to_string(), "Junta Anual");
        assert!(serde_json::from_str::<EventName>("\"Junta #1\"").is_err());
        assert_eq!(serde_json::to_string(&name).unwrap(), "\"Junta Anual\"");
    }

    #[test]
    fn test_status_text_round_trip() {
        for status in [ReservationStatus::Active, ReservationStatus::Cancelled] {
            assert_eq!(status.as_str().parse::<ReservationStatus>().unwrap(), status);
        }
        assert!("active".parse::<ReservationStatus>().is_err());
    }

    #[test]
    fn test_slot_requires_date_and_shift() {
        let mut reservation = Reservation {
            id: ReservationId::new(1),
            client_id: ClientId::new(1),
            room_id: RoomId::new(2),
            date: NaiveDate::from_ymd_opt(2030, 1, 7),
            shift: Some(Shift::Morning),
            event_name: EventName::new("Taller").unwrap(),
            status: ReservationStatus::Active,
        };
        let slot = reservation.slot().unwrap();
        assert_eq!(slot.room_id, RoomId::new(2));
        assert!(reservation.is_active());

        reservation.date = None;
        reservation.shift = None;
        reservation.status = ReservationStatus::Cancelled;
        assert!(reservation.slot().is_none());
        assert!(!reservation.is_active());
    }
}
