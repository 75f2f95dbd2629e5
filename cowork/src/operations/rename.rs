//! Event rename planning.
//!
//! The operator first narrows the reservations to a date range, then picks
//! one of them by id. Only the event name changes.

use rusqlite::Connection;

use crate::database::Database;
use crate::error::{Error, Result};
use crate::reservation::{EventName, ReservationId};
use crate::schedule::DateRange;

use super::plan::{OperationPlan, PlanAction};

/// Options for renaming a reservation's event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameOptions {
    /// The range the reservation was selected from.
    pub range: DateRange,
    /// The reservation to rename.
    pub id: ReservationId,
    /// The new event name as entered; validated during planning.
    pub event_name: String,
}

impl RenameOptions {
    /// Creates rename options.
    #[must_use]
    pub fn new(range: DateRange, id: ReservationId, event_name: impl Into<String>) -> Self {
        Self {
            range,
            id,
            event_name: event_name.into(),
        }
    }
}

/// An event rename plan generator.
#[derive(Debug, Clone)]
pub struct RenamePlan {
    options: RenameOptions,
}

impl RenamePlan {
    /// Creates a planner for the given request.
    #[must_use]
    pub const fn new(options: RenameOptions) -> Self {
        Self { options }
    }

    /// Builds the plan. Does not modify the store.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotInRange`] if the reservation's date is not in the
    /// range, which includes every cancelled reservation, or
    /// [`Error::Validation`] for an invalid event name.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use cowork::database::{Database, DatabaseConfig};
    /// use cowork::operations::{RenameOptions, RenamePlan};
    /// use cowork::{DateRange, Error, ReservationId};
    ///
    /// let dir = tempfile::tempdir().unwrap();
    /// let db = Database::open(DatabaseConfig::in_data_dir(dir.path())).unwrap();
    /// let day = NaiveDate::from_ymd_opt(2030, 1, 7).unwrap();
    ///
    /// let options = RenameOptions::new(DateRange::single(day), ReservationId::new(1), "Junta");
    /// let err = RenamePlan::new(options).build_plan(db.connection()).unwrap_err();
    /// assert!(matches!(err, Error::NotInRange { .. }));
    /// ```
    pub fn build_plan(&self, conn: &Connection) -> Result<OperationPlan> {
        let options = &self.options;

        let candidates = Database::reservations_in_range(conn, &options.range)?;
        if !candidates.iter().any(|r| r.id == options.id) {
            return Err(Error::NotInRange { id: options.id });
        }

        let event_name = EventName::new(&options.event_name)?;

        Ok(
            OperationPlan::new(format!("Rename event of reservation {}", options.id)).add_action(
                PlanAction::RenameEvent {
                    id: options.id,
                    event_name,
                },
            ),
        )
    }
}
