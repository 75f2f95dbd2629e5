//! Reservation creation planning.
//!
//! Checks run in a fixed order so the operator is told about the first
//! problem in the order the fields are asked for: client, room, date, shift,
//! event name.

use chrono::NaiveDate;
use rusqlite::Connection;

use crate::database::Database;
use crate::error::{Error, Result};
use crate::registry::{ClientId, RoomId};
use crate::reservation::{EventName, NewReservation};
use crate::schedule::availability::{AvailabilityChecker, StoreAvailability};
use crate::schedule::policy::BookingPolicy;
use crate::schedule::{format_date, Shift, Slot};

use super::plan::{OperationPlan, PlanAction};

/// Options for creating a reservation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateOptions {
    /// The client making the booking.
    pub client_id: ClientId,
    /// The room to book.
    pub room_id: RoomId,
    /// The requested event date.
    pub date: NaiveDate,
    /// The requested shift.
    pub shift: Shift,
    /// The event name as entered; validated during planning.
    pub event_name: String,
    /// Book the following day when the date falls on the closed weekday.
    pub accept_substitute: bool,
    /// The operation's notion of today.
    pub today: NaiveDate,
}

impl CreateOptions {
    /// Creates options with `today` taken from the local clock and no
    /// substitute accepted.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use cowork::operations::CreateOptions;
    /// use cowork::{ClientId, RoomId, Shift};
    ///
    /// let date = NaiveDate::from_ymd_opt(2030, 1, 7).unwrap();
    /// let options = CreateOptions::new(ClientId::new(1), RoomId::new(1), date, Shift::Night, "Taller")
    ///     .with_accept_substitute(true);
    /// assert!(options.accept_substitute);
    /// ```
    #[must_use]
    pub fn new(
        client_id: ClientId,
        room_id: RoomId,
        date: NaiveDate,
        shift: Shift,
        event_name: impl Into<String>,
    ) -> Self {
        Self {
            client_id,
            room_id,
            date,
            shift,
            event_name: event_name.into(),
            accept_substitute: false,
            today: super::today(),
        }
    }

    /// Sets whether the closed-weekday substitute is accepted.
    #[must_use]
    pub const fn with_accept_substitute(mut self, accept: bool) -> Self {
        self.accept_substitute = accept;
        self
    }

    /// Overrides the operation's notion of today.
    #[must_use]
    pub const fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }
}

/// A reservation creation plan generator.
#[derive(Debug, Clone)]
pub struct CreatePlan {
    options: CreateOptions,
    policy: BookingPolicy,
}

impl CreatePlan {
    /// Creates a planner for the given request and booking rules.
    #[must_use]
    pub const fn new(options: CreateOptions, policy: BookingPolicy) -> Self {
        Self { options, policy }
    }

    /// Builds the plan, checking availability against the store.
    ///
    /// # Errors
    ///
    /// See [`CreatePlan::build_plan_with`].
    pub fn build_plan(&self, conn: &Connection) -> Result<OperationPlan> {
        self.build_plan_with(conn, &StoreAvailability::new(conn))
    }

    /// Builds the plan with an explicit availability checker.
    ///
    /// Does not modify the store.
    ///
    /// # Errors
    ///
    /// Returns, in check order:
    /// - [`Error::NotFound`] for an unknown client or room
    /// - [`Error::InsufficientNotice`] or [`Error::ClosedWeekday`] from the date rules
    /// - [`Error::SlotOccupied`] if the slot is taken
    /// - [`Error::Validation`] for an invalid event name
    pub fn build_plan_with(
        &self,
        conn: &Connection,
        checker: &dyn AvailabilityChecker,
    ) -> Result<OperationPlan> {
        let options = &self.options;

        if Database::get_client(conn, options.client_id)?.is_none() {
            return Err(Error::NotFound {
                resource: format!("client {}", options.client_id),
            });
        }
        if Database::get_room(conn, options.room_id)?.is_none() {
            return Err(Error::NotFound {
                resource: format!("room {}", options.room_id),
            });
        }

        let date = self.policy.resolve_event_date(
            options.date,
            options.today,
            options.accept_substitute,
        )?;

        let slot = Slot::new(options.room_id, date, options.shift);
        if checker.is_occupied(&slot)? {
            return Err(Error::SlotOccupied { slot });
        }

        let event_name = EventName::new(&options.event_name)?;

        let mut plan = OperationPlan::new(format!("Create reservation for {slot}"));
        if date != options.date {
            plan = plan.add_warning(format!(
                "{} falls on a closed day; booking {} instead",
                format_date(options.date),
                format_date(date)
            ));
        }
        log::debug!("planned reservation for {slot}");

        Ok(plan.add_action(PlanAction::CreateReservation(NewReservation::new(
            options.client_id,
            slot,
            event_name,
        ))))
    }
}
