//! Cancellation planning.
//!
//! Cancellation is irreversible. It is only offered for Active reservations
//! in the selected range, needs enough notice, and must be confirmed.

use chrono::NaiveDate;
use rusqlite::Connection;

use crate::database::Database;
use crate::error::{Error, Result};
use crate::reservation::ReservationId;
use crate::schedule::policy::BookingPolicy;
use crate::schedule::{format_date, DateRange};

use super::plan::{OperationPlan, PlanAction};

/// Options for cancelling a reservation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancelOptions {
    /// The range the reservation was selected from.
    pub range: DateRange,
    /// The reservation to cancel.
    pub id: ReservationId,
    /// Whether the operator confirmed the cancellation.
    pub confirmed: bool,
    /// The operation's notion of today.
    pub today: NaiveDate,
}

impl CancelOptions {
    /// Creates unconfirmed options with `today` taken from the local clock.
    #[must_use]
    pub fn new(range: DateRange, id: ReservationId) -> Self {
        Self {
            range,
            id,
            confirmed: false,
            today: super::today(),
        }
    }

    /// Sets the confirmation flag.
    #[must_use]
    pub const fn with_confirmed(mut self, confirmed: bool) -> Self {
        self.confirmed = confirmed;
        self
    }

    /// Overrides the operation's notion of today.
    #[must_use]
    pub const fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }
}

/// A cancellation plan generator.
#[derive(Debug, Clone)]
pub struct CancelPlan {
    options: CancelOptions,
    policy: BookingPolicy,
}

impl CancelPlan {
    /// Creates a planner for the given request and booking rules.
    #[must_use]
    pub const fn new(options: CancelOptions, policy: BookingPolicy) -> Self {
        Self { options, policy }
    }

    /// Builds the plan. Does not modify the store.
    ///
    /// # Errors
    ///
    /// Returns, in check order:
    /// - [`Error::NotInRange`] if the id is not an Active reservation in the range
    /// - [`Error::CancellationTooLate`] if too few days remain
    /// - [`Error::NotConfirmed`] without confirmation
    pub fn build_plan(&self, conn: &Connection) -> Result<OperationPlan> {
        let options = &self.options;

        let candidates = Database::active_reservations_in_range(conn, &options.range)?;
        let reservation = candidates
            .into_iter()
            .find(|r| r.id == options.id)
            .ok_or(Error::NotInRange { id: options.id })?;

        let Some(slot) = reservation.slot() else {
            return Err(Error::NotInRange { id: options.id });
        };
        let date = slot.date;
        self.policy.check_cancellation(options.id, date, options.today)?;

        if !options.confirmed {
            return Err(Error::NotConfirmed);
        }

        Ok(OperationPlan::new(format!(
            "Cancel reservation {} on {}",
            options.id,
            format_date(date)
        ))
        .add_action(PlanAction::CancelReservation(options.id)))
    }
}
