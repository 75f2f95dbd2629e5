//! Date rules for creating and cancelling reservations.
//!
//! Every rule is evaluated against an explicit `today` so that a single
//! operation sees one consistent date from validation to execution.

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::reservation::ReservationId;
use crate::{Error, Result};

/// Default minimum number of days between today and a new event.
pub const DEFAULT_MIN_ADVANCE_DAYS: i64 = 2;

/// Default minimum number of days between today and a cancelled event.
pub const DEFAULT_MIN_CANCEL_DAYS: i64 = 2;

/// Default weekday on which no events are booked.
pub const DEFAULT_CLOSED_WEEKDAY: Weekday = Weekday::Sun;

/// Booking rules applied by the reservation lifecycle.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use cowork::BookingPolicy;
///
/// let policy = BookingPolicy::default();
/// let today = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
///
/// // Wednesday, two days out
/// let date = NaiveDate::from_ymd_opt(2026, 3, 4).unwrap();
/// assert_eq!(policy.resolve_event_date(date, today, false).unwrap(), date);
///
/// // Tomorrow is too soon
/// let tomorrow = NaiveDate::from_ymd_opt(2026, 3, 3).unwrap();
/// assert!(policy.resolve_event_date(tomorrow, today, false).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingPolicy {
    min_advance_days: i64,
    min_cancel_days: i64,
    closed_weekday: Option<Weekday>,
}

/// Outcome of checking a requested event date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateDecision {
    /// The date can be booked as requested.
    Accepted(NaiveDate),
    /// The date falls on the closed weekday; the proposed date may be booked instead.
    Substitute {
        /// The date the operator asked for.
        requested: NaiveDate,
        /// The following day.
        proposed: NaiveDate,
    },
}

impl Default for BookingPolicy {
    fn default() -> Self {
        Self {
            min_advance_days: DEFAULT_MIN_ADVANCE_DAYS,
            min_cancel_days: DEFAULT_MIN_CANCEL_DAYS,
            closed_weekday: Some(DEFAULT_CLOSED_WEEKDAY),
        }
    }
}

impl BookingPolicy {
    /// Creates a policy with explicit rules.
    #[must_use]
    pub const fn new(
        min_advance_days: i64,
        min_cancel_days: i64,
        closed_weekday: Option<Weekday>,
    ) -> Self {
        Self {
            min_advance_days,
            min_cancel_days,
            closed_weekday,
        }
    }

    /// Minimum days of notice for a new reservation.
    #[must_use]
    pub const fn min_advance_days(&self) -> i64 {
        self.min_advance_days
    }

    /// Minimum days of notice for a cancellation.
    #[must_use]
    pub const fn min_cancel_days(&self) -> i64 {
        self.min_cancel_days
    }

    /// The weekday with no bookings, if any.
    #[must_use]
    pub const fn closed_weekday(&self) -> Option<Weekday> {
        self.closed_weekday
    }

    /// Checks a requested event date against the notice and weekday rules.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InsufficientNotice`] if the date is fewer than
    /// `min_advance_days` days after `today`.
    pub fn check_event_date(&self, date: NaiveDate, today: NaiveDate) -> Result<DateDecision> {
        if days_between(today, date) < self.min_advance_days {
            return Err(Error::InsufficientNotice {
                date,
                today,
                required_days: self.min_advance_days,
            });
        }

        if self.is_closed(date) {
            let proposed = date
                .checked_add_days(Days::new(1))
                .ok_or_else(|| Error::Validation {
                    field: "date".into(),
                    message: format!("no calendar day follows {date}"),
                })?;
            return Ok(DateDecision::Substitute {
                requested: date,
                proposed,
            });
        }

        Ok(DateDecision::Accepted(date))
    }

    /// Resolves the date to book, taking the substitute only when accepted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InsufficientNotice`] for dates too close to `today`,
    /// and [`Error::ClosedWeekday`] for a closed-weekday date when
    /// `accept_substitute` is false.
    pub fn resolve_event_date(
        &self,
        date: NaiveDate,
        today: NaiveDate,
        accept_substitute: bool,
    ) -> Result<NaiveDate> {
        match self.check_event_date(date, today)? {
            DateDecision::Accepted(date) => Ok(date),
            DateDecision::Substitute { proposed, .. } if accept_substitute => Ok(proposed),
            DateDecision::Substitute {
                requested,
                proposed,
            } => Err(Error::ClosedWeekday {
                date: requested,
                substitute: proposed,
            }),
        }
    }

    /// Checks that a reservation on `date` may still be cancelled.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CancellationTooLate`] if fewer than `min_cancel_days`
    /// days remain.
    pub fn check_cancellation(
        &self,
        id: ReservationId,
        date: NaiveDate,
        today: NaiveDate,
    ) -> Result<()> {
        if days_between(today, date) < self.min_cancel_days {
            return Err(Error::CancellationTooLate {
                id,
                date,
                required_days: self.min_cancel_days,
            });
        }
        Ok(())
    }

    fn is_closed(&self, date: NaiveDate) -> bool {
        self.closed_weekday == Some(date.weekday())
    }
}

/// Number of calendar days from `from` to `to` (negative when `to` is earlier).
#[must_use]
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}
