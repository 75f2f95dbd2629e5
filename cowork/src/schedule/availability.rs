//! Slot availability checking.
//!
//! The checker answers one question: does an Active reservation already hold
//! exactly this room, date and shift. Adjacent shifts on the same date and
//! cancelled reservations never count as collisions.

use rusqlite::Connection;

use crate::database::Database;
use crate::schedule::Slot;
use crate::Result;

/// Trait for checking slot occupancy.
///
/// Lifecycle operations depend on this trait rather than on the store so that
/// plan building can be exercised against a mock.
#[cfg_attr(test, mockall::automock)]
pub trait AvailabilityChecker {
    /// Returns `Ok(true)` if an Active reservation holds the slot.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying lookup fails.
    fn is_occupied(&self, slot: &Slot) -> Result<bool>;

    /// Returns the subset of `slots` that are free, preserving order.
    ///
    /// # Errors
    ///
    /// Returns an error if any lookup fails.
    fn free_slots(&self, slots: &[Slot]) -> Result<Vec<Slot>> {
        let mut free = Vec::with_capacity(slots.len());
        for slot in slots {
            if !self.is_occupied(slot)? {
                free.push(*slot);
            }
        }
        Ok(free)
    }
}

/// Availability backed by the reservations table.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use cowork::database::{Database, DatabaseConfig};
/// use cowork::schedule::availability::{AvailabilityChecker, StoreAvailability};
/// use cowork::{RoomId, Shift, Slot};
///
/// let dir = tempfile::tempdir().unwrap();
/// let db = Database::open(DatabaseConfig::new(dir.path().join("cowork.db"))).unwrap();
///
/// let checker = StoreAvailability::new(db.connection());
/// let date = NaiveDate::from_ymd_opt(2030, 1, 7).unwrap();
/// let slot = Slot::new(RoomId::new(1), date, Shift::Morning);
/// assert!(!checker.is_occupied(&slot).unwrap());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct StoreAvailability<'a> {
    conn: &'a Connection,
}

impl<'a> StoreAvailability<'a> {
    /// Creates a checker over an open connection.
    #[must_use]
    pub const fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

impl AvailabilityChecker for StoreAvailability<'_> {
    fn is_occupied(&self, slot: &Slot) -> Result<bool> {
        Database::is_slot_occupied(self.conn, slot)
    }
}
