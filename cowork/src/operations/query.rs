//! Reservation queries by date range.

use rusqlite::Connection;

use crate::database::Database;
use crate::error::Result;
use crate::reservation::ReservationView;
use crate::schedule::DateRange;

/// A query for the Active reservations in a date range.
///
/// The query holds no results. Every [`run`](Self::run) reads the store
/// again, so a query can be re-run after other operations.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use cowork::database::{Database, DatabaseConfig};
/// use cowork::operations::ReservationQuery;
/// use cowork::DateRange;
///
/// let dir = tempfile::tempdir().unwrap();
/// let db = Database::open(DatabaseConfig::in_data_dir(dir.path())).unwrap();
/// let day = NaiveDate::from_ymd_opt(2030, 1, 7).unwrap();
///
/// let rows = ReservationQuery::new(DateRange::single(day)).run(db.connection()).unwrap();
/// assert!(rows.is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReservationQuery {
    range: DateRange,
}

impl ReservationQuery {
    /// Creates a query for the given range.
    #[must_use]
    pub const fn new(range: DateRange) -> Self {
        Self { range }
    }

    /// The queried range.
    #[must_use]
    pub const fn range(&self) -> DateRange {
        self.range
    }

    /// Runs the query.
    ///
    /// Rows are ordered by date, then by reservation id.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn run(&self, conn: &Connection) -> Result<Vec<ReservationView>> {
        let rows = Database::active_views_in_range(conn, &self.range)?;
        log::debug!("{} reservation(s) between {}", rows.len(), self.range);
        Ok(rows)
    }
}
