//! Shared test utilities for database unit tests.

use chrono::NaiveDate;
use tempfile::tempdir;

use crate::database::{Database, DatabaseConfig};
use crate::registry::{ClientId, NewClient, NewRoom, RoomId};
use crate::reservation::{EventName, NewReservation, ReservationId};
use crate::schedule::{Shift, Slot};

/// Creates a temporary test database that will be cleaned up automatically.
///
/// # Panics
///
/// Panics if the temporary directory or database cannot be created.
#[must_use]
pub fn create_test_database() -> Database {
    let dir = tempdir().unwrap();
    let path = dir.path().join("test.db");
    let db = Database::open(DatabaseConfig::new(path)).unwrap();

    // Keep the directory alive for the lifetime of the test process
    std::mem::forget(dir);

    db
}

/// Registers client "Ana Ruiz" and room "Sala A" (capacity 4).
///
/// # Panics
///
/// Panics if either insert fails.
pub fn seed_client_and_room(db: &Database) -> (ClientId, RoomId) {
    let conn = db.connection();
    let client = Database::insert_client(conn, &NewClient::new("Ana", "Ruiz").unwrap()).unwrap();
    let room = Database::insert_room(conn, &NewRoom::new("Sala A", 4).unwrap()).unwrap();
    (client, room)
}

/// Stores an Active reservation directly, bypassing the booking rules.
///
/// # Panics
///
/// Panics if the event name is invalid or the insert fails.
pub fn reserve(
    db: &Database,
    client: ClientId,
    room: RoomId,
    date: NaiveDate,
    shift: Shift,
    event: &str,
) -> ReservationId {
    let request = NewReservation::new(
        client,
        Slot::new(room, date, shift),
        EventName::new(event).unwrap(),
    );
    Database::insert_reservation(db.connection(), &request).unwrap()
}
