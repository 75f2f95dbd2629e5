//! Store operations for clients, rooms, shifts and reservations.
//!
//! Every operation is a single SQL statement, so each one is atomic on its
//! own. Operations take a `&Connection` so they can run against any open
//! [`Database`].

use rusqlite::types::Type;
use rusqlite::{params, Connection};

use crate::error::{Error, Result};
use crate::registry::{Client, ClientId, NewClient, NewRoom, Room, RoomId};
use crate::reservation::{EventName, NewReservation, Reservation, ReservationId, ReservationView};
use crate::schedule::{DateRange, Shift, Slot};

use super::connection::Database;

const INSERT_CLIENT: &str = "INSERT INTO Clientes (nombre, apellido) VALUES (?1, ?2)";

const INSERT_ROOM: &str = "INSERT INTO Salas (nombre, cupo) VALUES (?1, ?2)";

const INSERT_RESERVATION: &str = r"
    INSERT INTO Reservaciones (id_cliente, id_sala, fecha, id_turno, evento, estatus)
    VALUES (?1, ?2, ?3, ?4, ?5, 'Active')
";

const UPDATE_EVENT_NAME: &str = r"
    UPDATE Reservaciones
    SET evento = ?2
    WHERE id_reservaciones = ?1 AND estatus = 'Active'
";

const CANCEL_RESERVATION: &str = r"
    UPDATE Reservaciones
    SET estatus = 'Cancelled', fecha = NULL, id_turno = NULL
    WHERE id_reservaciones = ?1 AND estatus = 'Active'
";

const SELECT_CLIENT: &str =
    "SELECT id_cliente, nombre, apellido FROM Clientes WHERE id_cliente = ?1";

const LIST_CLIENTS: &str = r"
    SELECT id_cliente, nombre, apellido
    FROM Clientes
    ORDER BY apellido, nombre, id_cliente
";

const SELECT_ROOM: &str = "SELECT id_sala, nombre, cupo FROM Salas WHERE id_sala = ?1";

const LIST_ROOMS: &str = "SELECT id_sala, nombre, cupo FROM Salas ORDER BY id_sala";

const LIST_SHIFTS: &str = "SELECT id_turno FROM Turnos ORDER BY id_turno";

const RESERVATION_COLUMNS: &str =
    "id_reservaciones, id_cliente, id_sala, fecha, id_turno, evento, estatus";

const CHECK_SLOT_OCCUPIED: &str = r"
    SELECT EXISTS (
        SELECT 1 FROM Reservaciones
        WHERE id_sala = ?1 AND fecha = ?2 AND id_turno = ?3 AND estatus = 'Active'
    )
";

const SELECT_VIEWS_IN_RANGE: &str = r"
    SELECT r.id_reservaciones,
           c.nombre || ' ' || c.apellido,
           s.nombre,
           r.fecha,
           r.id_turno,
           r.evento
    FROM Reservaciones r
    JOIN Clientes c ON c.id_cliente = r.id_cliente
    JOIN Salas s ON s.id_sala = r.id_sala
    WHERE r.estatus = 'Active' AND r.fecha BETWEEN ?1 AND ?2
    ORDER BY r.fecha, r.id_reservaciones
";

const COUNT_RESERVATIONS: &str = "SELECT COUNT(*) FROM Reservaciones";

fn conversion_error(
    index: usize,
    err: impl std::error::Error + Send + Sync + 'static,
) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(err))
}

/// Expects columns: id, first name, last name.
fn row_to_client(row: &rusqlite::Row<'_>) -> rusqlite::Result<Client> {
    Ok(Client {
        id: row.get(0)?,
        first_name: row.get(1)?,
        last_name: row.get(2)?,
    })
}

/// Expects columns: id, name, capacity.
fn row_to_room(row: &rusqlite::Row<'_>) -> rusqlite::Result<Room> {
    Ok(Room {
        id: row.get(0)?,
        name: row.get(1)?,
        capacity: row.get(2)?,
    })
}

/// Expects the columns of [`RESERVATION_COLUMNS`] in order.
fn row_to_reservation(row: &rusqlite::Row<'_>) -> rusqlite::Result<Reservation> {
    let event: String = row.get(5)?;
    let event_name = EventName::new(&event).map_err(|e| conversion_error(5, e))?;

    Ok(Reservation {
        id: row.get(0)?,
        client_id: row.get(1)?,
        room_id: row.get(2)?,
        date: row.get(3)?,
        shift: row.get(4)?,
        event_name,
        status: row.get(6)?,
    })
}

/// Expects columns: id, client name, room name, date, shift, event.
fn row_to_view(row: &rusqlite::Row<'_>) -> rusqlite::Result<ReservationView> {
    Ok(ReservationView {
        id: row.get(0)?,
        client_name: row.get(1)?,
        room_name: row.get(2)?,
        date: row.get(3)?,
        shift: row.get(4)?,
        event_name: row.get(5)?,
    })
}

impl Database {
    /// Stores a new client and returns its identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_client(conn: &Connection, client: &NewClient) -> Result<ClientId> {
        conn.execute(INSERT_CLIENT, params![client.first_name(), client.last_name()])?;
        Ok(ClientId::new(conn.last_insert_rowid()))
    }

    /// Stores a new room and returns its identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_room(conn: &Connection, room: &NewRoom) -> Result<RoomId> {
        conn.execute(INSERT_ROOM, params![room.name(), room.capacity()])?;
        Ok(RoomId::new(conn.last_insert_rowid()))
    }

    /// Seeds the shifts table if it is empty; returns the number of rows added.
    ///
    /// # Errors
    ///
    /// Returns an error if the count or an insert fails.
    pub fn seed_shifts(conn: &Connection) -> Result<usize> {
        super::migrations::seed_shifts(conn)
    }

    /// Stores a new Active reservation and returns its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SlotOccupied`] if another Active reservation already
    /// holds the slot, or a database error if the insert fails otherwise
    /// (for example an unknown client or room).
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use cowork::database::{Database, DatabaseConfig};
    /// use cowork::{EventName, NewClient, NewReservation, NewRoom, Shift, Slot};
    ///
    /// let dir = tempfile::tempdir().unwrap();
    /// let db = Database::open(DatabaseConfig::in_data_dir(dir.path())).unwrap();
    /// let conn = db.connection();
    ///
    /// let client = Database::insert_client(conn, &NewClient::new("Ana", "Ruiz").unwrap()).unwrap();
    /// let room = Database::insert_room(conn, &NewRoom::new("Sala A", 4).unwrap()).unwrap();
    /// let date = NaiveDate::from_ymd_opt(2030, 1, 7).unwrap();
    /// let request = NewReservation::new(
    ///     client,
    ///     Slot::new(room, date, Shift::Morning),
    ///     EventName::new("Taller").unwrap(),
    /// );
    ///
    /// let id = Database::insert_reservation(conn, &request).unwrap();
    /// assert!(Database::insert_reservation(conn, &request).is_err());
    /// assert!(Database::get_reservation(conn, id).unwrap().unwrap().is_active());
    /// ```
    pub fn insert_reservation(
        conn: &Connection,
        reservation: &NewReservation,
    ) -> Result<ReservationId> {
        let slot = reservation.slot;
        match conn.execute(
            INSERT_RESERVATION,
            params![
                reservation.client_id,
                slot.room_id,
                slot.date,
                slot.shift,
                reservation.event_name.as_str(),
            ],
        ) {
            Ok(_) => Ok(ReservationId::new(conn.last_insert_rowid())),
            Err(e) if Error::is_unique_violation(&e) => Err(Error::SlotOccupied { slot }),
            Err(e) => Err(e.into()),
        }
    }

    /// Replaces the event name of an Active reservation.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if an Active reservation was updated
    /// - `Ok(false)` if no Active reservation has that identifier
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn update_event_name(
        conn: &Connection,
        id: ReservationId,
        event_name: &EventName,
    ) -> Result<bool> {
        let rows = conn.execute(UPDATE_EVENT_NAME, params![id, event_name.as_str()])?;
        Ok(rows > 0)
    }

    /// Cancels an Active reservation, releasing its date and shift.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if an Active reservation was cancelled
    /// - `Ok(false)` if no Active reservation has that identifier
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn cancel_reservation(conn: &Connection, id: ReservationId) -> Result<bool> {
        let rows = conn.execute(CANCEL_RESERVATION, params![id])?;
        Ok(rows > 0)
    }

    /// Looks up a client.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_client(conn: &Connection, id: ClientId) -> Result<Option<Client>> {
        match conn.query_row(SELECT_CLIENT, params![id], row_to_client) {
            Ok(client) => Ok(Some(client)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Lists clients ordered by last name, then first name.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_clients(conn: &Connection) -> Result<Vec<Client>> {
        let mut stmt = conn.prepare(LIST_CLIENTS)?;
        let clients = stmt
            .query_map([], row_to_client)?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;
        Ok(clients)
    }

    /// Looks up a room.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_room(conn: &Connection, id: RoomId) -> Result<Option<Room>> {
        match conn.query_row(SELECT_ROOM, params![id], row_to_room) {
            Ok(room) => Ok(Some(room)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Lists rooms in registration order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_rooms(conn: &Connection) -> Result<Vec<Room>> {
        let mut stmt = conn.prepare(LIST_ROOMS)?;
        let rooms = stmt
            .query_map([], row_to_room)?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;
        Ok(rooms)
    }

    /// Lists the seeded shifts.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row names an unknown shift.
    pub fn list_shifts(conn: &Connection) -> Result<Vec<Shift>> {
        let mut stmt = conn.prepare(LIST_SHIFTS)?;
        let shifts = stmt
            .query_map([], |row| row.get(0))?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;
        Ok(shifts)
    }

    /// Looks up a reservation in any state.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_reservation(conn: &Connection, id: ReservationId) -> Result<Option<Reservation>> {
        let sql =
            format!("SELECT {RESERVATION_COLUMNS} FROM Reservaciones WHERE id_reservaciones = ?1");
        match conn.query_row(&sql, params![id], row_to_reservation) {
            Ok(reservation) => Ok(Some(reservation)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Lists reservations in any state whose date lies in `range`, by date then id.
    ///
    /// Cancelled reservations have no date and therefore never match.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn reservations_in_range(conn: &Connection, range: &DateRange) -> Result<Vec<Reservation>> {
        Self::select_reservations(conn, range, false)
    }

    /// Lists Active reservations whose date lies in `range`, by date then id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn active_reservations_in_range(
        conn: &Connection,
        range: &DateRange,
    ) -> Result<Vec<Reservation>> {
        Self::select_reservations(conn, range, true)
    }

    fn select_reservations(
        conn: &Connection,
        range: &DateRange,
        active_only: bool,
    ) -> Result<Vec<Reservation>> {
        let status_filter = if active_only {
            "AND estatus = 'Active'"
        } else {
            ""
        };
        let sql = format!(
            "SELECT {RESERVATION_COLUMNS} FROM Reservaciones \
             WHERE fecha BETWEEN ?1 AND ?2 {status_filter} \
             ORDER BY fecha, id_reservaciones"
        );
        let mut stmt = conn.prepare(&sql)?;
        let reservations = stmt
            .query_map(params![range.start(), range.end()], row_to_reservation)?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;
        Ok(reservations)
    }

    /// Lists Active reservations in `range` joined with client, room and
    /// shift names, ordered by date then id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn active_views_in_range(
        conn: &Connection,
        range: &DateRange,
    ) -> Result<Vec<ReservationView>> {
        let mut stmt = conn.prepare(SELECT_VIEWS_IN_RANGE)?;
        let views = stmt
            .query_map(params![range.start(), range.end()], row_to_view)?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;
        Ok(views)
    }

    /// Returns `true` if an Active reservation holds exactly this slot.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn is_slot_occupied(conn: &Connection, slot: &Slot) -> Result<bool> {
        let occupied: bool = conn.query_row(
            CHECK_SLOT_OCCUPIED,
            params![slot.room_id, slot.date, slot.shift],
            |row| row.get(0),
        )?;
        Ok(occupied)
    }

    /// Counts stored reservations in every state.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_reservations(conn: &Connection) -> Result<u64> {
        let count: u64 = conn.query_row(COUNT_RESERVATIONS, [], |row| row.get(0))?;
        Ok(count)
    }

    /// Runs `PRAGMA integrity_check`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DatabaseCorruption`] if the check reports problems.
    pub fn verify_integrity(&self) -> Result<()> {
        let result: String = self
            .conn
            .query_row("PRAGMA integrity_check", [], |row| row.get(0))?;

        if result == "ok" {
            Ok(())
        } else {
            Err(Error::DatabaseCorruption {
                details: format!("integrity check failed: {result}"),
            })
        }
    }
}
