//! Database schema definitions and SQL constants.
//!
//! Table and column names follow the layout of existing `coworking.db`
//! files: `Clientes`, `Salas`, `Turnos` and `Reservaciones`. Dates are stored
//! as ISO `YYYY-MM-DD` text so that `BETWEEN` and `ORDER BY` compare them in
//! calendar order.

/// Current schema version for the database.
pub const CURRENT_SCHEMA_VERSION: i32 = 1;

/// SQL statement to create the metadata table.
pub const CREATE_METADATA_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS metadata (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL
    )";

/// SQL statement to create the clients table.
pub const CREATE_CLIENTS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS Clientes (
        id_cliente INTEGER PRIMARY KEY,
        nombre TEXT NOT NULL,
        apellido TEXT NOT NULL
    )";

/// SQL statement to create the rooms table.
pub const CREATE_ROOMS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS Salas (
        id_sala INTEGER PRIMARY KEY,
        nombre TEXT NOT NULL,
        cupo INTEGER NOT NULL CHECK (cupo >= 0)
    )";

/// SQL statement to create the shifts table.
pub const CREATE_SHIFTS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS Turnos (
        id_turno INTEGER PRIMARY KEY,
        turno TEXT NOT NULL UNIQUE
    )";

/// SQL statement to create the reservations table.
///
/// `fecha` and `id_turno` are cleared when a reservation is cancelled.
pub const CREATE_RESERVATIONS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS Reservaciones (
        id_reservaciones INTEGER PRIMARY KEY,
        id_cliente INTEGER NOT NULL REFERENCES Clientes (id_cliente),
        id_sala INTEGER NOT NULL REFERENCES Salas (id_sala),
        fecha TEXT,
        id_turno INTEGER REFERENCES Turnos (id_turno),
        evento TEXT NOT NULL,
        estatus TEXT NOT NULL DEFAULT 'Active'
            CHECK (estatus IN ('Active', 'Cancelled'))
    )";

/// SQL statement to create the unique index over active slots.
///
/// At most one Active reservation may hold a given room, date and shift.
pub const CREATE_ACTIVE_SLOT_INDEX: &str = r"
    CREATE UNIQUE INDEX IF NOT EXISTS idx_reservaciones_slot_activa
    ON Reservaciones (id_sala, fecha, id_turno)
    WHERE estatus = 'Active'";

/// SQL statement to create an index on the reservation date.
pub const CREATE_DATE_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_reservaciones_fecha ON Reservaciones (fecha)";

/// SQL statement to count seeded shifts.
pub const COUNT_SHIFTS: &str = "SELECT COUNT(*) FROM Turnos";

/// SQL statement to seed one shift.
pub const INSERT_SHIFT: &str = "INSERT INTO Turnos (id_turno, turno) VALUES (?1, ?2)";

/// SQL statement to select the schema version from the metadata table.
pub const SELECT_SCHEMA_VERSION: &str = "SELECT value FROM metadata WHERE key = 'schema_version'";

/// SQL statement to insert or update the schema version in the metadata table.
pub const INSERT_SCHEMA_VERSION: &str =
    "INSERT OR REPLACE INTO metadata (key, value) VALUES ('schema_version', ?)";
