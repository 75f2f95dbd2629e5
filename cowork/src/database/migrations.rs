//! Schema initialization and version checking.
//!
//! A fresh database (version 0) is initialized in place. Any other version
//! that differs from [`CURRENT_SCHEMA_VERSION`] is refused; there are no
//! migrations between versions.

use rusqlite::Connection;

use crate::error::{Error, Result};
use crate::schedule::Shift;

use super::schema::{
    COUNT_SHIFTS, CREATE_ACTIVE_SLOT_INDEX, CREATE_CLIENTS_TABLE, CREATE_DATE_INDEX,
    CREATE_METADATA_TABLE, CREATE_RESERVATIONS_TABLE, CREATE_ROOMS_TABLE, CREATE_SHIFTS_TABLE,
    CURRENT_SCHEMA_VERSION, INSERT_SCHEMA_VERSION, INSERT_SHIFT, SELECT_SCHEMA_VERSION,
};

/// Creates all tables and indices, seeds the shifts and records the schema
/// version.
///
/// # Errors
///
/// Returns an error if any SQL statement fails to execute.
///
/// # Examples
///
/// ```
/// use rusqlite::Connection;
/// use cowork::database::migrations::{get_schema_version, initialize_schema};
///
/// let conn = Connection::open_in_memory().unwrap();
/// initialize_schema(&conn).unwrap();
/// assert_eq!(get_schema_version(&conn).unwrap(), 1);
/// ```
pub fn initialize_schema(conn: &Connection) -> Result<()> {
    conn.execute(CREATE_METADATA_TABLE, [])?;
    conn.execute(CREATE_CLIENTS_TABLE, [])?;
    conn.execute(CREATE_ROOMS_TABLE, [])?;
    conn.execute(CREATE_SHIFTS_TABLE, [])?;
    conn.execute(CREATE_RESERVATIONS_TABLE, [])?;

    conn.execute(CREATE_ACTIVE_SLOT_INDEX, [])?;
    conn.execute(CREATE_DATE_INDEX, [])?;

    let seeded = seed_shifts(conn)?;
    log::debug!("initialized schema version {CURRENT_SCHEMA_VERSION}, seeded {seeded} shifts");

    conn.execute(INSERT_SCHEMA_VERSION, [CURRENT_SCHEMA_VERSION])?;

    Ok(())
}

/// Seeds the three shifts when the shifts table is empty.
///
/// Returns the number of rows inserted: 3 on first call, 0 afterwards.
///
/// # Errors
///
/// Returns an error if the count or an insert fails.
pub fn seed_shifts(conn: &Connection) -> Result<usize> {
    let existing: i64 = conn.query_row(COUNT_SHIFTS, [], |row| row.get(0))?;
    if existing > 0 {
        return Ok(0);
    }

    let mut stmt = conn.prepare(INSERT_SHIFT)?;
    for shift in Shift::ALL {
        stmt.execute(rusqlite::params![shift.id(), shift.label()])?;
    }
    Ok(Shift::ALL.len())
}

/// Gets the schema version recorded in the database.
///
/// # Errors
///
/// Returns an error if the query fails for reasons other than a missing
/// metadata table or row (which both mean version 0).
pub fn get_schema_version(conn: &Connection) -> Result<i32> {
    match conn.query_row(SELECT_SCHEMA_VERSION, [], |row| {
        let value: String = row.get(0)?;
        value.parse::<i32>().map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
        })
    }) {
        Ok(version) => Ok(version),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(0),
        Err(e) => {
            // "no such table" surfaces as a generic error code
            if let rusqlite::Error::SqliteFailure(ref sqlite_err, _) = e {
                if sqlite_err.code == rusqlite::ErrorCode::Unknown {
                    return Ok(0);
                }
            }
            Err(e.into())
        }
    }
}

/// Initializes a fresh database or verifies that an existing one matches
/// [`CURRENT_SCHEMA_VERSION`].
///
/// # Errors
///
/// Returns [`Error::UnsupportedSchemaVersion`] for any other stored version,
/// or a database error if initialization fails.
pub fn check_schema_compatibility(conn: &Connection) -> Result<()> {
    let version = get_schema_version(conn)?;

    if version == 0 {
        initialize_schema(conn)?;
    } else if version != CURRENT_SCHEMA_VERSION {
        return Err(Error::UnsupportedSchemaVersion {
            expected: CURRENT_SCHEMA_VERSION,
            found: version,
        });
    }

    Ok(())
}
