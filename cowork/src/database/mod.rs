//! Database layer for clients, rooms, shifts and reservations.
//!
//! This module provides a SQLite-based store: connection management, schema
//! versioning, the single-statement store operations, and the scoped
//! [`Store`] handle used by the rest of the program.
//!
//! # Examples
//!
//! ```
//! use cowork::database::{Database, DatabaseConfig, Store};
//! use cowork::NewRoom;
//!
//! let dir = tempfile::tempdir().unwrap();
//! let store = Store::new(DatabaseConfig::in_data_dir(dir.path()));
//!
//! store
//!     .with_database(|db| {
//!         Database::insert_room(db.connection(), &NewRoom::new("Sala A", 4)?)?;
//!         Ok(())
//!     })
//!     .unwrap();
//!
//! let rooms = store
//!     .with_database(|db| Database::list_rooms(db.connection()))
//!     .unwrap();
//! assert_eq!(rooms[0].name, "Sala A");
//! ```

mod config;
mod connection;
pub mod migrations;
mod operations;
mod schema;
mod store;

#[cfg(test)]
pub(crate) mod test_util;

pub use config::{
    default_data_dir, resolve_data_dir, resolve_database_path, DatabaseConfig, DATABASE_FILE_NAME,
    DATA_DIR_ENV,
};
pub use connection::Database;
pub use store::Store;

pub use migrations::{check_schema_compatibility, get_schema_version, initialize_schema};
pub use schema::CURRENT_SCHEMA_VERSION;
