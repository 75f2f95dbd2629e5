#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # cowork
//!
//! A library for booking rooms in a shared workspace.
//!
//! Clients book a room for one shift of one day. The library keeps clients,
//! rooms and reservations in a SQLite store, enforces the booking rules
//! (notice periods, a closed weekday, one booking per slot) and exports
//! reservation listings as a CSV table, an xlsx workbook or JSON.
//!
//! ## Core Types
//!
//! - [`Shift`], [`Slot`] and [`DateRange`]: when a room is booked
//! - [`BookingPolicy`]: notice and closed-day rules
//! - [`NewClient`], [`NewRoom`], [`NewReservation`]: validated input records
//! - [`Store`] and [`Database`]: persistence
//! - [`operations`]: planned, dry-runnable changes and range queries
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use cowork::{DateRange, Shift};
//!
//! let shift: Shift = "vespertino".parse().unwrap();
//! assert_eq!(shift, Shift::Afternoon);
//!
//! let start = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
//! let end = NaiveDate::from_ymd_opt(2030, 1, 31).unwrap();
//! let january = DateRange::new(start, end).unwrap();
//! assert_eq!(january.days(), 31);
//! ```

#[macro_use]
mod macros;

pub mod config;
pub mod database;
pub mod error;
pub mod export;
pub mod logging;
pub mod operations;
pub mod registry;
pub mod reservation;
pub mod schedule;

pub use config::{Config, ConfigBuilder};
pub use database::{Database, DatabaseConfig, Store};
pub use error::{Error, Result};
pub use logging::{init_logger, install_logger, LogLevel, Logger};
pub use operations::{ExecutionResult, OperationPlan, PlanAction, PlanExecutor};
pub use registry::{Client, ClientId, NewClient, NewRoom, Room, RoomId};
pub use reservation::{
    EventName, NewReservation, Reservation, ReservationId, ReservationStatus, ReservationView,
};
pub use schedule::policy::BookingPolicy;
pub use schedule::{DateRange, Shift, Slot};
