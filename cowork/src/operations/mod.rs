//! Reservation operations using the plan-execute pattern.
//!
//! Every operation that changes the store is split in two phases:
//! 1. **Planning**: validates the request against the store and the booking
//!    rules, and builds an [`OperationPlan`]. Nothing is written.
//! 2. **Execution**: a [`PlanExecutor`] applies the plan, or only reports it
//!    in dry-run mode.
//!
//! Reads go through [`ReservationQuery`].
//!
//! # Examples
//!
//! ```no_run
//! use chrono::NaiveDate;
//! use cowork::operations::{CreateOptions, CreatePlan, PlanExecutor};
//! use cowork::{BookingPolicy, ClientId, Database, DatabaseConfig, RoomId, Shift};
//!
//! let db = Database::open(DatabaseConfig::new("/tmp/coworking.db")).unwrap();
//! let date = NaiveDate::from_ymd_opt(2030, 1, 7).unwrap();
//!
//! let options = CreateOptions::new(ClientId::new(1), RoomId::new(1), date, Shift::Morning, "Taller");
//! let plan = CreatePlan::new(options, BookingPolicy::default())
//!     .build_plan(db.connection())
//!     .unwrap();
//!
//! let result = PlanExecutor::new(db.connection()).execute(&plan).unwrap();
//! println!("created {:?}", result.reservation_id());
//! ```

use chrono::NaiveDate;

pub mod cancel;
pub mod create;
pub mod executor;
pub mod init;
pub mod plan;
pub mod query;
pub mod register;
pub mod rename;

#[cfg(test)]
mod proptests;

pub use cancel::{CancelOptions, CancelPlan};
pub use create::{CreateOptions, CreatePlan};
pub use executor::{CreatedRecord, ExecutionResult, PlanExecutor};
pub use init::{init_database, InitOptions, InitResult};
pub use plan::{OperationPlan, PlanAction};
pub use query::ReservationQuery;
pub use register::{RegisterClientOptions, RegisterPlan, RegisterRoomOptions};
pub use rename::{RenameOptions, RenamePlan};

/// The local calendar date, read once when an operation's options are built.
pub(crate) fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
