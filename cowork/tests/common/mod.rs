//! Common test utilities for integration tests.

use chrono::{Days, NaiveDate};
use tempfile::TempDir;

use cowork::database::{Database, DatabaseConfig};
use cowork::operations::{
    CreateOptions, CreatePlan, ExecutionResult, PlanExecutor, RegisterClientOptions, RegisterPlan,
    RegisterRoomOptions,
};
use cowork::{BookingPolicy, ClientId, RoomId, Shift};

/// A fixed "today" so the notice rules do not depend on the clock.
///
/// 2030-01-01 is a Tuesday.
#[allow(dead_code)]
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2030, 1, 1).unwrap()
}

/// The date `days` after [`today`].
#[allow(dead_code)]
pub fn days_out(days: u64) -> NaiveDate {
    today().checked_add_days(Days::new(days)).unwrap()
}

/// Opens a fresh store in a temporary data directory.
///
/// The directory is removed when the returned `TempDir` is dropped, so keep
/// it alive for the duration of the test.
#[allow(dead_code)]
pub fn open_test_database() -> (TempDir, Database) {
    let dir = tempfile::tempdir().unwrap();
    let db = Database::open(DatabaseConfig::in_data_dir(dir.path())).unwrap();
    (dir, db)
}

/// Registers a client through the planned operation path.
#[allow(dead_code)]
pub fn register_client(db: &Database, first: &str, last: &str) -> ClientId {
    let plan = RegisterPlan::client(RegisterClientOptions::new(first, last))
        .build_plan()
        .unwrap();
    PlanExecutor::new(db.connection())
        .execute(&plan)
        .unwrap()
        .client_id()
        .unwrap()
}

/// Registers a room through the planned operation path.
#[allow(dead_code)]
pub fn register_room(db: &Database, name: &str, capacity: i64) -> RoomId {
    let plan = RegisterPlan::room(RegisterRoomOptions::new(name, capacity))
        .build_plan()
        .unwrap();
    PlanExecutor::new(db.connection())
        .execute(&plan)
        .unwrap()
        .room_id()
        .unwrap()
}

/// Books a slot under the default policy, relative to [`today`].
#[allow(dead_code)]
pub fn book(
    db: &Database,
    client: ClientId,
    room: RoomId,
    date: NaiveDate,
    shift: Shift,
    event: &str,
) -> cowork::Result<ExecutionResult> {
    let options = CreateOptions::new(client, room, date, shift, event).with_today(today());
    let plan = CreatePlan::new(options, BookingPolicy::default()).build_plan(db.connection())?;
    PlanExecutor::new(db.connection()).execute(&plan)
}
