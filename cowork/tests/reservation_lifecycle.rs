//! End-to-end reservation lifecycle tests.

mod common;

use common::{book, days_out, open_test_database, register_client, register_room, today};
use cowork::operations::{
    CancelOptions, CancelPlan, CreateOptions, CreatePlan, PlanExecutor, RenameOptions, RenamePlan,
    ReservationQuery,
};
use cowork::{BookingPolicy, Database, DateRange, Error, ReservationStatus, Shift};

#[test]
fn test_book_cancel_and_rebook_slot() {
    let (_dir, db) = open_test_database();
    let client = register_client(&db, "Ana", "Ruiz");
    let room = register_room(&db, "Sala A", 4);
    let date = days_out(3);

    let first = book(&db, client, room, date, Shift::Morning, "Taller").unwrap();
    let id = first.reservation_id().unwrap();
    let stored = Database::get_reservation(db.connection(), id)
        .unwrap()
        .unwrap();
    assert_eq!(stored.status, ReservationStatus::Active);
    assert_eq!(stored.date, Some(date));

    // Same room, date and shift is taken
    let err = book(&db, client, room, date, Shift::Morning, "Otro").unwrap_err();
    assert!(matches!(err, Error::SlotOccupied { .. }));

    // Another shift of the same day is free
    book(&db, client, room, date, Shift::Night, "Cena").unwrap();

    let options = CancelOptions::new(DateRange::single(date), id)
        .with_confirmed(true)
        .with_today(today());
    let plan = CancelPlan::new(options, BookingPolicy::default())
        .build_plan(db.connection())
        .unwrap();
    PlanExecutor::new(db.connection()).execute(&plan).unwrap();

    let cancelled = Database::get_reservation(db.connection(), id)
        .unwrap()
        .unwrap();
    assert_eq!(cancelled.status, ReservationStatus::Cancelled);
    assert_eq!(cancelled.date, None);
    assert_eq!(cancelled.shift, None);

    let again = book(&db, client, room, date, Shift::Morning, "Taller").unwrap();
    assert_ne!(again.reservation_id(), Some(id));
}

#[test]
fn test_notice_and_closed_weekday_rules() {
    let (_dir, db) = open_test_database();
    let client = register_client(&db, "Luis", "Garza");
    let room = register_room(&db, "Sala Grande", 20);

    let err = book(&db, client, room, days_out(1), Shift::Afternoon, "Junta").unwrap_err();
    assert!(matches!(err, Error::InsufficientNotice { required_days: 2, .. }));

    // 2030-01-06 is a Sunday
    let sunday = days_out(5);
    let err = book(&db, client, room, sunday, Shift::Afternoon, "Junta").unwrap_err();
    match err {
        Error::ClosedWeekday { date, substitute } => {
            assert_eq!(date, sunday);
            assert_eq!(substitute, days_out(6));
        }
        other => panic!("unexpected error: {other}"),
    }

    let options = CreateOptions::new(client, room, sunday, Shift::Afternoon, "Junta")
        .with_accept_substitute(true)
        .with_today(today());
    let plan = CreatePlan::new(options, BookingPolicy::default())
        .build_plan(db.connection())
        .unwrap();
    let id = PlanExecutor::new(db.connection())
        .execute(&plan)
        .unwrap()
        .reservation_id()
        .unwrap();
    let stored = Database::get_reservation(db.connection(), id)
        .unwrap()
        .unwrap();
    assert_eq!(stored.date, Some(days_out(6)));
}

#[test]
fn test_rename_then_query() {
    let (_dir, db) = open_test_database();
    let client = register_client(&db, "Ana", "Ruiz");
    let room = register_room(&db, "Sala A", 4);
    let date = days_out(3);
    let id = book(&db, client, room, date, Shift::Morning, "Taller")
        .unwrap()
        .reservation_id()
        .unwrap();

    let range = DateRange::new(today(), days_out(10)).unwrap();
    let plan = RenamePlan::new(RenameOptions::new(range, id, "Taller Avanzado"))
        .build_plan(db.connection())
        .unwrap();
    PlanExecutor::new(db.connection()).execute(&plan).unwrap();

    let rows = ReservationQuery::new(range).run(db.connection()).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].event_name, "Taller Avanzado");
    assert_eq!(rows[0].client_name, "Ana Ruiz");
    assert_eq!(rows[0].room_name, "Sala A");

    // Outside the selected range the reservation is not a candidate
    let later = DateRange::new(days_out(20), days_out(30)).unwrap();
    let err = RenamePlan::new(RenameOptions::new(later, id, "Otro"))
        .build_plan(db.connection())
        .unwrap_err();
    assert!(matches!(err, Error::NotInRange { .. }));
}

#[test]
fn test_unconfirmed_or_late_cancellation_keeps_reservation() {
    let (_dir, db) = open_test_database();
    let client = register_client(&db, "Ana", "Ruiz");
    let room = register_room(&db, "Sala A", 4);
    let date = days_out(3);
    let id = book(&db, client, room, date, Shift::Morning, "Taller")
        .unwrap()
        .reservation_id()
        .unwrap();

    let unconfirmed = CancelOptions::new(DateRange::single(date), id).with_today(today());
    let err = CancelPlan::new(unconfirmed, BookingPolicy::default())
        .build_plan(db.connection())
        .unwrap_err();
    assert!(matches!(err, Error::NotConfirmed));

    // One day before the event is too late
    let late = CancelOptions::new(DateRange::single(date), id)
        .with_confirmed(true)
        .with_today(days_out(2));
    let err = CancelPlan::new(late, BookingPolicy::default())
        .build_plan(db.connection())
        .unwrap_err();
    assert!(matches!(err, Error::CancellationTooLate { .. }));

    let stored = Database::get_reservation(db.connection(), id)
        .unwrap()
        .unwrap();
    assert!(stored.is_active());
}

#[test]
fn test_dry_run_books_nothing() {
    let (_dir, db) = open_test_database();
    let client = register_client(&db, "Ana", "Ruiz");
    let room = register_room(&db, "Sala A", 4);

    let options = CreateOptions::new(client, room, days_out(3), Shift::Morning, "Taller")
        .with_today(today());
    let plan = CreatePlan::new(options, BookingPolicy::default())
        .build_plan(db.connection())
        .unwrap();
    let result = PlanExecutor::new(db.connection())
        .dry_run()
        .execute(&plan)
        .unwrap();

    assert!(result.dry_run);
    assert_eq!(result.reservation_id(), None);
    assert_eq!(Database::count_reservations(db.connection()).unwrap(), 0);
}
