//! Property-based tests for planning.
//!
//! Plans are built against a real store, so case counts stay low.

use chrono::{Days, NaiveDate};
use proptest::prelude::*;

use crate::database::test_util::{create_test_database, seed_client_and_room};
use crate::error::Error;
use crate::operations::{
    CreateOptions, CreatePlan, PlanExecutor, RegisterClientOptions, RegisterPlan,
    RegisterRoomOptions,
};
use crate::schedule::policy::BookingPolicy;
use crate::schedule::Shift;

fn shift_strategy() -> impl Strategy<Value = Shift> {
    prop::sample::select(Shift::ALL.to_vec())
}

fn today_strategy() -> impl Strategy<Value = NaiveDate> {
    (0u64..3650).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2025, 1, 1)
            .and_then(|d| d.checked_add_days(Days::new(offset)))
            .unwrap_or_default()
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    // Anything under two days of notice is refused, whatever the weekday
    #[test]
    fn short_notice_never_plans(today in today_strategy(), ahead in 0u64..2, shift in shift_strategy()) {
        let db = create_test_database();
        let (client, room) = seed_client_and_room(&db);
        let date = today.checked_add_days(Days::new(ahead)).unwrap();

        let options = CreateOptions::new(client, room, date, shift, "Taller")
            .with_today(today)
            .with_accept_substitute(true);
        let result = CreatePlan::new(options, BookingPolicy::default()).build_plan(db.connection());
        let refused = matches!(result, Err(Error::InsufficientNotice { .. }));
        prop_assert!(refused);
    }

    // A second booking of the same slot is always refused
    #[test]
    fn slot_books_once(today in today_strategy(), ahead in 2u64..60, shift in shift_strategy()) {
        let db = create_test_database();
        let (client, room) = seed_client_and_room(&db);
        let date = today.checked_add_days(Days::new(ahead)).unwrap();
        let options = CreateOptions::new(client, room, date, shift, "Taller")
            .with_today(today)
            .with_accept_substitute(true);
        let planner = CreatePlan::new(options, BookingPolicy::default());

        let plan = planner.build_plan(db.connection()).unwrap();
        PlanExecutor::new(db.connection()).execute(&plan).unwrap();

        let again = planner.build_plan(db.connection());
        let refused = matches!(again, Err(Error::SlotOccupied { .. }));
        prop_assert!(refused);
    }

    // Letter-only names always plan; any digit is refused
    #[test]
    fn client_names_letters_only(first in "[A-Za-z]{1,12}", last in "[A-Za-z]{1,12}", digit in 0u8..10) {
        let ok = RegisterPlan::client(RegisterClientOptions::new(first.clone(), last.clone())).build_plan();
        prop_assert!(ok.is_ok());

        let bad = RegisterPlan::client(RegisterClientOptions::new(format!("{first}{digit}"), last)).build_plan();
        prop_assert!(bad.is_err());
    }

    // Capacity must be non-negative
    #[test]
    fn room_capacity_sign(capacity in -1000i64..1000) {
        let result = RegisterPlan::room(RegisterRoomOptions::new("Sala", capacity)).build_plan();
        prop_assert_eq!(result.is_ok(), capacity >= 0);
    }
}
