//! Property-based tests for dates, shifts, ranges and booking rules.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use proptest::prelude::*;

use super::policy::{days_between, BookingPolicy, DateDecision};
use super::{format_date, parse_date, DateRange, Shift};
use crate::error::Error;
use crate::reservation::ReservationId;

fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (1900i32..=2199, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default())
}

fn weekday_strategy() -> impl Strategy<Value = Option<Weekday>> {
    prop::option::of(prop::sample::select(vec![
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ]))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        max_shrink_iters: 2000,
        .. ProptestConfig::default()
    })]

    // Display format parses back to the same date
    #[test]
    fn display_format_parses_back(date in date_strategy()) {
        prop_assert_eq!(parse_date(&format_date(date)).unwrap(), date);
    }

    // ISO text never parses as an entry date
    #[test]
    fn iso_text_is_not_an_entry_date(date in date_strategy()) {
        let iso = date.format("%Y-%m-%d").to_string();
        prop_assert!(parse_date(&iso).is_err());
    }

    // Ranges accept ordered bounds only and contain exactly their days
    #[test]
    fn range_bounds(a in date_strategy(), b in date_strategy(), day in date_strategy()) {
        match DateRange::new(a, b) {
            Ok(range) => {
                prop_assert!(a <= b);
                prop_assert_eq!(range.contains(day), a <= day && day <= b);
                prop_assert_eq!(range.days(), days_between(a, b) + 1);
            }
            Err(_) => prop_assert!(a > b),
        }
    }

    // Shifts are found again by label and by id
    #[test]
    fn shift_lookup(index in 0usize..3) {
        let shift = Shift::ALL[index];
        prop_assert_eq!(shift.label().parse::<Shift>().unwrap(), shift);
        prop_assert_eq!(shift.id().to_string().parse::<Shift>().unwrap(), shift);
        prop_assert_eq!(Shift::from_id(shift.id()), Some(shift));
    }

    // Event dates closer than the notice period are always refused
    #[test]
    fn notice_is_enforced(
        today in date_strategy(),
        ahead in -30i64..60,
        min_advance in 0i64..10,
        closed in weekday_strategy(),
    ) {
        let policy = BookingPolicy::new(min_advance, 2, closed);
        let date = today + chrono::Duration::days(ahead);

        match policy.check_event_date(date, today) {
            Err(Error::InsufficientNotice { required_days, .. }) => {
                prop_assert!(ahead < min_advance);
                prop_assert_eq!(required_days, min_advance);
            }
            Ok(DateDecision::Accepted(accepted)) => {
                prop_assert!(ahead >= min_advance);
                prop_assert_eq!(accepted, date);
                prop_assert_ne!(Some(date.weekday()), closed);
            }
            Ok(DateDecision::Substitute { requested, proposed }) => {
                prop_assert!(ahead >= min_advance);
                prop_assert_eq!(Some(requested.weekday()), closed);
                prop_assert_eq!(Some(proposed), requested.checked_add_days(Days::new(1)));
            }
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }

    // A closed-day date is only booked when the substitute is accepted
    #[test]
    fn closed_day_needs_acceptance(today in date_strategy(), ahead in 2i64..60) {
        let date = today + chrono::Duration::days(ahead);
        let policy = BookingPolicy::new(2, 2, Some(date.weekday()));

        let refused = matches!(
            policy.resolve_event_date(date, today, false),
            Err(Error::ClosedWeekday { .. })
        );
        prop_assert!(refused);
        prop_assert_eq!(
            policy.resolve_event_date(date, today, true).unwrap(),
            date.succ_opt().unwrap()
        );
    }

    // Cancellation notice mirrors booking notice
    #[test]
    fn cancellation_notice(today in date_strategy(), ahead in -10i64..30, min_cancel in 0i64..10) {
        let policy = BookingPolicy::new(2, min_cancel, None);
        let date = today + chrono::Duration::days(ahead);
        let result = policy.check_cancellation(ReservationId::new(1), date, today);
        prop_assert_eq!(result.is_ok(), ahead >= min_cancel);
    }
}
