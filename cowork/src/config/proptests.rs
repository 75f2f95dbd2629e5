//! Property-based tests for configuration merging and validation.

use super::merger::ConfigMerger;
use super::schema::{BookingConfig, ClosedWeekday, Config, PromptConfig};
use super::validator::{ConfigValidator, MAX_NOTICE_DAYS};
use chrono::Weekday;
use proptest::prelude::*;

fn weekday_strategy() -> impl Strategy<Value = Option<ClosedWeekday>> {
    prop::option::of(
        prop::option::of(prop::sample::select(vec![
            Weekday::Mon,
            Weekday::Wed,
            Weekday::Sat,
            Weekday::Sun,
        ]))
        .prop_map(ClosedWeekday::new),
    )
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of(0i64..=MAX_NOTICE_DAYS),
        prop::option::of(0i64..=MAX_NOTICE_DAYS),
        weekday_strategy(),
        prop::option::of(1u32..20),
        prop::option::of(1u64..60),
        prop::option::of(any::<bool>()),
    )
        .prop_map(|(advance, cancel, closed, empties, wait, autoinit)| Config {
            booking: Some(BookingConfig {
                min_advance_days: advance,
                min_cancel_days: cancel,
                closed_weekday: closed,
            }),
            prompts: Some(PromptConfig {
                max_empty_inputs: empties,
            }),
            maximum_lock_wait_seconds: wait,
            disable_autoinit: autoinit,
            ..Default::default()
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        max_shrink_iters: 2000,
        .. ProptestConfig::default()
    })]

    // Set values in the higher source always win; unset ones fall through
    #[test]
    fn config_merge_higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let mut merged = low.clone();
        ConfigMerger::merge_into(&mut merged, &high);

        let low_b = low.booking.clone().unwrap_or_default();
        let high_b = high.booking.clone().unwrap_or_default();
        let merged_b = merged.booking.clone().unwrap_or_default();
        prop_assert_eq!(merged_b.min_advance_days, high_b.min_advance_days.or(low_b.min_advance_days));
        prop_assert_eq!(merged_b.min_cancel_days, high_b.min_cancel_days.or(low_b.min_cancel_days));
        prop_assert_eq!(merged_b.closed_weekday, high_b.closed_weekday.or(low_b.closed_weekday));
        prop_assert_eq!(
            merged.maximum_lock_wait_seconds,
            high.maximum_lock_wait_seconds.or(low.maximum_lock_wait_seconds)
        );
        prop_assert_eq!(merged.disable_autoinit, high.disable_autoinit.or(low.disable_autoinit));
    }

    // Merging an empty config changes nothing
    #[test]
    fn config_merge_empty_is_identity(config in config_strategy()) {
        let mut merged = config.clone();
        ConfigMerger::merge_into(&mut merged, &Config::default());
        prop_assert_eq!(merged, config);
    }

    // Generated in-range configs validate, and survive a YAML round trip
    #[test]
    fn valid_configs_validate_and_serialize(config in config_strategy()) {
        prop_assert!(ConfigValidator::validate(&config).is_ok());
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        prop_assert_eq!(parsed, config);
    }

    // Out-of-range notice periods never validate
    #[test]
    fn out_of_range_notice_rejected(days in prop_oneof![-1000i64..0, (MAX_NOTICE_DAYS + 1)..10_000]) {
        let config = Config {
            booking: Some(BookingConfig {
                min_cancel_days: Some(days),
                ..Default::default()
            }),
            ..Default::default()
        };
        prop_assert!(ConfigValidator::validate(&config).is_err());
    }
}
