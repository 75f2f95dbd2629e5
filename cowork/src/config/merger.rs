//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::{BookingConfig, Config, ExportConfig, PromptConfig};

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use cowork::config::{Config, ConfigMerger};
///
/// let low = Config { disable_autoinit: Some(false), ..Default::default() };
/// let high = Config { disable_autoinit: Some(true), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.disable_autoinit, Some(true));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merges sources given from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merges `source` into `target`; set values in `source` win.
    ///
    /// Nested sections merge field by field.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.maximum_lock_wait_seconds.is_some() {
            target.maximum_lock_wait_seconds = source.maximum_lock_wait_seconds;
        }

        if source.disable_autoinit.is_some() {
            target.disable_autoinit = source.disable_autoinit;
        }

        if let Some(ref source_booking) = source.booking {
            target.booking = Some(match &target.booking {
                Some(target_booking) => Self::merge_booking(target_booking, source_booking),
                None => source_booking.clone(),
            });
        }

        if let Some(ref source_prompts) = source.prompts {
            target.prompts = Some(match &target.prompts {
                Some(target_prompts) => PromptConfig {
                    max_empty_inputs: source_prompts
                        .max_empty_inputs
                        .or(target_prompts.max_empty_inputs),
                },
                None => source_prompts.clone(),
            });
        }

        if let Some(ref source_export) = source.export {
            target.export = Some(match &target.export {
                Some(target_export) => Self::merge_export(target_export, source_export),
                None => source_export.clone(),
            });
        }
    }

    fn merge_booking(target: &BookingConfig, source: &BookingConfig) -> BookingConfig {
        BookingConfig {
            min_advance_days: source.min_advance_days.or(target.min_advance_days),
            min_cancel_days: source.min_cancel_days.or(target.min_cancel_days),
            closed_weekday: source.closed_weekday.or(target.closed_weekday),
        }
    }

    fn merge_export(target: &ExportConfig, source: &ExportConfig) -> ExportConfig {
        ExportConfig {
            directory: source.directory.clone().or_else(|| target.directory.clone()),
            table_file: source.table_file.clone().or_else(|| target.table_file.clone()),
            spreadsheet_file: source
                .spreadsheet_file
                .clone()
                .or_else(|| target.spreadsheet_file.clone()),
            json_file: source.json_file.clone().or_else(|| target.json_file.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::ClosedWeekday;
    use chrono::Weekday;
    use std::path::PathBuf;

    #[test]
    fn test_merge_empty_sources() {
        assert_eq!(ConfigMerger::merge(vec![]), Config::default());
    }

    #[test]
    fn test_nested_fields_merge_individually() {
        let mut target = Config::with_defaults();
        let source = Config {
            booking: Some(BookingConfig {
                min_cancel_days: Some(5),
                ..Default::default()
            }),
            export: Some(ExportConfig {
                directory: Some(PathBuf::from("/srv/reports")),
                ..Default::default()
            }),
            ..Default::default()
        };

        ConfigMerger::merge_into(&mut target, &source);

        let policy = target.booking_policy();
        assert_eq!(policy.min_cancel_days(), 5);
        assert_eq!(policy.min_advance_days(), 2);
        assert_eq!(policy.closed_weekday(), Some(Weekday::Sun));

        let export = target.export_settings();
        assert_eq!(export.directory, PathBuf::from("/srv/reports"));
        assert_eq!(export.json_file, "ReservacionesJSON.json");
    }

    #[test]
    fn test_explicit_none_weekday_overrides_default() {
        let mut target = Config::with_defaults();
        let source = Config {
            booking: Some(BookingConfig {
                closed_weekday: Some(ClosedWeekday::new(None)),
                ..Default::default()
            }),
            ..Default::default()
        };
        ConfigMerger::merge_into(&mut target, &source);
        assert_eq!(target.booking_policy().closed_weekday(), None);
    }

    #[test]
    fn test_later_sources_win() {
        let source = |seconds| ConfigSource {
            path: PathBuf::from("config.yaml"),
            precedence: 1,
            config: Config {
                maximum_lock_wait_seconds: Some(seconds),
                prompts: Some(PromptConfig {
                    max_empty_inputs: Some(u32::try_from(seconds).unwrap()),
                }),
                ..Default::default()
            },
        };

        let merged = ConfigMerger::merge(vec![source(3), source(8)]);
        assert_eq!(merged.maximum_lock_wait_seconds, Some(8));
        assert_eq!(merged.max_empty_inputs(), 8);
    }
}
