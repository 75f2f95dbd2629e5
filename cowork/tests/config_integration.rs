//! Integration tests for the layered configuration.
//!
//! Tests that touch `COWORK_*` variables are marked `#[serial]`: the
//! environment is process-global.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::Weekday;
use serial_test::serial;
use tempfile::TempDir;

use cowork::config::{Config, ConfigBuilder, ExportConfig};
use cowork::error::Error;

const ALL_VARS: [&str; 7] = [
    "COWORK_MIN_ADVANCE_DAYS",
    "COWORK_MIN_CANCEL_DAYS",
    "COWORK_CLOSED_WEEKDAY",
    "COWORK_MAX_EMPTY_INPUTS",
    "COWORK_EXPORT_DIR",
    "COWORK_MAXIMUM_LOCK_WAIT_SECONDS",
    "COWORK_DISABLE_AUTOINIT",
];

/// Sets an environment variable and restores the old value on drop.
struct EnvGuard {
    key: &'static str,
    old_value: Option<String>,
}

impl EnvGuard {
    fn set(key: &'static str, value: &str) -> Self {
        let old_value = env::var(key).ok();
        env::set_var(key, value);
        Self { key, old_value }
    }

    fn remove(key: &'static str) -> Self {
        let old_value = env::var(key).ok();
        env::remove_var(key);
        Self { key, old_value }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.old_value {
            Some(value) => env::set_var(self.key, value),
            None => env::remove_var(self.key),
        }
    }
}

fn clean_env() -> Vec<EnvGuard> {
    ALL_VARS.into_iter().map(EnvGuard::remove).collect()
}

fn write_config(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
#[serial]
fn test_user_config_is_read_from_data_dir() {
    let _env = clean_env();
    let dir = TempDir::new().unwrap();
    write_config(
        dir.path(),
        "config.yaml",
        "booking:\n  min_advance_days: 5\n  closed_weekday: saturday\nprompts:\n  max_empty_inputs: 4\n",
    );

    let config = ConfigBuilder::new().with_data_dir(dir.path()).build().unwrap();
    let policy = config.booking_policy();

    assert_eq!(policy.min_advance_days(), 5);
    assert_eq!(policy.min_cancel_days(), 2);
    assert_eq!(policy.closed_weekday(), Some(Weekday::Sat));
    assert_eq!(config.max_empty_inputs(), 4);
}

#[test]
#[serial]
fn test_env_overrides_files() {
    let _env = clean_env();
    let dir = TempDir::new().unwrap();
    write_config(dir.path(), "config.yaml", "booking:\n  min_cancel_days: 3\n");
    let explicit = write_config(dir.path(), "other.yaml", "booking:\n  min_cancel_days: 4\n");

    let from_files = ConfigBuilder::new()
        .with_data_dir(dir.path())
        .with_config_file(&explicit)
        .build()
        .unwrap();
    assert_eq!(from_files.booking_policy().min_cancel_days(), 4);

    let _cancel = EnvGuard::set("COWORK_MIN_CANCEL_DAYS", "6");
    let _closed = EnvGuard::set("COWORK_CLOSED_WEEKDAY", "none");
    let config = ConfigBuilder::new()
        .with_data_dir(dir.path())
        .with_config_file(&explicit)
        .build()
        .unwrap();
    assert_eq!(config.booking_policy().min_cancel_days(), 6);
    assert_eq!(config.booking_policy().closed_weekday(), None);
}

#[test]
#[serial]
fn test_malformed_env_value_is_rejected() {
    let _env = clean_env();
    let _bad = EnvGuard::set("COWORK_MIN_ADVANCE_DAYS", "soon");

    let err = ConfigBuilder::new().skip_files().build().unwrap_err();
    assert!(err.is_validation());
}

#[test]
#[serial]
fn test_export_settings_follow_config() {
    let _env = clean_env();
    let dir = TempDir::new().unwrap();
    write_config(
        dir.path(),
        "config.yaml",
        "export:\n  directory: reports\n  json_file: listado.json\n",
    );

    let config = ConfigBuilder::new().with_data_dir(dir.path()).build().unwrap();
    let settings = config.export_settings();
    assert_eq!(settings.directory, PathBuf::from("reports"));
    assert_eq!(settings.json_file, "listado.json");
    assert_eq!(settings.table_file, "Reservaciones.csv");

    let _dir = EnvGuard::set("COWORK_EXPORT_DIR", "/tmp/cowork-exports");
    let config = ConfigBuilder::new().with_data_dir(dir.path()).build().unwrap();
    assert_eq!(
        config.export_settings().directory,
        PathBuf::from("/tmp/cowork-exports")
    );
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let result = ConfigBuilder::new()
        .with_config_file(dir.path().join("absent.yaml"))
        .skip_env()
        .build();
    assert!(result.is_err());
}

#[test]
fn test_unknown_keys_are_rejected() {
    let dir = TempDir::new().unwrap();
    write_config(dir.path(), "config.yaml", "bookings:\n  min_advance_days: 1\n");

    let result = ConfigBuilder::new()
        .with_data_dir(dir.path())
        .skip_env()
        .build();
    assert!(result.is_err());
}

#[test]
fn test_path_separators_in_export_file_rejected() {
    let err = ConfigBuilder::new()
        .skip_files()
        .skip_env()
        .with_config(Config {
            export: Some(ExportConfig {
                table_file: Some("../escape.csv".into()),
                ..Default::default()
            }),
            ..Default::default()
        })
        .build()
        .unwrap_err();
    assert!(matches!(err, Error::Validation { .. }));
}

#[test]
fn test_commented_file_means_defaults() {
    let dir = TempDir::new().unwrap();
    write_config(dir.path(), "config.yaml", "# nothing set yet\n");

    let config = ConfigBuilder::new()
        .with_data_dir(dir.path())
        .skip_env()
        .build()
        .unwrap();
    assert_eq!(config, Config::with_defaults());
}
