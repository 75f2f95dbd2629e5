//! Integration tests for global options, configuration layering and
//! shell completions.

mod common;

use common::{days_out, TestEnv};
use predicates::prelude::*;

#[test]
fn test_quiet_suppresses_notices() {
    let env = TestEnv::new();

    env.command()
        .args(["--quiet", "clients"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_global_option_after_subcommand() {
    let env = TestEnv::new();

    env.command_bare()
        .arg("shifts")
        .arg("--data-dir")
        .arg(&env.data_dir)
        .assert()
        .success();
    assert!(env.data_dir.join("coworking.db").exists());
}

#[test]
fn test_config_file_changes_notice_rule() {
    let env = TestEnv::new();
    env.register_client("Ana", "Ruiz");
    env.register_room("Sala A", 12);
    let config = env.temp_path.join("strict.yaml");
    std::fs::write(&config, "booking:\n  min_advance_days: 10\n").unwrap();

    env.command()
        .arg("--config")
        .arg(&config)
        .args(["reserve", "--client", "1", "--room", "1", "--date"])
        .arg(days_out(5))
        .args(["--shift", "night", "--event", "Taller"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("10 days of notice"));
}

#[test]
fn test_environment_overrides_config_file() {
    let env = TestEnv::new();
    env.register_client("Ana", "Ruiz");
    env.register_room("Sala A", 12);
    let config = env.temp_path.join("strict.yaml");
    std::fs::write(&config, "booking:\n  min_advance_days: 10\n").unwrap();

    env.command()
        .env("COWORK_MIN_ADVANCE_DAYS", "2")
        .arg("--config")
        .arg(&config)
        .args(["reserve", "--client", "1", "--room", "1", "--date"])
        .arg(days_out(5))
        .args(["--shift", "night", "--event", "Taller"])
        .assert()
        .success()
        .stdout("1\n");
}

#[test]
fn test_user_config_in_data_dir_sets_export_directory() {
    let env = TestEnv::new();
    env.seed_booking(5);
    let exports = env.temp_path.join("from-config");
    std::fs::write(
        env.data_dir.join("config.yaml"),
        format!("export:\n  directory: {}\n", exports.display()),
    )
    .unwrap();

    env.command()
        .arg("list")
        .args(common::range_args(0, 10))
        .args(["--export", "json"])
        .assert()
        .success();
    assert!(exports.join("ReservacionesJSON.json").exists());
}

#[test]
fn test_verbose_list_reports_summary() {
    let env = TestEnv::new();
    env.seed_booking(5);

    env.command()
        .args(["--verbose", "list"])
        .args(common::range_args(0, 10))
        .assert()
        .success()
        .stderr(predicate::str::contains("1 reservation(s) across 11 day(s) from"));

    env.command()
        .arg("list")
        .args(common::range_args(0, 10))
        .assert()
        .success()
        .stderr(predicate::str::contains("reservation(s) across").not());
}

#[test]
fn test_completions_bash() {
    let env = TestEnv::new();

    env.command_bare()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("_cowork"))
        .stderr(predicate::str::contains("eval"));
}

#[test]
fn test_version_flag() {
    let env = TestEnv::new();

    env.command_bare()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("cowork "));
}
