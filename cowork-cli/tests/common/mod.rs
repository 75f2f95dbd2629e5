//! Common test utilities for CLI integration tests.
//!
//! Every command runs against its own temporary data directory with the
//! `COWORK_*` environment cleared, and with no closed weekday so that dates
//! relative to the real clock never land on a refused day.

use assert_cmd::Command;
use chrono::{Days, Local, NaiveDate};
use std::path::PathBuf;
use tempfile::TempDir;

const COWORK_VARS: [&str; 12] = [
    "COWORK_DATA_DIR",
    "COWORK_CONFIG",
    "COWORK_BUSY_TIMEOUT",
    "COWORK_OUTPUT_FORMAT",
    "COWORK_LOG_MODE",
    "COWORK_MIN_ADVANCE_DAYS",
    "COWORK_MIN_CANCEL_DAYS",
    "COWORK_CLOSED_WEEKDAY",
    "COWORK_MAX_EMPTY_INPUTS",
    "COWORK_EXPORT_DIR",
    "COWORK_MAXIMUM_LOCK_WAIT_SECONDS",
    "COWORK_DISABLE_AUTOINIT",
];

/// Test environment with an isolated data directory.
pub struct TestEnv {
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path to the cowork data directory (not created until first use)
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let data_dir = temp_path.join("cowork-data");

        Self {
            temp_dir,
            temp_path,
            data_dir,
        }
    }

    /// The cowork binary with a clean environment and no flags.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("cowork").expect("Failed to find cowork binary");
        for var in COWORK_VARS {
            cmd.env_remove(var);
        }
        cmd.env("COWORK_CLOSED_WEEKDAY", "none");
        cmd.current_dir(&self.temp_path);
        cmd
    }

    /// The cowork binary with `--data-dir` pointing at this environment.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    /// Runs a command expected to print one identifier on stdout.
    fn run_for_id(&self, args: &[&str]) -> i64 {
        let output = self.command().args(args).output().expect("Failed to run cowork");
        assert!(
            output.status.success(),
            "{args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout)
            .expect("Invalid UTF-8 in output")
            .trim()
            .parse()
            .expect("Output is not an identifier")
    }

    pub fn register_client(&self, first: &str, last: &str) -> i64 {
        self.run_for_id(&["register-client", "--first-name", first, "--last-name", last])
    }

    pub fn register_room(&self, name: &str, capacity: u32) -> i64 {
        let capacity = capacity.to_string();
        self.run_for_id(&["register-room", "--name", name, "--capacity", &capacity])
    }

    /// Books `room` for `client` and returns the reservation identifier.
    pub fn reserve(&self, client: i64, room: i64, date: &str, shift: &str, event: &str) -> i64 {
        let client = client.to_string();
        let room = room.to_string();
        self.run_for_id(&[
            "reserve", "--client", &client, "--room", &room, "--date", date, "--shift", shift,
            "--event", event,
        ])
    }

    /// One client, one room and one reservation `days` days out.
    pub fn seed_booking(&self, days: u64) -> (i64, String) {
        let client = self.register_client("Ana", "Ruiz");
        let room = self.register_room("Sala A", 12);
        let date = days_out(days);
        let id = self.reserve(client, room, &date, "morning", "Junta Mensual");
        (id, date)
    }
}

/// The local date `n` days from now.
#[allow(dead_code)]
pub fn date_in(n: u64) -> NaiveDate {
    Local::now().date_naive() + Days::new(n)
}

/// The local date `n` days from now as `MM-DD-YYYY`.
#[allow(dead_code)]
pub fn days_out(n: u64) -> String {
    date_in(n).format("%m-%d-%Y").to_string()
}

/// `--from` and `--to` arguments covering `from` to `to` days out.
#[allow(dead_code)]
pub fn range_args(from: u64, to: u64) -> [String; 4] {
    [
        "--from".to_string(),
        days_out(from),
        "--to".to_string(),
        days_out(to),
    ]
}
