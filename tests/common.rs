#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use dayclock::models::{AttendanceRecord, BreakInterval};
use tempfile::TempDir;

/// The binary, isolated from the user's real configuration.
pub fn dc(home: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("dayclock");
    cmd.env("DAYCLOCK_HOME", home.path());
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Fresh temp dir plus a database path inside it.
pub fn setup_test_db(file_name: &str) -> (TempDir, String) {
    let dir = TempDir::new().expect("temp dir");
    let db = dir.path().join(file_name).to_string_lossy().to_string();
    (dir, db)
}

/// `init --test` against `db`.
pub fn init_db(home: &TempDir, db: &str) {
    dc(home)
        .args(["--db", db, "--test", "init"])
        .assert()
        .success();
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

pub fn record(
    d: &str,
    clock_in: Option<&str>,
    clock_out: Option<&str>,
    breaks: Vec<BreakInterval>,
) -> AttendanceRecord {
    AttendanceRecord {
        id: format!("id-{d}"),
        date: date(d),
        clock_in: clock_in.map(str::to_string),
        clock_out: clock_out.map(str::to_string),
        breaks,
        total_work_minutes: None,
        total_break_minutes: None,
    }
}
