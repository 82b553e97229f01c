mod common;
use common::{dc, init_db, setup_test_db};
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;

#[test]
fn test_init_creates_sqlite_db() {
    let (home, db) = setup_test_db("init.sqlite");
    dc(&home)
        .args(["--db", &db, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Store ready"));
    assert!(std::path::Path::new(&db).exists());
}

#[test]
fn test_full_day_flow() {
    let (home, db) = setup_test_db("flow.sqlite");
    init_db(&home, &db);

    dc(&home)
        .args(["--db", &db, "--test", "in", "--date", "2025-10-06", "--at", "09:00"])
        .assert()
        .success()
        .stdout(contains("Clocked in at 09:00 on 2025-10-06."));

    dc(&home)
        .args(["--db", &db, "--test", "break", "start", "--date", "2025-10-06", "--at", "12:00"])
        .assert()
        .success()
        .stdout(contains("Break started at 12:00."))
        .stdout(contains("on break"));

    dc(&home)
        .args(["--db", &db, "--test", "break", "end", "--date", "2025-10-06", "--at", "13:00"])
        .assert()
        .success()
        .stdout(contains("Break ended at 13:00."));

    dc(&home)
        .args(["--db", &db, "--test", "out", "--date", "2025-10-06", "--at", "18:00"])
        .assert()
        .success()
        .stdout(contains("Clocked out at 18:00"))
        .stdout(contains("Running break closed").not())
        .stdout(contains("8時間0分"))
        .stdout(contains("1時間0分"));

    dc(&home)
        .args(["--db", &db, "--test", "show", "2025-10-06"])
        .assert()
        .success()
        .stdout(contains("finished"))
        .stdout(contains("12:00 - 13:00"));
}

#[test]
fn test_out_closes_running_break() {
    let (home, db) = setup_test_db("autoclose.sqlite");
    init_db(&home, &db);

    for args in [
        vec!["in", "--date", "2025-10-07", "--at", "09:00"],
        vec!["break", "start", "--date", "2025-10-07", "--at", "17:30"],
    ] {
        dc(&home).args(["--db", &db, "--test"]).args(&args).assert().success();
    }

    dc(&home)
        .args(["--db", &db, "--test", "out", "--date", "2025-10-07", "--at", "18:00"])
        .assert()
        .success()
        .stdout(contains("Running break closed at 18:00."))
        .stdout(contains("8時間30分"));
}

#[test]
fn test_end_break_without_open_break_fails() {
    let (home, db) = setup_test_db("nobreak.sqlite");
    init_db(&home, &db);

    dc(&home)
        .args(["--db", &db, "--test", "in", "--date", "2025-10-08", "--at", "09:00"])
        .assert()
        .success();

    dc(&home)
        .args(["--db", &db, "--test", "break", "end", "--date", "2025-10-08", "--at", "12:00"])
        .assert()
        .failure()
        .stderr(contains("No break in progress for 2025-10-08"));

    dc(&home)
        .args(["--db", &db, "--test", "show", "2025-10-08"])
        .assert()
        .success()
        .stdout(contains("working"));
}

#[test]
fn test_double_clock_in_fails() {
    let (home, db) = setup_test_db("double.sqlite");
    init_db(&home, &db);

    dc(&home)
        .args(["--db", &db, "--test", "in", "--date", "2025-10-09", "--at", "09:00"])
        .assert()
        .success();

    dc(&home)
        .args(["--db", &db, "--test", "in", "--date", "2025-10-09", "--at", "09:05"])
        .assert()
        .failure()
        .stderr(contains("Already clocked in on 2025-10-09 at 09:00"));
}

#[test]
fn test_invalid_time_is_rejected() {
    let (home, db) = setup_test_db("badtime.sqlite");
    init_db(&home, &db);

    dc(&home)
        .args(["--db", &db, "--test", "in", "--date", "2025-10-09", "--at", "9:00"])
        .assert()
        .failure()
        .stderr(contains("Invalid time format: 9:00"));
}

#[test]
fn test_edit_sets_breaks_and_clears_out() {
    let (home, db) = setup_test_db("edit.sqlite");
    init_db(&home, &db);

    dc(&home)
        .args([
            "--db", &db, "--test", "edit", "2025-09-15", "--in", "08:30", "--out", "17:30",
            "--breaks", "12:00-12:45,15:00-15:15",
        ])
        .assert()
        .success()
        .stdout(contains("Record for 2025-09-15 updated."))
        .stdout(contains("8時間0分"))
        .stdout(contains("1時間0分"));

    dc(&home)
        .args(["--db", &db, "--test", "edit", "2025-09-15", "--clear-out"])
        .assert()
        .success()
        .stdout(contains("--:--"));

    dc(&home)
        .args(["--db", &db, "--test", "list", "--period", "2025-09"])
        .assert()
        .success()
        .stdout(contains("2025-09-15"))
        .stdout(contains("Total:"))
        .stdout(contains("1 day(s)"));
}

#[test]
fn test_edit_warns_when_out_before_in() {
    let (home, db) = setup_test_db("backwards.sqlite");
    init_db(&home, &db);

    dc(&home)
        .args(["--db", &db, "--test", "edit", "2025-09-16", "--in", "18:00", "--out", "09:00"])
        .assert()
        .success()
        .stderr(contains("Clock-out is earlier than clock-in"))
        .stdout(contains("0時間0分"));
}

#[test]
fn test_edit_warns_when_out_leaves_break_running() {
    let (home, db) = setup_test_db("openout.sqlite");
    init_db(&home, &db);

    dc(&home)
        .args(["--db", &db, "--test", "edit", "2025-09-18", "--in", "09:00", "--breaks", "12:00-"])
        .assert()
        .success()
        .stderr(contains("break is still running").not());

    dc(&home)
        .args(["--db", &db, "--test", "edit", "2025-09-18", "--out", "17:00"])
        .assert()
        .success()
        .stderr(contains("break is still running"));
}

#[test]
fn test_edit_without_fields_fails() {
    let (home, db) = setup_test_db("noop.sqlite");
    init_db(&home, &db);

    dc(&home)
        .args(["--db", &db, "--test", "edit", "2025-09-16"])
        .assert()
        .failure()
        .stderr(contains("Nothing to do"));
}

#[test]
fn test_edit_rejects_open_break_in_the_middle() {
    let (home, db) = setup_test_db("openmid.sqlite");
    init_db(&home, &db);

    dc(&home)
        .args(["--db", &db, "--test", "edit", "2025-09-17", "--breaks", "12:00-,15:00-15:10"])
        .assert()
        .failure()
        .stderr(contains("only the last break may be open"));
}

#[test]
fn test_list_filters_by_period() {
    let (home, db) = setup_test_db("list.sqlite");
    init_db(&home, &db);

    for d in ["2025-08-29", "2025-09-01", "2025-09-02"] {
        dc(&home)
            .args(["--db", &db, "--test", "edit", d, "--in", "09:00", "--out", "17:00"])
            .assert()
            .success();
    }

    dc(&home)
        .args(["--db", &db, "--test", "list", "--period", "2025-09"])
        .assert()
        .success()
        .stdout(contains("2025-09-01"))
        .stdout(contains("2025-09-02"))
        .stdout(contains("2025-08-29").not())
        .stdout(contains("2 day(s)"))
        .stdout(contains("16時間0分"));

    dc(&home)
        .args(["--db", &db, "--test", "list", "--period", "2025-08-29:2025-09-01"])
        .assert()
        .success()
        .stdout(contains("2025-08-29"))
        .stdout(contains("2025-09-02").not());

    dc(&home)
        .args(["--db", &db, "--test", "list", "--period", "2024"])
        .assert()
        .success()
        .stdout(contains("No records in the selected period."));
}

#[test]
fn test_json_backend_flow() {
    let (home, _) = setup_test_db("unused.sqlite");
    let db = home.path().join("data").join("records.json").to_string_lossy().to_string();
    init_db(&home, &db);

    dc(&home)
        .args(["--db", &db, "--test", "in", "--date", "2025-10-10", "--at", "10:00"])
        .assert()
        .success();
    dc(&home)
        .args(["--db", &db, "--test", "out", "--date", "2025-10-10", "--at", "15:00"])
        .assert()
        .success()
        .stdout(contains("5時間0分"));

    let raw = fs::read_to_string(&db).unwrap();
    assert!(raw.contains("\"clockIn\": \"10:00\""));
    assert!(raw.contains("\"totalWorkMinutes\": 300"));

    dc(&home)
        .args(["--db", &db, "--test", "log", "--print"])
        .assert()
        .failure()
        .stderr(contains("only kept in SQLite"));
}

#[test]
fn test_log_records_operations() {
    let (home, db) = setup_test_db("log.sqlite");
    init_db(&home, &db);

    dc(&home)
        .args(["--db", &db, "--test", "in", "--date", "2025-10-11", "--at", "09:00"])
        .assert()
        .success();

    dc(&home)
        .args(["--db", &db, "--test", "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("clock_in"))
        .stdout(contains("2025-10-11"));
}

#[test]
fn test_show_missing_day() {
    let (home, db) = setup_test_db("empty.sqlite");
    init_db(&home, &db);

    dc(&home)
        .args(["--db", &db, "--test", "show", "2025-01-01"])
        .assert()
        .success()
        .stdout(contains("No record for 2025-01-01."));
}

#[test]
fn test_quiet_suppresses_confirmations() {
    let (home, db) = setup_test_db("quiet.sqlite");
    init_db(&home, &db);

    dc(&home)
        .args(["--db", &db, "--test", "-q", "in", "--date", "2025-10-12", "--at", "09:00"])
        .assert()
        .success()
        .stdout(contains("Clocked in").not())
        .stdout(contains("working"));
}
