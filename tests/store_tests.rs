mod common;
use common::{date, record};
use dayclock::core::attendance::{AttendanceLogic, find_record};
use dayclock::db::{JsonStore, MemoryStore, RecordStore, SqliteStore};
use dayclock::errors::{AppError, AppResult};
use dayclock::models::{AttendanceRecord, BreakInterval, RecordUpdate};
use rusqlite::Connection;
use std::fs;
use tempfile::TempDir;

/// Walk one full day through any store and check the read-back each time.
fn full_day_roundtrip(store: &mut dyn RecordStore) {
    let d = date("2025-10-06");

    let records = AttendanceLogic::clock_in(store, d, "09:00").unwrap();
    assert_eq!(records.len(), 1);

    AttendanceLogic::start_break(store, d, "12:00").unwrap();
    let records = AttendanceLogic::end_break(store, d, "13:00").unwrap();
    assert_eq!(find_record(&records, d).unwrap().total_break_minutes, Some(60));

    let records = AttendanceLogic::clock_out(store, d, "18:00").unwrap();
    let r = find_record(&records, d).unwrap();
    assert_eq!(r.clock_in.as_deref(), Some("09:00"));
    assert_eq!(r.clock_out.as_deref(), Some("18:00"));
    assert_eq!(r.breaks, vec![BreakInterval::closed("12:00", "13:00")]);
    assert_eq!(r.total_work_minutes, Some(480));
    assert_eq!(r.total_break_minutes, Some(60));

    // one record per date, and a second date sorts first
    let other = date("2025-10-07");
    let records = AttendanceLogic::clock_in(store, other, "08:30").unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].date, other);
    assert_eq!(records[1].date, d);
}

#[test]
fn memory_store_full_day() {
    let mut store = MemoryStore::new();
    full_day_roundtrip(&mut store);
    assert_eq!(store.len(), 2);
}

#[test]
fn sqlite_store_full_day() {
    let mut store = SqliteStore::in_memory().unwrap();
    full_day_roundtrip(&mut store);
}

#[test]
fn json_store_full_day() {
    let dir = TempDir::new().unwrap();
    let mut store = JsonStore::open(dir.path().join("records.json")).unwrap();
    full_day_roundtrip(&mut store);
}

#[test]
fn sqlite_store_persists_across_connections() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("att.sqlite").to_string_lossy().to_string();
    let d = date("2025-10-08");

    {
        let mut store = SqliteStore::open(&path).unwrap();
        AttendanceLogic::clock_in(&mut store, d, "09:15").unwrap();
    }

    let store = SqliteStore::open(&path).unwrap();
    let r = store.load(d).unwrap().expect("record persisted");
    assert_eq!(r.clock_in.as_deref(), Some("09:15"));
    assert!(store.load(date("2025-10-09")).unwrap().is_none());
}

#[test]
fn record_id_is_stable_across_updates() {
    let mut store = MemoryStore::new();
    let d = date("2025-10-10");

    let first = AttendanceLogic::clock_in(&mut store, d, "09:00").unwrap();
    let id = find_record(&first, d).unwrap().id.clone();
    assert!(!id.is_empty());

    let later = AttendanceLogic::clock_out(&mut store, d, "17:00").unwrap();
    assert_eq!(find_record(&later, d).unwrap().id, id);
}

#[test]
fn past_dates_edit_through_the_same_merge() {
    let mut store = MemoryStore::new();
    let d = date("2024-02-29");

    let update = RecordUpdate {
        clock_in: Some(Some("10:00".into())),
        clock_out: Some(Some("19:00".into())),
        breaks: Some(vec![BreakInterval::closed("13:00", "14:00")]),
    };
    let records = AttendanceLogic::edit(&mut store, d, &update).unwrap();
    let r = find_record(&records, d).unwrap();
    assert_eq!(r.total_work_minutes, Some(480));

    let records = AttendanceLogic::edit(
        &mut store,
        d,
        &RecordUpdate::breaks(vec![BreakInterval::closed("13:00", "13:30")]),
    )
    .unwrap();
    let r = find_record(&records, d).unwrap();
    assert_eq!(r.clock_in.as_deref(), Some("10:00"));
    assert_eq!(r.total_work_minutes, Some(510));
}

#[test]
fn empty_edit_is_rejected() {
    let mut store = MemoryStore::new();
    let err = AttendanceLogic::edit(&mut store, date("2025-01-01"), &RecordUpdate::default())
        .unwrap_err();
    assert!(matches!(err, AppError::NothingToDo(_)));
    assert!(store.is_empty());
}

#[test]
fn live_break_start_is_guarded_before_writing() {
    let d = date("2025-10-11");
    let mut store = MemoryStore::with_records([record(
        "2025-10-11",
        Some("09:00"),
        None,
        vec![BreakInterval::open("12:00")],
    )]);
    let before = store.load_all().unwrap();

    let err = AttendanceLogic::start_break(&mut store, d, "12:10").unwrap_err();
    assert!(matches!(err, AppError::BreakInProgress(_)));
    assert_eq!(store.load_all().unwrap(), before);
}

#[test]
fn failed_end_break_writes_nothing() {
    let d = date("2025-10-11");
    let mut store = MemoryStore::with_records([record("2025-10-11", Some("09:00"), None, vec![])]);
    let before = store.load_all().unwrap();

    let err = AttendanceLogic::end_break(&mut store, d, "12:00").unwrap_err();
    assert!(matches!(err, AppError::NoOpenBreak(_)));
    assert_eq!(store.load_all().unwrap(), before);
}

/// Store whose writes always fail.
struct BrokenStore {
    inner: MemoryStore,
}

impl RecordStore for BrokenStore {
    fn load_all(&self) -> AppResult<Vec<AttendanceRecord>> {
        self.inner.load_all()
    }

    fn upsert(&mut self, _record: &AttendanceRecord) -> AppResult<()> {
        Err(AppError::Store("connection refused".into()))
    }
}

#[test]
fn store_errors_propagate_unchanged() {
    let mut store = BrokenStore {
        inner: MemoryStore::new(),
    };
    let err = AttendanceLogic::clock_in(&mut store, date("2025-10-12"), "09:00").unwrap_err();
    assert!(matches!(err, AppError::Store(ref m) if m == "connection refused"));
    assert!(store.load_all().unwrap().is_empty());
}

#[test]
fn json_store_imports_legacy_single_break_fields() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("legacy.json");
    fs::write(
        &path,
        r#"[
            {"id": "2025-09-01", "date": "2025-09-01", "clockIn": "09:00", "clockOut": "18:00",
             "breakStart": "12:00", "breakEnd": "13:00", "totalWorkTime": 480, "totalBreakTime": 60},
            {"date": "2025-09-02", "clockIn": "09:00",
             "breaks": [{"start": "10:00", "end": "10:30"}],
             "breakStart": "12:00", "breakEnd": "12:45"},
            {"id": "x", "date": "2025-09-03", "clockIn": "09:00", "breakStart": "12:00"}
        ]"#,
    )
    .unwrap();

    let store = JsonStore::open(&path).unwrap();
    let records = store.load_all().unwrap();
    assert_eq!(records.len(), 3);

    let legacy = find_record(&records, date("2025-09-01")).unwrap();
    assert_eq!(legacy.breaks, vec![BreakInterval::closed("12:00", "13:00")]);
    assert_eq!(legacy.total_work_minutes, Some(480));

    // an existing list wins over the legacy pair
    let both = find_record(&records, date("2025-09-02")).unwrap();
    assert_eq!(both.breaks, vec![BreakInterval::closed("10:00", "10:30")]);
    assert_eq!(both.id, "2025-09-02");

    let running = find_record(&records, date("2025-09-03")).unwrap();
    assert_eq!(running.breaks, vec![BreakInterval::open("12:00")]);
    assert!(running.has_open_break());
}

#[test]
fn json_store_never_writes_legacy_fields() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("legacy.json");
    fs::write(
        &path,
        r#"[{"id": "a", "date": "2025-09-01", "clockIn": "09:00", "breakStart": "12:00", "breakEnd": "12:30"}]"#,
    )
    .unwrap();

    let mut store = JsonStore::open(&path).unwrap();
    AttendanceLogic::clock_out(&mut store, date("2025-09-01"), "17:00").unwrap();

    let raw = fs::read_to_string(&path).unwrap();
    assert!(!raw.contains("breakStart"));
    assert!(!raw.contains("breakEnd"));
    assert!(raw.contains("\"breaks\""));
    assert!(raw.contains("\"totalWorkMinutes\": 450"));
}

fn create_legacy_sqlite(path: &str) {
    let conn = Connection::open(path).unwrap();
    conn.execute_batch(
        r#"
        CREATE TABLE attendance (
            id                   TEXT PRIMARY KEY,
            date                 TEXT NOT NULL UNIQUE,
            clock_in             TEXT,
            clock_out            TEXT,
            break_start          TEXT,
            break_end            TEXT,
            total_work_minutes   INTEGER,
            total_break_minutes  INTEGER,
            created_at           TEXT NOT NULL,
            updated_at           TEXT NOT NULL
        );
        INSERT INTO attendance VALUES
            ('a', '2025-08-01', '09:00', '18:00', '12:00', '13:00', 480, 60, '2025-08-01', '2025-08-01'),
            ('b', '2025-08-02', '09:00', NULL, '11:00', NULL, NULL, NULL, '2025-08-02', '2025-08-02');
        "#,
    )
    .unwrap();
}

#[test]
fn sqlite_migrates_legacy_schema_and_imports_breaks() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("legacy.sqlite").to_string_lossy().to_string();
    create_legacy_sqlite(&path);

    let store = SqliteStore::open(&path).unwrap();
    let records = store.load_all().unwrap();

    let a = find_record(&records, date("2025-08-01")).unwrap();
    assert_eq!(a.breaks, vec![BreakInterval::closed("12:00", "13:00")]);
    assert_eq!(a.total_work_minutes, Some(480));

    let b = find_record(&records, date("2025-08-02")).unwrap();
    assert_eq!(b.breaks, vec![BreakInterval::open("11:00")]);

    let applied: i64 = store
        .pool
        .conn
        .query_row(
            "SELECT COUNT(*) FROM log WHERE operation = 'migration_applied'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(applied, 1);

    // a backup copy sits next to the migrated file
    let backups = fs::read_dir(dir.path())
        .unwrap()
        .filter_map(Result::ok)
        .filter(|e| e.file_name().to_string_lossy().contains("backup_pre_breaks"))
        .count();
    assert_eq!(backups, 1);
}

#[test]
fn sqlite_write_clears_legacy_columns() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("legacy.sqlite").to_string_lossy().to_string();
    create_legacy_sqlite(&path);

    let mut store = SqliteStore::open(&path).unwrap();
    let records = AttendanceLogic::end_break(&mut store, date("2025-08-02"), "11:30").unwrap();
    let b = find_record(&records, date("2025-08-02")).unwrap();
    assert_eq!(b.breaks, vec![BreakInterval::closed("11:00", "11:30")]);
    assert_eq!(b.id, "b");

    let (start, end, breaks): (Option<String>, Option<String>, Option<String>) = store
        .pool
        .conn
        .query_row(
            "SELECT break_start, break_end, breaks FROM attendance WHERE date = '2025-08-02'",
            [],
            |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
        )
        .unwrap();
    assert_eq!(start, None);
    assert_eq!(end, None);
    assert!(breaks.unwrap().contains("11:30"));

    // reopening does not migrate twice
    drop(store);
    let store = SqliteStore::open(&path).unwrap();
    let applied: i64 = store
        .pool
        .conn
        .query_row(
            "SELECT COUNT(*) FROM log WHERE operation = 'migration_applied'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(applied, 1);
}

#[test]
fn sqlite_write_is_all_or_nothing_on_legacy_tables() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("legacy.sqlite").to_string_lossy().to_string();
    create_legacy_sqlite(&path);

    let mut store = SqliteStore::open(&path).unwrap();
    // make clearing the legacy columns fail after the main write succeeded
    store
        .pool
        .conn
        .execute_batch(
            "CREATE TRIGGER keep_legacy BEFORE UPDATE OF break_start ON attendance
             BEGIN SELECT RAISE(ABORT, 'legacy columns are read-only'); END;",
        )
        .unwrap();

    let result = AttendanceLogic::end_break(&mut store, date("2025-08-02"), "11:30");
    assert!(matches!(result, Err(AppError::Db(_))));

    let (breaks, start): (Option<String>, Option<String>) = store
        .pool
        .conn
        .query_row(
            "SELECT breaks, break_start FROM attendance WHERE date = '2025-08-02'",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .unwrap();
    assert_eq!(breaks, None);
    assert_eq!(start.as_deref(), Some("11:00"));
}
