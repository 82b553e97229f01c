use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use chrono::Local;
use rusqlite::{Connection, OptionalExtension};
use std::path::Path;

const MIGRATION_ADD_BREAKS: &str = "20250301_0002_add_breaks_list";

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if the `attendance` table exists.
fn attendance_table_exists(conn: &Connection) -> AppResult<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='attendance'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check if the `attendance` table has the given column.
pub fn attendance_has_column(conn: &Connection, column: &str) -> AppResult<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('attendance')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

fn migration_applied(conn: &Connection, version: &str) -> AppResult<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> AppResult<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, 'migration_applied', ?2, ?3)",
        [Local::now().to_rfc3339().as_str(), version, message],
    )?;
    Ok(())
}

/// Create the `attendance` table with the modern schema (breaks as JSON list).
fn create_attendance_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS attendance (
            id                   TEXT PRIMARY KEY,
            date                 TEXT NOT NULL UNIQUE,
            clock_in             TEXT,
            clock_out            TEXT,
            breaks               TEXT,
            total_work_minutes   INTEGER,
            total_break_minutes  INTEGER,
            created_at           TEXT NOT NULL,
            updated_at           TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_attendance_date ON attendance(date);
        "#,
    )?;
    Ok(())
}

/// Add the `breaks` list column to a table that only knows the single
/// `break_start`/`break_end` pair. Existing rows keep their legacy values;
/// they are imported on read and cleared on the next write.
fn migrate_add_breaks_column(conn: &Connection) -> AppResult<()> {
    if attendance_has_column(conn, "breaks")? {
        return Ok(());
    }

    warning("Legacy attendance schema detected, adding 'breaks' column...");
    backup_before_migration(conn)?;

    conn.execute("ALTER TABLE attendance ADD COLUMN breaks TEXT;", [])
        .map_err(|e| AppError::Migration(format!("Failed to add 'breaks' column: {}", e)))?;

    if !migration_applied(conn, MIGRATION_ADD_BREAKS)? {
        mark_applied(
            conn,
            MIGRATION_ADD_BREAKS,
            "Added breaks list to attendance",
        )?;
    }

    success(format!(
        "Migration applied: {} → added 'breaks' to attendance table",
        MIGRATION_ADD_BREAKS
    ));
    Ok(())
}

/// Copy the database file next to itself before a schema change.
fn backup_before_migration(conn: &Connection) -> AppResult<()> {
    let db_path: String = conn
        .query_row("PRAGMA database_list;", [], |row| row.get::<_, String>(2))
        .unwrap_or_default();

    if db_path.is_empty() {
        warning("Could not determine DB path, backup skipped.");
        return Ok(());
    }

    let src = Path::new(&db_path);
    let name = format!(
        "{}-backup_pre_breaks.sqlite",
        Local::now().format("%Y%m%d_%H%M%S")
    );
    let dest = match src.parent() {
        Some(dir) => dir.join(name),
        None => Path::new(&name).to_path_buf(),
    };

    std::fs::copy(src, &dest)?;
    success(format!("📦 Backup created: {}", dest.display()));
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked whenever a SQLite database is opened.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_log_table(conn)?;

    if !attendance_table_exists(conn)? {
        create_attendance_table(conn)?;
        tracing::info!("created attendance table");
        return Ok(());
    }

    migrate_add_breaks_column(conn)?;

    conn.execute_batch("CREATE INDEX IF NOT EXISTS idx_attendance_date ON attendance(date);")?;
    Ok(())
}
