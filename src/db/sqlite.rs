//! SQLite-backed `RecordStore`.

use crate::core::accounting::apply_totals;
use crate::db::migrate::{attendance_has_column, run_pending_migrations};
use crate::db::normalize::normalize_breaks;
use crate::db::pool::DbPool;
use crate::db::store::RecordStore;
use crate::errors::{AppError, AppResult};
use crate::models::{AttendanceRecord, BreakInterval};
use chrono::{Local, NaiveDate};
use rusqlite::{OptionalExtension, Row, params};

pub struct SqliteStore {
    pub pool: DbPool,
    /// The table still carries `break_start`/`break_end` from the old schema.
    legacy_break_columns: bool,
}

impl SqliteStore {
    pub fn open(path: &str) -> AppResult<Self> {
        Self::from_pool(DbPool::new(path)?)
    }

    pub fn in_memory() -> AppResult<Self> {
        Self::from_pool(DbPool::in_memory()?)
    }

    pub fn from_pool(pool: DbPool) -> AppResult<Self> {
        run_pending_migrations(&pool.conn)?;
        let legacy_break_columns = attendance_has_column(&pool.conn, "break_start")?;
        Ok(Self {
            pool,
            legacy_break_columns,
        })
    }

    fn select_sql(&self, filter: &str) -> String {
        let legacy = if self.legacy_break_columns {
            "break_start, break_end"
        } else {
            "NULL AS break_start, NULL AS break_end"
        };
        format!(
            "SELECT id, date, clock_in, clock_out, breaks, {legacy}
             FROM attendance {filter}"
        )
    }
}

fn conversion_error(idx: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(err))
}

pub fn map_row(row: &Row) -> rusqlite::Result<AttendanceRecord> {
    let date_str: String = row.get("date")?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
        .map_err(|_| conversion_error(1, AppError::InvalidDate(date_str.clone())))?;

    let breaks_json: Option<String> = row.get("breaks")?;
    let breaks = match breaks_json {
        Some(s) if !s.trim().is_empty() => Some(
            serde_json::from_str::<Vec<BreakInterval>>(&s)
                .map_err(|e| conversion_error(4, AppError::Serialization(e)))?,
        ),
        _ => None,
    };

    let mut record = AttendanceRecord {
        id: row.get("id")?,
        date,
        clock_in: row.get("clock_in")?,
        clock_out: row.get("clock_out")?,
        breaks: normalize_breaks(breaks, row.get("break_start")?, row.get("break_end")?),
        total_work_minutes: None,
        total_break_minutes: None,
    };
    // The total columns are a cache for ad-hoc queries; legacy rows may
    // predate the breaks list, so always re-derive.
    apply_totals(&mut record);
    Ok(record)
}

impl RecordStore for SqliteStore {
    fn load_all(&self) -> AppResult<Vec<AttendanceRecord>> {
        let mut stmt = self
            .pool
            .conn
            .prepare(&self.select_sql("ORDER BY date DESC"))?;

        let rows = stmt.query_map([], map_row)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    fn load(&self, date: NaiveDate) -> AppResult<Option<AttendanceRecord>> {
        let mut stmt = self.pool.conn.prepare(&self.select_sql("WHERE date = ?1"))?;
        let rec = stmt
            .query_row([date.format("%Y-%m-%d").to_string()], map_row)
            .optional()?;
        Ok(rec)
    }

    fn upsert(&mut self, record: &AttendanceRecord) -> AppResult<()> {
        let now = Local::now().to_rfc3339();
        let breaks = serde_json::to_string(&record.breaks)?;

        let tx = self.pool.conn.transaction()?;

        tx.execute(
            "INSERT INTO attendance
                (id, date, clock_in, clock_out, breaks,
                 total_work_minutes, total_break_minutes, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?8)
             ON CONFLICT(date) DO UPDATE SET
                clock_in = excluded.clock_in,
                clock_out = excluded.clock_out,
                breaks = excluded.breaks,
                total_work_minutes = excluded.total_work_minutes,
                total_break_minutes = excluded.total_break_minutes,
                updated_at = excluded.updated_at",
            params![
                record.id,
                record.date_str(),
                record.clock_in,
                record.clock_out,
                breaks,
                record.total_work_minutes,
                record.total_break_minutes,
                now,
            ],
        )?;

        // Never dual-write the old single-break columns.
        if self.legacy_break_columns {
            tx.execute(
                "UPDATE attendance SET break_start = NULL, break_end = NULL WHERE date = ?1",
                [record.date_str()],
            )?;
        }

        tx.commit()?;
        Ok(())
    }
}
