//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use chrono::NaiveDate;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / persistence
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid time format: {0} (expected HH:MM)")]
    InvalidTime(String),

    #[error("Invalid break list: {0} (expected HH:MM-HH:MM[,HH:MM-HH:MM...])")]
    InvalidBreaks(String),

    // ---------------------------
    // Session errors (recoverable, user-visible)
    // ---------------------------
    #[error("No break in progress for {0}")]
    NoOpenBreak(NaiveDate),

    #[error("A break is already in progress for {0}")]
    BreakInProgress(NaiveDate),

    #[error("Not clocked in on {0}")]
    NotClockedIn(NaiveDate),

    #[error("Already clocked in on {date} at {time}")]
    AlreadyClockedIn { date: NaiveDate, time: String },

    #[error("Already clocked out on {date} at {time}")]
    AlreadyClockedOut { date: NaiveDate, time: String },

    #[error("Nothing to do: {0}")]
    NothingToDo(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),
}

pub type AppResult<T> = Result<T, AppError>;
