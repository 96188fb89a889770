//! Error types.
//! `OpenError` is what the library hands back when a connection cannot be
//! established; `AppError` is the unified error used by config and CLI code.

use crate::db::ResultStatus;
use std::io;
use thiserror::Error;

/// Failure to open a database file.
///
/// Codes are SQLite's own result codes, reported verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unable to open database '{path}': {message} (code {simple_code}, extended {extended_code})")]
pub struct OpenError {
    pub path: String,
    pub simple_code: i32,
    pub extended_code: i32,
    pub message: String,
}

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error(transparent)]
    Open(#[from] OpenError),

    #[error("SQL failed: {message} (code {simple_code}, extended {extended_code})")]
    Sql {
        simple_code: i32,
        extended_code: i32,
        message: String,
    },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    /// Turn a failed operation's stored status into an error.
    pub fn from_status(status: &ResultStatus) -> Self {
        AppError::Sql {
            simple_code: status.simple_code,
            extended_code: status.extended_code,
            message: status.message.clone().unwrap_or_default(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
