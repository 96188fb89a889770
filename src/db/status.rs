//! Last-operation result state, in SQLite's own code vocabulary.

use rusqlite::ffi;

/// Outcome of the most recent operation on a connection.
///
/// `simple_code` is the primary result code (low byte of the extended one),
/// `extended_code` the full extended result code. Both are `SQLITE_OK` and
/// `message` is `None` after a successful call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultStatus {
    pub simple_code: i32,
    pub extended_code: i32,
    pub message: Option<String>,
}

impl ResultStatus {
    pub fn ok() -> Self {
        Self::default()
    }

    pub fn is_ok(&self) -> bool {
        self.simple_code == ffi::SQLITE_OK
    }

    /// Build the status reported by a failed rusqlite call.
    ///
    /// Errors raised by rusqlite itself rather than the engine (interior NUL
    /// bytes, unknown parameter names, ...) are reported as `SQLITE_MISUSE`.
    pub fn from_error(err: &rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::SqliteFailure(e, msg) => Self::engine(
                e.extended_code,
                msg.clone().unwrap_or_else(|| e.to_string()),
            ),
            // Prepare-time failures carrying the offending offset
            rusqlite::Error::SqlInputError { error, msg, .. } => {
                Self::engine(error.extended_code, msg.clone())
            }
            other => Self {
                simple_code: ffi::SQLITE_MISUSE,
                extended_code: ffi::SQLITE_MISUSE,
                message: Some(other.to_string()),
            },
        }
    }

    fn engine(extended_code: i32, message: String) -> Self {
        Self {
            simple_code: extended_code & 0xff,
            extended_code,
            message: Some(message),
        }
    }
}

/// English description of a result code, as the engine words it.
pub fn describe_code(code: i32) -> &'static str {
    ffi::code_to_str(code)
}
