//! Owning wrapper around a single SQLite connection.

use crate::db::statement::Stmt;
use crate::db::status::ResultStatus;
use crate::errors::OpenError;
use rusqlite::{Connection, OpenFlags, ffi};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, warn};

/// How a database file is opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenOptions {
    pub read_only: bool,
    /// Create the file when missing. Ignored for read-only opens.
    pub create: bool,
    pub busy_timeout: Option<Duration>,
}

impl Default for OpenOptions {
    fn default() -> Self {
        Self {
            read_only: false,
            create: true,
            busy_timeout: None,
        }
    }
}

impl OpenOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    pub fn create(mut self, create: bool) -> Self {
        self.create = create;
        self
    }

    pub fn busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = Some(timeout);
        self
    }

    fn flags(&self) -> OpenFlags {
        let mut flags = OpenFlags::SQLITE_OPEN_URI | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        if self.read_only {
            flags |= OpenFlags::SQLITE_OPEN_READ_ONLY;
        } else {
            flags |= OpenFlags::SQLITE_OPEN_READ_WRITE;
            if self.create {
                flags |= OpenFlags::SQLITE_OPEN_CREATE;
            }
        }
        flags
    }
}

/// An open SQLite database.
///
/// The connection is opened by [`Database::open`] and closed exactly once when
/// the value is dropped (or by [`Database::close`]). Every [`execute`] call,
/// successful or not, refreshes the stored result codes and message.
///
/// A `Database` may be moved between threads but not shared: all mutation
/// goes through `&mut self`.
///
/// [`execute`]: Database::execute
pub struct Database {
    path: String,
    conn: Connection,
    status: ResultStatus,
}

impl Database {
    /// Open (or create) the database file at `path` with default options.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, OpenError> {
        Self::open_with(path, &OpenOptions::default())
    }

    pub fn open_with<P: AsRef<Path>>(path: P, options: &OpenOptions) -> Result<Self, OpenError> {
        let path = path.as_ref();
        let path_str = path.to_string_lossy().into_owned();

        // rusqlite closes the half-opened handle itself when open fails
        let conn = Connection::open_with_flags(path, options.flags())
            .map_err(|e| open_error(&path_str, &e))?;

        // On failure `conn` is dropped here, which closes it
        if let Some(timeout) = options.busy_timeout {
            conn.busy_timeout(timeout)
                .map_err(|e| open_error(&path_str, &e))?;
        }

        debug!(path = %path_str, read_only = options.read_only, "opened database");

        Ok(Self {
            path: path_str,
            conn,
            status: ResultStatus::ok(),
        })
    }

    /// Open a private, transient in-memory database.
    pub fn open_in_memory() -> Result<Self, OpenError> {
        let conn = Connection::open_in_memory().map_err(|e| open_error(":memory:", &e))?;
        debug!("opened in-memory database");
        Ok(Self {
            path: ":memory:".to_string(),
            conn,
            status: ResultStatus::ok(),
        })
    }

    /// Path the database was opened with.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Run one SQL statement, or a `;`-separated batch, discarding any rows.
    ///
    /// Returns `true` on success. The result codes and message are replaced
    /// by this call's outcome either way.
    pub fn execute(&mut self, sql: &str) -> bool {
        match self.conn.execute_batch(sql) {
            Ok(()) => {
                self.status = ResultStatus::ok();
                debug!(path = %self.path, "executed SQL");
                true
            }
            Err(e) => {
                self.status = ResultStatus::from_error(&e);
                warn!(
                    path = %self.path,
                    code = self.status.simple_code,
                    extended = self.status.extended_code,
                    "SQL failed: {}",
                    e
                );
                false
            }
        }
    }

    /// Compile `sql` into a statement bound to this connection.
    ///
    /// Returns `None` when the engine rejects it; the codes tell why.
    pub fn prepare(&mut self, sql: &str) -> Option<Stmt<'_>> {
        match self.conn.prepare(sql) {
            Ok(stmt) => {
                self.status = ResultStatus::ok();
                Some(Stmt::new(stmt, &mut self.status))
            }
            Err(e) => {
                self.status = ResultStatus::from_error(&e);
                warn!(
                    path = %self.path,
                    code = self.status.simple_code,
                    extended = self.status.extended_code,
                    "prepare failed: {}",
                    e
                );
                None
            }
        }
    }

    /// Rowid of the most recent successful insert on this connection, or 0.
    pub fn last_inserted_row_id(&self) -> i64 {
        self.conn.last_insert_rowid()
    }

    /// Rows modified by the most recent INSERT, UPDATE or DELETE.
    pub fn changes(&self) -> u64 {
        self.conn.changes()
    }

    pub fn simple_error_code(&self) -> i32 {
        self.status.simple_code
    }

    pub fn extended_error_code(&self) -> i32 {
        self.status.extended_code
    }

    pub fn error_message(&self) -> Option<&str> {
        self.status.message.as_deref()
    }

    pub fn status(&self) -> &ResultStatus {
        &self.status
    }

    /// Whether the last operation succeeded.
    pub fn succeeded(&self) -> bool {
        self.status.is_ok()
    }

    /// Borrow the underlying connection for engine-specific calls.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Raw `sqlite3*` of this connection.
    ///
    /// # Safety
    ///
    /// The pointer is only valid while `self` is alive and must not be
    /// closed or otherwise handed ownership of.
    pub unsafe fn raw_handle(&self) -> *mut ffi::sqlite3 {
        unsafe { self.conn.handle() }
    }

    /// Close the connection, reporting the engine's answer.
    ///
    /// If SQLite refuses (for example because statements are still alive on
    /// the raw handle), the database is handed back with its status set.
    pub fn close(self) -> Result<(), (Self, rusqlite::Error)> {
        let Database { path, conn, .. } = self;
        match conn.close() {
            Ok(()) => {
                debug!(path = %path, "closed database");
                Ok(())
            }
            Err((conn, e)) => {
                warn!(path = %path, "close failed: {}", e);
                let status = ResultStatus::from_error(&e);
                Err((Database { path, conn, status }, e))
            }
        }
    }
}

impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database")
            .field("path", &self.path)
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

fn open_error(path: &str, err: &rusqlite::Error) -> OpenError {
    let status = ResultStatus::from_error(err);
    warn!(
        path = %path,
        code = status.simple_code,
        extended = status.extended_code,
        "open failed: {}",
        err
    );
    OpenError {
        path: path.to_string(),
        simple_code: status.simple_code,
        extended_code: status.extended_code,
        message: status.message.unwrap_or_default(),
    }
}
