//! Prepared statements bound to a [`Database`](crate::db::Database).

use crate::db::status::ResultStatus;
use rusqlite::types::Value;
use rusqlite::{Statement, ToSql};
use tracing::warn;

/// A compiled statement.
///
/// Holds the owning database mutably borrowed, so the connection cannot be
/// used elsewhere (or closed) while the statement lives. Each call refreshes
/// the database's result codes the same way `Database::execute` does.
pub struct Stmt<'db> {
    stmt: Statement<'db>,
    status: &'db mut ResultStatus,
}

impl<'db> Stmt<'db> {
    pub(crate) fn new(stmt: Statement<'db>, status: &'db mut ResultStatus) -> Self {
        Self { stmt, status }
    }

    /// Bind `value` to the 1-based parameter `index`.
    pub fn bind<T: ToSql>(&mut self, index: usize, value: T) -> bool {
        let result = self.stmt.raw_bind_parameter(index, value);
        self.record(result).is_some()
    }

    /// Bind `value` to a named parameter such as `:name` or `$name`.
    pub fn bind_named<T: ToSql>(&mut self, name: &str, value: T) -> bool {
        let result = match self.stmt.parameter_index(name) {
            Ok(Some(index)) => self.stmt.raw_bind_parameter(index, value),
            Ok(None) => Err(rusqlite::Error::InvalidParameterName(name.to_string())),
            Err(e) => Err(e),
        };
        self.record(result).is_some()
    }

    /// Reset every parameter to NULL.
    pub fn clear_bindings(&mut self) {
        self.stmt.clear_bindings();
    }

    /// Run the statement to completion. Bindings are kept for the next run.
    pub fn execute(&mut self) -> bool {
        let result = self.stmt.raw_execute();
        self.record(result).is_some()
    }

    /// Run the statement and collect every row it yields.
    pub fn query(&mut self) -> Option<Vec<Vec<Value>>> {
        let result = collect_rows(&mut self.stmt);
        self.record(result)
    }

    pub fn column_names(&self) -> Vec<String> {
        self.stmt
            .column_names()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    pub fn parameter_count(&self) -> usize {
        self.stmt.parameter_count()
    }

    /// Outcome of the last call on this statement.
    pub fn status(&self) -> &ResultStatus {
        self.status
    }

    fn record<T>(&mut self, result: rusqlite::Result<T>) -> Option<T> {
        match result {
            Ok(value) => {
                *self.status = ResultStatus::ok();
                Some(value)
            }
            Err(e) => {
                *self.status = ResultStatus::from_error(&e);
                warn!(
                    code = self.status.simple_code,
                    extended = self.status.extended_code,
                    "statement failed: {}",
                    e
                );
                None
            }
        }
    }
}

fn collect_rows(stmt: &mut Statement<'_>) -> rusqlite::Result<Vec<Vec<Value>>> {
    let width = stmt.column_count();
    let mut rows = stmt.raw_query();
    let mut out = Vec::new();
    while let Some(row) = rows.next()? {
        let mut values = Vec::with_capacity(width);
        for i in 0..width {
            values.push(row.get::<_, Value>(i)?);
        }
        out.push(values);
    }
    Ok(out)
}
