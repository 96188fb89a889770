//! Summary information about an open database file.

use crate::db::Database;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, RESET, YELLOW};
use serde::Serialize;
use std::fs;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DbInfo {
    pub path: String,
    pub file_size: u64,
    pub page_size: i64,
    pub page_count: i64,
    pub tables: Vec<String>,
    pub sqlite_version: String,
}

pub fn collect_db_info(db: &Database) -> AppResult<DbInfo> {
    let conn = db.connection();

    // In-memory databases have no file
    let file_size = fs::metadata(db.path()).map(|m| m.len()).unwrap_or(0);

    let page_size: i64 = conn.query_row("PRAGMA page_size", [], |row| row.get(0))?;
    let page_count: i64 = conn.query_row("PRAGMA page_count", [], |row| row.get(0))?;

    let mut stmt = conn.prepare(
        "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
    )?;
    let tables = stmt
        .query_map([], |row| row.get::<_, String>(0))?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(DbInfo {
        path: db.path().to_string(),
        file_size,
        page_size,
        page_count,
        tables,
        sqlite_version: rusqlite::version().to_string(),
    })
}

pub fn print_db_info(db: &Database) -> AppResult<()> {
    let info = collect_db_info(db)?;
    let file_kb = (info.file_size as f64) / 1024.0;

    println!();
    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, info.path, RESET);
    println!("{}• Size:{} {:.2} KB", CYAN, RESET, file_kb);
    println!(
        "{}• Pages:{} {} x {} bytes",
        CYAN, RESET, info.page_count, info.page_size
    );
    println!(
        "{}• Tables:{} {}{}{}",
        CYAN,
        RESET,
        GREEN,
        info.tables.len(),
        RESET
    );
    for name in &info.tables {
        println!("    {}", name);
    }
    println!("{}• SQLite:{} {}", CYAN, RESET, info.sqlite_version);
    println!();
    Ok(())
}

/// Run `PRAGMA integrity_check` and return its first line (`"ok"` when healthy).
pub fn integrity_check(db: &Database) -> AppResult<String> {
    let result: String = db
        .connection()
        .query_row("PRAGMA integrity_check", [], |row| row.get(0))?;
    Ok(result)
}
