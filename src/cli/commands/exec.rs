use crate::cli::commands::open_database;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::{Database, describe_code};
use crate::errors::{AppError, AppResult};
use crate::ui::messages;
use crate::utils::colors::{CYAN, GREY, RESET, color_for_code};
use serde::Serialize;

/// Outcome of one `exec` run.
#[derive(Debug, Serialize)]
pub struct ExecReport {
    pub success: bool,
    pub simple_code: i32,
    pub extended_code: i32,
    pub message: Option<String>,
    pub last_insert_rowid: i64,
    pub changes: u64,
}

impl ExecReport {
    pub fn from_database(db: &Database, success: bool) -> Self {
        Self {
            success,
            simple_code: db.simple_error_code(),
            extended_code: db.extended_error_code(),
            message: db.error_message().map(str::to_string),
            last_insert_rowid: db.last_inserted_row_id(),
            changes: db.changes(),
        }
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Exec { sql, json } = cmd {
        let mut db = open_database(cfg)?;
        let ok = db.execute(sql);
        let report = ExecReport::from_database(&db, ok);

        if *json {
            let out = serde_json::to_string_pretty(&report)
                .map_err(|e| AppError::Other(e.to_string()))?;
            println!("{}", out);
        } else if ok {
            messages::success("Statement executed");
            println!("{}• Last row id:{} {}", CYAN, RESET, report.last_insert_rowid);
            println!("{}• Changes:{} {}", CYAN, RESET, report.changes);
        } else {
            println!(
                "{}• Code:{} {}{}{} {}({}){}",
                CYAN,
                RESET,
                color_for_code(report.simple_code),
                report.simple_code,
                RESET,
                GREY,
                describe_code(report.simple_code),
                RESET
            );
            println!(
                "{}• Extended code:{} {}",
                CYAN, RESET, report.extended_code
            );
        }

        if !ok {
            return Err(AppError::from_status(db.status()));
        }
    }

    Ok(())
}
