use crate::cli::commands::open_database;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::Database;
use crate::db::info::{collect_db_info, integrity_check, print_db_info};
use crate::errors::{AppError, AppResult};
use crate::utils::colors::{CYAN, GREEN, RED, RESET};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        info,
        check,
        vacuum,
        json,
    } = cmd
    {
        // Opened on first use, shared by every step below
        let mut db: Option<Database> = None;

        fn get_db<'a>(db: &'a mut Option<Database>, cfg: &Config) -> AppResult<&'a mut Database> {
            if db.is_none() {
                *db = Some(open_database(cfg)?);
            }
            db.as_mut()
                .ok_or_else(|| AppError::Other("database not opened".into()))
        }

        //
        // 1) INFO
        //
        if *info {
            let db = get_db(&mut db, cfg)?;
            if *json {
                let info = collect_db_info(db)?;
                let out = serde_json::to_string_pretty(&info)
                    .map_err(|e| AppError::Other(e.to_string()))?;
                println!("{}", out);
            } else {
                print_db_info(db)?;
            }
        }

        //
        // 2) CHECK
        //
        if *check {
            let db = get_db(&mut db, cfg)?;

            println!("{}▶ Running integrity check…{}", CYAN, RESET);

            let integrity = integrity_check(db)?;
            if integrity == "ok" {
                println!("{}✔ Integrity check passed.{}\n", GREEN, RESET);
            } else {
                println!("{}✘ Integrity check failed:{} {}\n", RED, RESET, integrity);
            }
        }

        //
        // 3) VACUUM
        //
        if *vacuum {
            let db = get_db(&mut db, cfg)?;
            println!("{}▶ Running VACUUM…{}", CYAN, RESET);

            if !db.execute("VACUUM") {
                return Err(AppError::from_status(db.status()));
            }

            println!("{}✔ Vacuum completed.{}\n", GREEN, RESET);
        }
    }

    Ok(())
}
