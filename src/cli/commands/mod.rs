pub mod config;
pub mod db;
pub mod exec;
pub mod init;

use crate::config::Config;
use crate::db::Database;
use crate::errors::AppResult;

/// Open the configured database with the configured options.
pub fn open_database(cfg: &Config) -> AppResult<Database> {
    Ok(Database::open_with(&cfg.database, &cfg.open_options())?)
}
