//! sldatabase library root.
//!
//! [`Database`] owns one SQLite connection: open a file, execute SQL, read
//! the last inserted rowid and the simple/extended result codes of the last
//! operation. [`Stmt`] is its prepared-statement companion. The remaining
//! modules back the `sldb` command line tool.
//!
//! ```no_run
//! use sldatabase::Database;
//!
//! let mut db = Database::open("app.sqlite")?;
//! if !db.execute("CREATE TABLE t(id INTEGER PRIMARY KEY, v TEXT)") {
//!     eprintln!("{} ({})", db.simple_error_code(), db.extended_error_code());
//! }
//! db.execute("INSERT INTO t(v) VALUES('x')");
//! println!("row {}", db.last_inserted_row_id());
//! # Ok::<(), sldatabase::OpenError>(())
//! ```

pub mod cli;
pub mod config;
pub mod db;
pub mod errors;
pub mod ui;
pub mod utils;

pub use db::{Database, OpenOptions, ResultStatus, Stmt, describe_code};
pub use errors::{AppError, AppResult, OpenError};

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use tracing::Level;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Exec { .. } => cli::commands::exec::handle(&cli.command, cfg),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    if cli.debug {
        tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    }

    let mut cfg = Config::load()?;

    // Same resolution as `init`, so every command sees the same file
    if let Some(custom_db) = &cli.db {
        cfg.database = Config::resolve_database(custom_db)
            .to_string_lossy()
            .to_string();
    }

    dispatch(&cli, &cfg)
}
