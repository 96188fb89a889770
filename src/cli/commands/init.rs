use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::Database;
use crate::errors::AppResult;
use crate::ui::messages;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database file
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.as_deref(), cli.test)?;

    println!("⚙️  Initializing sldb…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database   : {}", &cfg.database);

    // Opening creates the file
    let db = Database::open_with(&cfg.database, &cfg.open_options())?;
    db.close().map_err(|(_, e)| e)?;

    messages::success(format!("Database initialized at {}", &cfg.database));
    Ok(())
}
