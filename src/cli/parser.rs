use clap::{Parser, Subcommand};

/// Command-line interface definition for sldb
/// Run SQL against a single SQLite database and report SQLite's result codes
#[derive(Parser)]
#[command(
    name = "sldb",
    version = env!("CARGO_PKG_VERSION"),
    about = "A small SQLite CLI: execute SQL and report SQLite's simple and extended result codes",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Print debug tracing to stderr
    #[arg(global = true, long = "debug")]
    pub debug: bool,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file and the database
    Init,

    /// Show the configuration
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,
    },

    /// Execute SQL (a single statement or a ';'-separated batch)
    Exec {
        /// SQL text to run
        sql: String,

        #[arg(long = "json", help = "Print the outcome as JSON")]
        json: bool,
    },

    /// Inspect or maintain the database
    Db {
        #[arg(long = "info", help = "Show database information")]
        info: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "json", requires = "info", help = "Print --info as JSON")]
        json: bool,
    },
}
