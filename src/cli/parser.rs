use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for mytime
/// CLI application to track named events and their live counters with SQLite
#[derive(Parser)]
#[command(
    name = "mytime",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track named events and show how long ago (or how far away) they are",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Override the display language (fr, en)
    #[arg(global = true, long = "lang")]
    pub lang: Option<String>,

    /// Pin the current time (YYYY-MM-DD HH:MM[:SS] or RFC 3339)
    #[arg(global = true, long = "now", hide = true)]
    pub now: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Create a new event
    Add {
        /// Event name (a placeholder is used when empty)
        name: Option<String>,

        /// Event date and time; defaults to now
        #[arg(long = "at", value_name = "DATETIME")]
        at: Option<String>,
    },

    /// List all events, most recent first
    List,

    /// Show the counter of one event
    Show {
        id: i64,

        #[arg(long, short, help = "Refresh the counter every second")]
        watch: bool,

        #[arg(
            long,
            requires = "watch",
            value_name = "N",
            help = "Stop watching after N refreshes"
        )]
        ticks: Option<u64>,
    },

    /// Change the name and/or date of an event
    Edit {
        id: i64,

        #[arg(long = "name", help = "New event name")]
        name: Option<String>,

        #[arg(long = "at", value_name = "DATETIME", help = "New event date and time")]
        at: Option<String>,
    },

    /// Restart the counter of an event from now
    Reset { id: i64 },

    /// Delete an event
    Del {
        id: i64,

        #[arg(long, short, help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },

    /// Export all events
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
