//! mytime library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use utils::path::expand_tilde;
use utils::time::{Clock, parse_datetime};

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, clock: &Clock) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg, clock),
        Commands::List => cli::commands::list::handle(&cli.command, cfg, clock),
        Commands::Show { .. } => cli::commands::show::handle(&cli.command, cfg, clock),
        Commands::Edit { .. } => cli::commands::edit::handle(&cli.command, cfg),
        Commands::Reset { .. } => cli::commands::reset::handle(&cli.command, cfg, clock),
        Commands::Del { .. } => cli::commands::del::handle(&cli.command, cfg),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;

    // --db overrides the configured database
    if let Some(custom_db) = &cli.db {
        cfg.database = expand_tilde(custom_db).to_string_lossy().to_string();
    }

    if let Some(lang) = &cli.lang {
        cfg.language = lang.clone();
    }

    let clock = match &cli.now {
        Some(s) => Clock::pinned(parse_datetime(s)?),
        None => Clock::system(),
    };

    dispatch(&cli, &cfg, &clock)
}
