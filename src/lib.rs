//! rreserve library root.
//! Exposes the reservation wizard (validators, state machine, session
//! stores), the CLI parser and the high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod session;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::commands;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => commands::init::handle(cli),
        Commands::Config { .. } => commands::config::handle(cli, cfg),
        Commands::Log { .. } => commands::log::handle(cli, cfg),
        Commands::Start => commands::start::handle(cli, cfg),
        Commands::User { .. } => commands::user::handle(cli, cfg),
        Commands::Location { .. }
        | Commands::Pricerange { .. }
        | Commands::Cuisine { .. }
        | Commands::Ambience { .. }
        | Commands::Restaurant { .. } => commands::choose::handle(cli, cfg),
        Commands::Table { .. } => commands::table::handle(cli, cfg),
        Commands::Confirm { .. } => commands::confirm::handle(cli, cfg),
        Commands::Rate { .. } => commands::rate::handle(cli, cfg),
        Commands::Status => commands::status::handle(cli, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;

    // --db on the command line wins over the config file
    if let Some(custom_db) = &cli.db {
        cfg.database = utils::path::expand_tilde(custom_db)
            .to_string_lossy()
            .to_string();
    }

    dispatch(&cli, &cfg)
}
