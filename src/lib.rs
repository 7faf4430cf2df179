//! annostat library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod report;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use models::task_kind::TaskRegistry;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, registry: &TaskRegistry) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Import { .. } => cli::commands::import::handle(&cli.command, cfg),
        Commands::Status { .. } => cli::commands::status::handle(&cli.command, cfg, registry),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg, registry),
    }
}

pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Load config once, then apply any DB override from the command line.
    let mut cfg = Config::load();
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    // Task-kind behavior is resolved through one registry built at startup.
    let registry = TaskRegistry::new();

    dispatch(&cli, &cfg, &registry)
}
