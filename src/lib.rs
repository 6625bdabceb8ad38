//! spellpanel library root.
//! Exposes the CLI parser, the high-level run() function, and the
//! reconstruction engine modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod ingest;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::StudyConfig;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &StudyConfig) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Build { .. } => cli::commands::build::handle(&cli.command, cfg),
        Commands::Tenure { .. } => cli::commands::tenure::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Load the study configuration once; --config overrides the standard
    // location so several studies can coexist.
    let cfg = StudyConfig::load(cli.config.as_deref())?;

    dispatch(&cli, &cfg)
}
