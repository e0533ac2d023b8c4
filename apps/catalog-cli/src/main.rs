//! `catalog` - command line access to the Pokemon reviews and run clubs catalogs

mod commands;
mod config;
mod dto;
mod logging;
mod output;
mod seed;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "catalog", version, about = "Pokemon reviews and run clubs catalogs")]
struct Cli {
    /// YAML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log filter, overrides `RUST_LOG` and `logging.level`
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Print results as JSON
    #[arg(long, global = true, default_value_t = false)]
    json: bool,

    #[command(subcommand)]
    command: commands::Command,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = config::AppConfig::load(cli.config.as_deref())?;
    logging::init(&config.logging, cli.log_level.as_deref())?;
    tracing::debug!(database = ?config.database, "Configuration loaded");

    commands::run(cli.command, &config, output::Output::new(cli.json)).await
}
