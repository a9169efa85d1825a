//! `balance` - command-line front end for the smooth weighted round-robin
//! selector.
//!
//! - `demo`: the classic a=5, b=3, c=2 sequence
//! - `run`: pick distribution for a config file
//! - `bench`: concurrent throughput against a large random pool
//! - `config`: manage the JSON config file

use anyhow::{Context, Result};
use clap::Parser;

mod cli;
mod commands;
mod config_commands;

use balance_core::{metrics, modules::logger};
use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init_logger(&cli.log_level);

    if cli.metrics {
        metrics::init_metrics().context("installing Prometheus recorder failed")?;
    }

    match cli.command {
        Commands::Demo => commands::handle_demo()?,
        Commands::Run { config, picks, json } => commands::handle_run(config, picks, json)?,
        Commands::Bench { items, picks, workers } => {
            commands::handle_bench(items, picks, workers).await?
        },
        Commands::Config(cmd) => commands::handle_config_command(cmd)?,
    }

    if cli.metrics {
        print!("{}", metrics::render_metrics());
    }
    Ok(())
}
