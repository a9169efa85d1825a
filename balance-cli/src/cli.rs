use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "balance",
    about = "Smooth weighted round-robin selector",
    version = env!("CARGO_PKG_VERSION"),
    author,
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, env = "RUST_LOG", default_value = "warn", global = true)]
    pub log_level: String,

    #[arg(long, global = true, help = "Print Prometheus metrics after the command")]
    pub metrics: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Pick ten times from a=5, b=3, c=2 and print the sequence")]
    Demo,

    #[command(about = "Load a config and report the pick distribution")]
    Run {
        #[arg(short, long, help = "Config file (defaults to the platform config dir)")]
        config: Option<PathBuf>,

        #[arg(short, long, default_value = "1000", help = "Number of picks")]
        picks: usize,

        #[arg(short, long, help = "Output as JSON")]
        json: bool,
    },

    #[command(about = "Pick from many workers against a large random pool")]
    Bench {
        #[arg(long, default_value = "1000", help = "Number of entries")]
        items: usize,

        #[arg(long, default_value = "1000000", help = "Total number of picks")]
        picks: usize,

        #[arg(long, default_value = "8", help = "Concurrent workers")]
        workers: usize,
    },

    #[command(subcommand, about = "View and modify the config file")]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    #[command(about = "Write a sample config")]
    Init {
        #[arg(short, long)]
        config: Option<PathBuf>,

        #[arg(long, help = "Overwrite an existing file")]
        force: bool,
    },

    #[command(about = "Show the current config")]
    Show {
        #[arg(short, long)]
        config: Option<PathBuf>,

        #[arg(short, long, help = "Output as JSON")]
        json: bool,
    },

    #[command(about = "Append an entry")]
    Add {
        #[arg(help = "Entry id")]
        id: String,

        #[arg(help = "Entry weight")]
        weight: u32,

        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    #[command(about = "Remove an entry")]
    Remove {
        #[arg(help = "Entry id")]
        id: String,

        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}
