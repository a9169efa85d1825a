use anyhow::{Context, Result};
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Color, Table};
use serde::Serialize;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

use balance_core::modules::config as core_config;
use balance_core::Balance;

use crate::cli::ConfigCommands;
use crate::config_commands;

const BENCH_MIN_WEIGHT: u32 = 50;
const BENCH_MAX_WEIGHT: u32 = 150;

/// One row of a pick distribution report.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DistributionRow {
    pub id: String,
    pub weight: u32,
    pub picks: usize,
    /// Share of all picks, in percent
    pub share: f64,
    /// Share the weight alone predicts, in percent
    pub expected: f64,
}

pub fn handle_config_command(cmd: ConfigCommands) -> Result<()> {
    match cmd {
        ConfigCommands::Init { config, force } => {
            config_commands::init_config(&resolve_config_path(config)?, force)
        },
        ConfigCommands::Show { config, json } => {
            config_commands::show_config(&resolve_config_path(config)?, json)
        },
        ConfigCommands::Add { id, weight, config } => {
            config_commands::add_entry(&resolve_config_path(config)?, &id, weight)
        },
        ConfigCommands::Remove { id, config } => {
            config_commands::remove_entry(&resolve_config_path(config)?, &id)
        },
    }
}

pub fn resolve_config_path(path: Option<PathBuf>) -> Result<PathBuf> {
    match path {
        Some(path) => Ok(path),
        None => core_config::default_config_path().context("no --config given"),
    }
}

pub fn handle_demo() -> Result<()> {
    let balance = Balance::with_entries([("a", 5), ("b", 3), ("c", 2)])?;
    let picks: Vec<String> = (0..10).filter_map(|_| balance.get()).collect();
    println!("{}", picks.join(" "));
    Ok(())
}

pub fn handle_run(config: Option<PathBuf>, picks: usize, json: bool) -> Result<()> {
    let path = resolve_config_path(config)?;
    let config = core_config::load_config(&path)
        .with_context(|| format!("loading {}", path.display()))?;

    if config.entries.is_empty() {
        println!("{} {}", "No entries configured in".yellow(), path.display());
        return Ok(());
    }

    let balance = Balance::from_config(&config)?;
    let rows = distribution(&balance, picks);

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Id", "Weight", "Picks", "Share", "Expected"]);
    for row in &rows {
        let picks_cell = if row.weight == 0 {
            Cell::new(row.picks).fg(Color::DarkGrey)
        } else {
            Cell::new(row.picks)
        };
        table.add_row(vec![
            Cell::new(&row.id),
            Cell::new(row.weight),
            picks_cell,
            Cell::new(format!("{:.2}%", row.share)),
            Cell::new(format!("{:.2}%", row.expected)),
        ]);
    }

    println!("{table}");
    println!("\n{} picks across {} entries", picks, rows.len());
    Ok(())
}

/// Pick `picks` times and tally the results per live entry, in pool order.
pub fn distribution(balance: &Balance, picks: usize) -> Vec<DistributionRow> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for _ in 0..picks {
        if let Some(id) = balance.get() {
            *counts.entry(id).or_default() += 1;
        }
    }

    let total_weight = balance.total_weight();
    balance
        .snapshot()
        .into_iter()
        .map(|entry| {
            let count = counts.get(&entry.id).copied().unwrap_or(0);
            DistributionRow {
                share: percent(count as f64, picks as f64),
                expected: percent(f64::from(entry.weight), total_weight as f64),
                picks: count,
                weight: entry.weight,
                id: entry.id,
            }
        })
        .collect()
}

fn percent(part: f64, whole: f64) -> f64 {
    if whole == 0.0 {
        0.0
    } else {
        part * 100.0 / whole
    }
}

pub async fn handle_bench(items: usize, picks: usize, workers: usize) -> Result<()> {
    let workers = workers.max(1);
    let balance = Arc::new(random_pool(items)?);
    info!(items, picks, workers, total_weight = balance.total_weight(), "Starting bench");

    let started = Instant::now();
    let mut handles = Vec::with_capacity(workers);
    for worker in 0..workers {
        let share = picks / workers + usize::from(worker < picks % workers);
        let balance = Arc::clone(&balance);
        handles.push(tokio::task::spawn_blocking(move || {
            for _ in 0..share {
                let _ = balance.get();
            }
        }));
    }
    for handle in handles {
        handle.await.context("bench worker panicked")?;
    }
    let elapsed = started.elapsed();

    let served = balance.stats().total_picks;
    let rate = served as f64 / elapsed.as_secs_f64().max(f64::EPSILON);
    println!("{}", "Bench complete".cyan().bold());
    println!("  Entries: {}", items);
    println!("  Workers: {}", workers);
    println!("  Picks:   {}", served);
    println!("  Elapsed: {:.3}s", elapsed.as_secs_f64());
    println!("  Rate:    {:.0} picks/s", rate);
    Ok(())
}

/// `server-<i>` entries with weights in `[50, 150)`.
fn random_pool(items: usize) -> Result<Balance> {
    use rand::Rng;

    let mut rng = rand::thread_rng();
    let balance = Balance::new();
    for i in 0..items {
        balance.add(format!("server-{i}"), rng.gen_range(BENCH_MIN_WEIGHT..BENCH_MAX_WEIGHT))?;
    }
    Ok(balance)
}
