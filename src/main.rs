//! List vs hash-set lookup scaling benchmark.
//!
//! Run with: cargo run --release -- run --format csv > results.csv

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;

use lookup_scaling::logging::init_logging;
use lookup_scaling::{seeded_rng, sweep, value_layout, MonotonicClock, SweepConfig};

#[derive(Parser)]
#[command(name = "lookup_scaling", version, about = "Compare list and hash-set lookup scaling")]
struct Cli {
    /// Emit logs as JSON.
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Sweep container sizes and time lookups for every strategy
    Run {
        /// YAML sweep configuration; built-in defaults when omitted
        #[arg(long, short)]
        config: Option<PathBuf>,

        #[arg(long, short, value_enum, default_value = "text")]
        format: Format,

        /// Overrides the configured seed
        #[arg(long)]
        seed: Option<u64>,

        /// Overrides the configured trial count
        #[arg(long)]
        trials: Option<u32>,
    },
    /// Print a generated pool with probe positions flagged, as CSV
    Layout {
        #[arg(long)]
        size: i64,

        #[arg(long)]
        lookups: i64,

        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Csv,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging("info", cli.json_logs);

    let command = cli.command.unwrap_or(Command::Run {
        config: None,
        format: Format::Text,
        seed: None,
        trials: None,
    });

    match command {
        Command::Run {
            config,
            format,
            seed,
            trials,
        } => run(config, format, seed, trials),
        Command::Layout {
            size,
            lookups,
            seed,
        } => layout(size, lookups, seed),
    }
}

fn run(
    config_path: Option<PathBuf>,
    format: Format,
    seed: Option<u64>,
    trials: Option<u32>,
) -> anyhow::Result<()> {
    let mut config = match &config_path {
        Some(path) => SweepConfig::load(path)
            .with_context(|| format!("loading sweep config {}", path.display()))?,
        None => SweepConfig::default(),
    };
    if let Some(seed) = seed {
        config.seed = Some(seed);
    }
    if let Some(trials) = trials {
        config.num_trials = trials;
    }
    info!(
        combinations = config.combinations(),
        seed = ?config.seed,
        platform = std::env::consts::ARCH,
        "sweep configured"
    );

    let mut rng = seeded_rng(config.seed);
    let table = sweep(&mut rng, &MonotonicClock, &config).context("sweep failed")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match format {
        Format::Csv => table.write_csv(&mut out)?,
        Format::Json => writeln!(out, "{}", table.to_json()?)?,
        Format::Text => {
            writeln!(out, "{}", "=".repeat(80))?;
            writeln!(out, "                 List vs Set Lookup Scaling ({} trials)", config.num_trials)?;
            write!(out, "{}", table.summary())?;
            writeln!(out, "{}", "=".repeat(80))?;
        }
    }
    Ok(())
}

fn layout(size: i64, lookups: i64, seed: Option<u64>) -> anyhow::Result<()> {
    let mut rng = seeded_rng(seed);
    let points = value_layout(&mut rng, size, lookups).context("generating value layout")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "Index,Value,Lookup")?;
    for p in points {
        writeln!(out, "{},{},{}", p.index, p.value, u8::from(p.is_lookup))?;
    }
    Ok(())
}
