//! Headless skyflap runner.
//!
//! Plays seeded sessions with the autopilot and prints a summary.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                   # 100 runs, fresh seeds
//!   cargo run --bin simulate -- -n 20 -s 42    # 20 reproducible runs

use anyhow::Context;
use clap::Parser;
use skyflap::constants::{DEFAULT_SIM_MAX_TICKS, DEFAULT_SIM_RUNS};
use skyflap::logging::{self, LogTarget};
use skyflap::simulator::{run_simulation, SimConfig};
use skyflap::{build_info, GameConfig};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "simulate", version, about = "Run autopilot sessions headless")]
struct Args {
    /// Number of sessions to play
    #[arg(short = 'n', long, default_value_t = DEFAULT_SIM_RUNS)]
    runs: u32,

    /// Base seed for reproducible runs
    #[arg(short, long)]
    seed: Option<u64>,

    /// Tick limit per session
    #[arg(short = 't', long, default_value_t = DEFAULT_SIM_MAX_TICKS)]
    max_ticks: u64,

    /// Config file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print a line per run
    #[arg(short, long)]
    verbose: bool,

    /// Log level when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init(&args.log_level, LogTarget::Stderr).context("failed to set up logging")?;

    let game = GameConfig::load(args.config.as_deref()).context("failed to load config")?;
    let sim = SimConfig {
        num_runs: args.runs,
        seed: args.seed,
        max_ticks_per_run: args.max_ticks,
        verbose: args.verbose,
    };

    println!("Skyflap simulator {}", build_info::version_string());
    println!();
    println!("Configuration:");
    println!("  Runs:           {}", sim.num_runs);
    println!("  Max Ticks:      {}", sim.max_ticks_per_run);
    if let Some(seed) = sim.seed {
        println!("  Seed:           {}", seed);
    }
    println!();

    let report = run_simulation(&sim, &game);
    println!("{}", report.to_text());
    Ok(())
}
