//! Single-draw lottery simulator.
//!
//! Generates a field of players, sells tickets, draws the prize tiers and
//! prints the results.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lottery_sim::flush::flush_to_json;
use lottery_sim::model::ConfigBounds;
use lottery_sim::{ConsoleInput, InputProvider, LotteryConfig, LotteryEngine, ScriptedInput, report};

#[derive(Parser)]
#[command(name = "lottery-sim")]
#[command(about = "Simulate a single lottery draw with tiered prizes")]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// RNG seed; a random one is chosen and logged when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Load the run config from a JSON file
    #[arg(long, conflicts_with = "interactive")]
    config: Option<PathBuf>,

    /// Prompt for the run config instead of using the defaults
    #[arg(short, long)]
    interactive: bool,

    /// Tickets to request for Player 1 instead of prompting
    #[arg(long)]
    tickets: Option<u32>,

    /// Export players and draw results to this directory
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Exit without waiting for Enter
    #[arg(long)]
    no_pause: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with prompts
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    let mut console = ConsoleInput::new(io::stdin().lock(), io::stdout());

    let config = match &cli.config {
        Some(path) => LotteryConfig::from_json_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None if cli.interactive => LotteryConfig::prompt(&mut console, &ConfigBounds::default()),
        None => LotteryConfig::default(),
    };

    let seed = cli.seed.unwrap_or_else(rand::random);
    tracing::info!(seed, ?config, "starting lottery");

    let mut engine = LotteryEngine::seeded(config, seed).context("invalid lottery config")?;
    let others = engine.generate_population();
    println!();
    println!("{}", report::welcome(&config, others));

    match cli.tickets {
        Some(tickets) => engine.sell_tickets(&mut ScriptedInput::new([tickets.to_string()])),
        None => engine.sell_tickets(&mut console),
    }
    println!();
    println!("Tickets purchased by all players.");
    println!();

    let result = engine.draw();
    println!("{}", report::report(&result, &config));

    if let Some(dir) = &cli.output {
        let summary = lottery_sim::RunSummary {
            players: engine.players().to_vec(),
            result,
        };
        flush_to_json(&summary, &config, dir)
            .with_context(|| format!("exporting results to {}", dir.display()))?;
        println!("Results written to {}", dir.display());
    }

    if !cli.no_pause {
        console.read_line("Press Enter to exit...");
    }
    Ok(())
}
