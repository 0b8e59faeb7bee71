//! Knights-Tour-Rust: random and backtracking knight's tour trials.
//!
//! ## Usage
//!
//! - `knights-tour-rust random` - Pure random walks
//! - `knights-tour-rust hybrid --steps 48` - Random walk, then backtracking
//! - `knights-tour-rust` - Read the mode (`random` or `hybrid`) from stdin

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use knights_tour_rust::config::{Mode, Strategy, TrialConfig};
use knights_tour_rust::constants::{
    DEFAULT_BOARD_SIZE, DEFAULT_STEP_BUDGET, DEFAULT_THRESHOLDS, DEFAULT_TRIALS,
};
use knights_tour_rust::report::{format_summary, write_log};
use knights_tour_rust::trial::{run_trials, validate_sweep};

/// Knights-Tour-Rust: Las Vegas knight's tour simulator
#[derive(Parser)]
#[command(name = "knights-tour-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    run: RunArgs,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Random walk until the knight is stuck
    Random,
    /// Random walk for a fixed number of steps, then backtracking
    Hybrid {
        /// Random steps before backtracking takes over
        #[arg(long, default_value_t = DEFAULT_STEP_BUDGET)]
        steps: usize,
    },
}

#[derive(Args)]
struct RunArgs {
    /// Board size (n for an n x n board)
    #[arg(long, default_value_t = DEFAULT_BOARD_SIZE, global = true)]
    size: usize,

    /// Trials per threshold
    #[arg(long, default_value_t = DEFAULT_TRIALS, global = true)]
    trials: usize,

    /// Coverage threshold in [0, 1]; repeat for a sweep
    #[arg(long = "threshold", global = true)]
    thresholds: Vec<f64>,

    /// Base random seed for reproducible runs
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Cap on backtracking placements per trial
    #[arg(long, global = true)]
    node_limit: Option<u64>,

    /// Run trials on all cores
    #[arg(long, global = true)]
    parallel: bool,

    /// Directory for per-threshold run logs
    #[arg(long, default_value = ".", global = true)]
    output_dir: PathBuf,

    /// Skip writing run logs
    #[arg(long, global = true)]
    no_log: bool,
}

fn init_tracing(verbose: u8) -> Result<()> {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|e| anyhow!("failed to init subscriber: {e}"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let strategy = match cli.command {
        Some(Commands::Random) => Strategy::Random,
        Some(Commands::Hybrid { steps }) => Strategy::Hybrid { step_budget: steps },
        None => {
            println!("Select mode: 'random' (pure random walk) or 'hybrid' (random walk + backtracking)");
            let mode = Mode::read_from(io::stdin().lock()).context("invalid mode selection")?;
            Strategy::from(mode)
        }
    };

    run(strategy, &cli.run)
}

fn run(strategy: Strategy, args: &RunArgs) -> Result<()> {
    let mut config = TrialConfig::new(args.size, args.trials, 1.0, strategy)
        .parallel(args.parallel)
        .keep_results(!args.no_log);
    config.seed = args.seed;
    config.node_limit = args.node_limit;

    let thresholds = if args.thresholds.is_empty() {
        DEFAULT_THRESHOLDS.to_vec()
    } else {
        args.thresholds.clone()
    };

    validate_sweep(&config, &thresholds).context("invalid run configuration")?;

    // One batch at a time, so only one batch of per-trial results is held.
    for &threshold in &thresholds {
        let summary = run_trials(&config.clone().with_threshold(threshold))
            .context("invalid run configuration")?;
        println!("{}", format_summary(&summary));
        if summary.budget_exceeded > 0 {
            println!(
                "  ({} trials stopped at the node limit)",
                summary.budget_exceeded
            );
        }
        if !args.no_log {
            let path = write_log(&args.output_dir, &summary)?;
            println!("  log: {}", path.display());
        }
    }

    Ok(())
}
