//! Trial orchestration and success statistics.
//!
//! Each trial owns a fresh board, a uniformly random start square and its own
//! random generator, so trials can run in any order (or in parallel) without
//! changing the aggregate.

use fastrand::Rng;
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::backtrack::{Completion, SearchOutcome};
use crate::board::Board;
use crate::config::{ConfigError, Strategy, TrialConfig};
use crate::path::Path;
use crate::position::Position;
use crate::walk::{walk, walk_bounded};

/// Everything recorded about one trial.
#[derive(Clone, Debug, PartialEq)]
pub struct TrialResult {
    pub start: Position,
    pub path: Path,
    pub success: bool,
    /// Outcome of the completion search; `None` for pure random walks.
    pub search: Option<SearchOutcome>,
    /// Board as the trial left it.
    pub board: Board,
}

impl TrialResult {
    /// Squares visited, start included.
    pub fn length(&self) -> usize {
        self.path.len()
    }
}

/// Aggregate statistics for one batch of trials at a single threshold.
#[derive(Clone, Debug, PartialEq)]
pub struct TrialSummary {
    pub threshold: f64,
    pub strategy: Strategy,
    pub board_size: usize,
    pub successes: usize,
    pub trials: usize,
    /// Trials whose completion search hit the node limit.
    pub budget_exceeded: usize,
    /// Per-trial records, in trial order. Empty when results are not kept.
    pub results: Vec<TrialResult>,
}

impl TrialSummary {
    /// Empirical success probability.
    pub fn probability(&self) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        self.successes as f64 / self.trials as f64
    }
}

/// Run one trial from `start`.
pub fn run_trial(config: &TrialConfig, start: Position, rng: &mut Rng) -> TrialResult {
    let threshold_steps = config.threshold_steps();
    let mut board = Board::new(config.board_size);

    let (path, search) = match config.strategy {
        Strategy::Random => (walk(&mut board, start, rng), None),
        Strategy::Hybrid { step_budget } => {
            let mut path = walk_bounded(&mut board, start, step_budget, rng);
            let mut completion = match config.node_limit {
                Some(limit) => Completion::with_node_limit(limit),
                None => Completion::new(),
            };
            let outcome = completion.search(&mut board, &mut path, threshold_steps);
            if outcome == SearchOutcome::BudgetExceeded {
                warn!(%start, nodes = completion.nodes(), "completion search hit node limit");
            }
            (path, Some(outcome))
        }
    };

    let success = path.steps() >= threshold_steps;
    debug!(%start, length = path.len(), success, "trial finished");

    TrialResult {
        start,
        path,
        success,
        search,
        board,
    }
}

fn trial_rng(seed: Option<u64>, index: usize) -> Rng {
    match seed {
        Some(seed) => Rng::with_seed(seed.wrapping_add(index as u64)),
        None => Rng::new(),
    }
}

fn run_indexed(config: &TrialConfig, index: usize) -> TrialResult {
    let mut rng = trial_rng(config.seed, index);
    let n = config.board_size;
    let start = Position::new(rng.usize(..n), rng.usize(..n));
    run_trial(config, start, &mut rng)
}

/// Running totals, combined with an order-independent reduction.
#[derive(Default)]
struct Tally {
    successes: usize,
    budget_exceeded: usize,
    results: Vec<TrialResult>,
}

impl Tally {
    fn record(mut self, result: TrialResult, keep: bool) -> Self {
        self.successes += result.success as usize;
        self.budget_exceeded += (result.search == Some(SearchOutcome::BudgetExceeded)) as usize;
        if keep {
            self.results.push(result);
        }
        self
    }

    fn merge(mut self, other: Tally) -> Self {
        self.successes += other.successes;
        self.budget_exceeded += other.budget_exceeded;
        self.results.extend(other.results);
        self
    }
}

/// Run `config.trials` independent trials and aggregate the results.
pub fn run_trials(config: &TrialConfig) -> Result<TrialSummary, ConfigError> {
    config.validate()?;
    let keep = config.keep_results;

    let tally = if config.parallel {
        (0..config.trials)
            .into_par_iter()
            .fold(Tally::default, |t, i| t.record(run_indexed(config, i), keep))
            .reduce(Tally::default, Tally::merge)
    } else {
        (0..config.trials).fold(Tally::default(), |t, i| {
            t.record(run_indexed(config, i), keep)
        })
    };

    let summary = TrialSummary {
        threshold: config.threshold,
        strategy: config.strategy,
        board_size: config.board_size,
        successes: tally.successes,
        trials: config.trials,
        budget_exceeded: tally.budget_exceeded,
        results: tally.results,
    };

    info!(
        threshold = summary.threshold,
        mode = %config.strategy.mode(),
        successes = summary.successes,
        trials = summary.trials,
        "batch finished"
    );
    Ok(summary)
}

/// Check `config` against every threshold of a sweep before anything runs.
pub fn validate_sweep(config: &TrialConfig, thresholds: &[f64]) -> Result<(), ConfigError> {
    config.validate()?;
    for &t in thresholds {
        config.clone().with_threshold(t).validate()?;
    }
    Ok(())
}

/// Run one batch per threshold with otherwise identical settings.
pub fn run_threshold_sweep(
    config: &TrialConfig,
    thresholds: &[f64],
) -> Result<Vec<TrialSummary>, ConfigError> {
    validate_sweep(config, thresholds)?;
    thresholds
        .iter()
        .map(|&t| run_trials(&config.clone().with_threshold(t)))
        .collect()
}
