//! Run configuration and validation.
//!
//! [`Mode`] is the user-facing strategy selector; [`TrialConfig`] carries
//! everything a batch of trials needs. Both are checked here so the engines
//! can assume well-formed input.

use std::fmt;
use std::io::BufRead;
use std::str::FromStr;

use thiserror::Error;

use crate::constants::{DEFAULT_BOARD_SIZE, DEFAULT_STEP_BUDGET, DEFAULT_TRIALS};

/// Invalid run configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("unrecognized mode '{0}' (expected 'random' or 'hybrid')")]
    UnknownMode(String),
    #[error("no mode given on standard input")]
    MissingMode,
    #[error("failed to read mode: {0}")]
    Input(String),
    #[error("board size must be at least 1")]
    EmptyBoard,
    #[error("trial count must be at least 1")]
    NoTrials,
    #[error("threshold {0} is outside [0, 1]")]
    ThresholdOutOfRange(f64),
}

/// Which search strategy a run uses.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Random walk to natural termination.
    Random,
    /// Bounded random walk, then backtracking completion.
    Hybrid,
}

impl Mode {
    pub fn name(self) -> &'static str {
        match self {
            Mode::Random => "random",
            Mode::Hybrid => "hybrid",
        }
    }

    /// Read a mode token from the first non-empty line of `input`.
    pub fn read_from<R: BufRead>(input: R) -> Result<Mode, ConfigError> {
        for line in input.lines() {
            let line = line.map_err(|e| ConfigError::Input(e.to_string()))?;
            let token = line.trim();
            if !token.is_empty() {
                return token.parse();
            }
        }
        Err(ConfigError::MissingMode)
    }
}

impl FromStr for Mode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "random" | "pure" => Ok(Mode::Random),
            "2" | "hybrid" | "backtrack" | "deterministic" => Ok(Mode::Hybrid),
            _ => Err(ConfigError::UnknownMode(s.trim().to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A strategy together with its parameters.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Strategy {
    Random,
    Hybrid {
        /// Random moves made before backtracking takes over.
        step_budget: usize,
    },
}

impl Strategy {
    pub fn mode(self) -> Mode {
        match self {
            Strategy::Random => Mode::Random,
            Strategy::Hybrid { .. } => Mode::Hybrid,
        }
    }
}

impl From<Mode> for Strategy {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Random => Strategy::Random,
            Mode::Hybrid => Strategy::Hybrid {
                step_budget: DEFAULT_STEP_BUDGET,
            },
        }
    }
}

/// Parameters for one batch of trials.
#[derive(Clone, Debug, PartialEq)]
pub struct TrialConfig {
    pub board_size: usize,
    pub trials: usize,
    /// Fraction of the board a path must cover to count as a success.
    pub threshold: f64,
    pub strategy: Strategy,
    /// Base seed; trial `i` uses `seed + i`. `None` draws from entropy.
    pub seed: Option<u64>,
    /// Cap on backtracking placements per trial. `None` is unlimited.
    pub node_limit: Option<u64>,
    /// Spread trials over the rayon thread pool.
    pub parallel: bool,
    /// Keep per-trial results (needed for run logs).
    pub keep_results: bool,
}

impl Default for TrialConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            trials: DEFAULT_TRIALS,
            threshold: 1.0,
            strategy: Strategy::Random,
            seed: None,
            node_limit: None,
            parallel: false,
            keep_results: true,
        }
    }
}

impl TrialConfig {
    pub fn new(board_size: usize, trials: usize, threshold: f64, strategy: Strategy) -> Self {
        Self {
            board_size,
            trials,
            threshold,
            strategy,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_node_limit(mut self, limit: u64) -> Self {
        self.node_limit = Some(limit);
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn keep_results(mut self, keep: bool) -> Self {
        self.keep_results = keep;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size == 0 {
            return Err(ConfigError::EmptyBoard);
        }
        if self.trials == 0 {
            return Err(ConfigError::NoTrials);
        }
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(ConfigError::ThresholdOutOfRange(self.threshold));
        }
        Ok(())
    }

    pub fn total_squares(&self) -> usize {
        self.board_size * self.board_size
    }

    /// Knight moves a path needs to count as a success.
    ///
    /// Covering `ceil(threshold * n^2)` squares takes one fewer move than
    /// squares.
    pub fn threshold_steps(&self) -> usize {
        let squares = (self.threshold * self.total_squares() as f64).ceil() as usize;
        squares.saturating_sub(1)
    }
}
