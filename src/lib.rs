//! Knights-Tour-Rust: Las Vegas search for knight's tours.
//!
//! Trials start the knight on a random square and either let it wander at
//! random until it is stuck, or wander for a fixed number of steps and then
//! finish the job with exhaustive backtracking. Each trial is classified
//! against a coverage threshold and the success rate is reported.
//!
//! ## Modules
//!
//! - [`constants`] - Knight offsets and run defaults
//! - [`position`] - Board coordinates
//! - [`board`] - Grid of visitation markers
//! - [`movegen`] - Legal knight move generation
//! - [`path`] - Ordered sequence of visited squares
//! - [`walk`] - Random walks, bounded and unbounded
//! - [`backtrack`] - Depth-first completion with retraction
//! - [`config`] - Strategy selection and run parameters
//! - [`trial`] - Trial orchestration and statistics
//! - [`report`] - Console summaries and run logs
//!
//! ## Example
//!
//! ```
//! use knights_tour_rust::config::{Strategy, TrialConfig};
//! use knights_tour_rust::trial::run_trials;
//!
//! let config = TrialConfig::new(8, 100, 0.5, Strategy::Random).with_seed(1);
//! let summary = run_trials(&config).unwrap();
//! println!("success rate: {:.5}", summary.probability());
//! ```

pub mod backtrack;
pub mod board;
pub mod config;
pub mod constants;
pub mod movegen;
pub mod path;
pub mod position;
pub mod report;
pub mod trial;
pub mod walk;
