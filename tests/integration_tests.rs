//! Integration tests for knights-tour-rust
//!
//! End-to-end scenarios across walk, backtracking, trial orchestration and
//! run-log writing.

use std::fs;

use fastrand::Rng;
use tempfile::TempDir;

use knights_tour_rust::backtrack::{Completion, SearchOutcome, complete};
use knights_tour_rust::board::Board;
use knights_tour_rust::config::{Mode, Strategy, TrialConfig};
use knights_tour_rust::constants::TRIAL_DELIMITER;
use knights_tour_rust::movegen::legal_moves;
use knights_tour_rust::position::Position;
use knights_tour_rust::report::{format_summary, log_file_name, write_log};
use knights_tour_rust::trial::{run_threshold_sweep, run_trial, run_trials};
use knights_tour_rust::walk::{walk, walk_bounded};

// =============================================================================
// Random walk scenarios
// =============================================================================

#[test]
fn test_walk_on_1x1_board_has_length_one() {
    for seed in 0..20 {
        let mut rng = Rng::with_seed(seed);
        let mut board = Board::new(1);
        let path = walk(&mut board, Position::new(0, 0), &mut rng);
        assert_eq!(path.len(), 1);
    }
}

#[test]
fn test_full_coverage_random_walk_is_rare() {
    let cfg = TrialConfig::new(8, 10_000, 1.0, Strategy::Random)
        .with_seed(2024)
        .keep_results(false);
    let summary = run_trials(&cfg).unwrap();
    assert_eq!(summary.trials, 10_000);
    assert!(
        summary.probability() < 0.05,
        "random full tours should be rare, got {}",
        summary.probability()
    );
}

#[test]
fn test_random_walk_from_corner_rarely_completes() {
    let cfg = TrialConfig::new(8, 1, 1.0, Strategy::Random);
    let mut full = 0;
    for seed in 0..500 {
        let mut rng = Rng::with_seed(seed);
        let r = run_trial(&cfg, Position::new(0, 0), &mut rng);
        assert!(r.path.is_valid());
        assert!(r.length() <= 64);
        assert_eq!(r.success, r.length() == 64);
        full += r.success as usize;
    }
    assert!(full < 50);
}

#[test]
fn test_zero_threshold_every_strategy_succeeds() {
    for strategy in [Strategy::Random, Strategy::Hybrid { step_budget: 10 }] {
        let cfg = TrialConfig::new(8, 200, 0.0, strategy).with_seed(11);
        let summary = run_trials(&cfg).unwrap();
        assert_eq!(summary.successes, 200);
        assert!(format_summary(&summary).ends_with("1.00000"));
    }
}

// =============================================================================
// Hybrid scenarios
// =============================================================================

#[test]
fn test_hybrid_with_large_step_budget_leaves_state_on_failure() {
    for seed in 0..50 {
        let mut rng = Rng::with_seed(seed);
        let mut board = Board::new(8);
        let mut path = walk_bounded(&mut board, Position::new(0, 0), 63, &mut rng);
        let board_before = board.clone();
        let path_before = path.clone();

        if !complete(&mut board, &mut path, 63) {
            assert_eq!(board, board_before);
            assert_eq!(path, path_before);
        } else {
            assert_eq!(path.len(), 64);
        }
    }
}

#[test]
fn test_hybrid_completes_5x5_from_corner() {
    let cfg = TrialConfig::new(5, 1, 1.0, Strategy::Hybrid { step_budget: 0 });
    let mut rng = Rng::with_seed(0);
    let r = run_trial(&cfg, Position::new(0, 0), &mut rng);
    assert!(r.success);
    assert_eq!(r.search, Some(SearchOutcome::Completed));
    assert_eq!(r.length(), 25);
    assert!(r.board.is_full());
}

#[test]
fn test_hybrid_beats_pure_random_at_moderate_threshold() {
    let random = TrialConfig::new(6, 200, 0.8, Strategy::Random).with_seed(77);
    let hybrid = TrialConfig::new(6, 200, 0.8, Strategy::Hybrid { step_budget: 20 })
        .with_seed(77)
        .with_node_limit(100_000);
    let r = run_trials(&random).unwrap();
    let h = run_trials(&hybrid).unwrap();
    assert!(h.successes >= r.successes);
}

#[test]
fn test_node_limit_is_counted_as_failure() {
    let cfg = TrialConfig::new(8, 5, 1.0, Strategy::Hybrid { step_budget: 0 })
        .with_seed(3)
        .with_node_limit(5);
    let summary = run_trials(&cfg).unwrap();
    assert_eq!(summary.successes, 0);
    assert_eq!(summary.budget_exceeded, 5);
    for r in &summary.results {
        assert_eq!(r.length(), 1);
        assert_eq!(r.board.visited_count(), 1);
    }
}

#[test]
fn test_completion_counts_nodes() {
    let mut board = Board::new(5);
    board.mark(Position::new(0, 0), 0);
    let mut path = knights_tour_rust::path::Path::new(Position::new(0, 0));
    let mut search = Completion::new();
    assert_eq!(search.search(&mut board, &mut path, 10), SearchOutcome::Completed);
    assert!(search.nodes() >= 10);
}

// =============================================================================
// Orchestration
// =============================================================================

#[test]
fn test_parallel_matches_sequential() {
    let base = TrialConfig::new(6, 300, 0.7, Strategy::Hybrid { step_budget: 15 })
        .with_seed(123)
        .with_node_limit(50_000);
    let seq = run_trials(&base).unwrap();
    let par = run_trials(&base.clone().parallel(true)).unwrap();
    assert_eq!(seq, par);
}

#[test]
fn test_every_recorded_path_is_a_knight_path() {
    let cfg = TrialConfig::new(7, 100, 0.9, Strategy::Random).with_seed(8);
    let summary = run_trials(&cfg).unwrap();
    for r in &summary.results {
        assert_eq!(r.path.start(), r.start);
        assert!(r.path.is_valid());
        assert_eq!(r.board.visited_count(), r.length());
        assert!(legal_moves(r.path.last(), &r.board).is_empty() || r.board.is_full());
    }
}

// =============================================================================
// Run logs
// =============================================================================

#[test]
fn test_write_log_one_block_per_trial() {
    let dir = TempDir::new().expect("TempDir creation should succeed");
    let cfg = TrialConfig::new(5, 4, 0.6, Strategy::Random).with_seed(21);
    let sweep = run_threshold_sweep(&cfg, &[0.4, 0.6]).unwrap();

    for summary in &sweep {
        let path = write_log(dir.path(), summary).unwrap();
        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            log_file_name(Mode::Random, summary.threshold)
        );

        let text = fs::read_to_string(&path).unwrap();
        let delimiters = text.lines().filter(|l| *l == TRIAL_DELIMITER).count();
        assert_eq!(delimiters, 4);
        assert_eq!(text.matches("Start position:").count(), 4);
        assert!(text.trim_end().ends_with(&format_summary(summary)));
    }
}
