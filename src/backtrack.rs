//! Depth-first completion of a partial knight path.
//!
//! Starting from whatever square the path ends on, the search tries legal
//! moves in generator order, descending on each and retracting it when the
//! subtree cannot reach the target. The square set and path are mutated in
//! place; a failed search leaves both exactly as they were on entry.
//!
//! The recursion is kept on an explicit stack of candidate lists, so the
//! depth of the search is bounded by the heap rather than the call stack.
//!
//! There is no pruning beyond occupancy, so the worst case is exponential in
//! the number of empty squares. An optional node limit turns a runaway search
//! into [`SearchOutcome::BudgetExceeded`].

use tracing::trace;

use crate::board::Board;
use crate::movegen::legal_moves;
use crate::path::Path;
use crate::position::Position;

/// Result of a completion search.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The path now has at least the requested number of steps.
    Completed,
    /// Every continuation was tried; board and path are unchanged.
    Exhausted,
    /// The node limit was hit; board and path are unchanged.
    BudgetExceeded,
}

impl SearchOutcome {
    pub fn is_success(self) -> bool {
        self == SearchOutcome::Completed
    }
}

/// Candidates still to try from one square of the path.
struct Frame {
    candidates: Vec<Position>,
    next: usize,
}

impl Frame {
    fn new(candidates: Vec<Position>) -> Self {
        Self {
            candidates,
            next: 0,
        }
    }

    fn advance(&mut self) -> Option<Position> {
        let pos = self.candidates.get(self.next).copied();
        self.next += 1;
        pos
    }
}

/// Backtracking search with an optional cap on tentative placements.
#[derive(Clone, Debug, Default)]
pub struct Completion {
    node_limit: Option<u64>,
    nodes: u64,
}

impl Completion {
    /// Unlimited search.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop after `limit` tentative placements.
    pub fn with_node_limit(limit: u64) -> Self {
        Self {
            node_limit: Some(limit),
            nodes: 0,
        }
    }

    /// Tentative placements made so far, across all searches run by `self`.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Extend `path` until it has at least `threshold_steps` moves.
    pub fn search(&mut self, board: &mut Board, path: &mut Path, threshold_steps: usize) -> SearchOutcome {
        if path.steps() >= threshold_steps {
            return SearchOutcome::Completed;
        }

        let base_len = path.len();
        // frames[i] holds the untried moves from path[base_len - 1 + i].
        let mut frames = vec![Frame::new(legal_moves(path.last(), board))];

        while let Some(frame) = frames.last_mut() {
            match frame.advance() {
                Some(next) => {
                    if self.node_limit.is_some_and(|limit| self.nodes >= limit) {
                        retract_to(board, path, base_len);
                        trace!(nodes = self.nodes, "node limit reached");
                        return SearchOutcome::BudgetExceeded;
                    }
                    self.nodes += 1;

                    board.mark(next, path.len());
                    path.push(next);
                    if path.steps() >= threshold_steps {
                        return SearchOutcome::Completed;
                    }
                    frames.push(Frame::new(legal_moves(next, board)));
                }
                None => {
                    frames.pop();
                    if frames.is_empty() {
                        break;
                    }
                    // The square this frame expanded is a dead end.
                    if let Some(last) = path.pop() {
                        board.unmark(last);
                    }
                }
            }
        }

        debug_assert_eq!(path.len(), base_len);
        SearchOutcome::Exhausted
    }
}

/// Undo tentative placements until the path is back to `len` squares.
fn retract_to(board: &mut Board, path: &mut Path, len: usize) {
    while path.len() > len {
        if let Some(last) = path.pop() {
            board.unmark(last);
        }
    }
}

/// Unlimited completion search; `true` if the path reached `threshold_steps`.
///
/// On `false` the board and path are unchanged.
pub fn complete(board: &mut Board, path: &mut Path, threshold_steps: usize) -> bool {
    Completion::new()
        .search(board, path, threshold_steps)
        .is_success()
}
