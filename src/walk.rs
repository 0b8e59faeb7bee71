//! Random knight walks.
//!
//! A walk marks the start square, then keeps jumping to a uniformly chosen
//! legal square until the knight is stuck or the board is full. A walk that
//! gets stuck early is a normal result, not an error: the caller classifies
//! it against its coverage threshold.

use fastrand::Rng;

use crate::board::Board;
use crate::movegen::legal_moves;
use crate::path::Path;
use crate::position::Position;

/// Walk from `start` until no legal move remains or the board is full.
///
/// `board` must be empty; it is left holding the visitation order.
pub fn walk(board: &mut Board, start: Position, rng: &mut Rng) -> Path {
    walk_bounded(board, start, usize::MAX, rng)
}

/// Like [`walk`], but stop after at most `max_steps` moves.
///
/// Used by the hybrid strategy, which hands the partial path to the
/// backtracking engine afterwards.
pub fn walk_bounded(board: &mut Board, start: Position, max_steps: usize, rng: &mut Rng) -> Path {
    debug_assert_eq!(board.visited_count(), 0, "walk needs an empty board");

    let total = board.total_squares();
    let mut path = Path::with_capacity(start, total);
    board.mark(start, 0);

    while path.steps() < max_steps && path.len() < total {
        match choose_random_move(path.last(), board, rng) {
            Some(next) => {
                board.mark(next, path.len());
                path.push(next);
            }
            None => break,
        }
    }

    path
}

/// Pick one legal move uniformly at random, or `None` at a dead end.
fn choose_random_move(from: Position, board: &Board, rng: &mut Rng) -> Option<Position> {
    let candidates = legal_moves(from, board);
    if candidates.is_empty() {
        return None;
    }
    Some(candidates[rng.usize(..candidates.len())])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_square_board() {
        let mut rng = Rng::with_seed(1);
        let mut board = Board::new(1);
        let path = walk(&mut board, Position::new(0, 0), &mut rng);
        assert_eq!(path.len(), 1);
        assert_eq!(board.get(Position::new(0, 0)), Some(0));
    }

    #[test]
    fn test_walk_marks_path_in_order() {
        let mut rng = Rng::with_seed(7);
        let mut board = Board::new(8);
        let path = walk(&mut board, Position::new(3, 3), &mut rng);

        assert!(path.is_valid());
        assert_eq!(board.visited_count(), path.len());
        for (i, &p) in path.iter().enumerate() {
            assert_eq!(board.get(p), Some(i));
        }
        // Walk only stops when stuck or full.
        assert!(path.len() == 64 || legal_moves(path.last(), &board).is_empty());
    }

    #[test]
    fn test_bounded_walk_respects_budget() {
        let mut rng = Rng::with_seed(3);
        let mut board = Board::new(8);
        let path = walk_bounded(&mut board, Position::new(0, 0), 5, &mut rng);
        assert!(path.steps() <= 5);
        assert_eq!(board.visited_count(), path.len());
    }

    #[test]
    fn test_zero_budget_only_marks_start() {
        let mut rng = Rng::with_seed(3);
        let mut board = Board::new(8);
        let path = walk_bounded(&mut board, Position::new(4, 4), 0, &mut rng);
        assert_eq!(path.len(), 1);
        assert_eq!(board.visited_count(), 1);
    }

    #[test]
    fn test_same_seed_same_walk() {
        let run = |seed| {
            let mut rng = Rng::with_seed(seed);
            let mut board = Board::new(8);
            walk(&mut board, Position::new(2, 5), &mut rng)
        };
        assert_eq!(run(42), run(42));
    }
}
