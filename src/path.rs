//! The ordered sequence of squares a knight has visited.

use std::collections::HashSet;

use crate::movegen::is_knight_move;
use crate::position::Position;

/// Visited squares in order; the first element is the start.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path {
    squares: Vec<Position>,
}

impl Path {
    pub fn new(start: Position) -> Self {
        Self {
            squares: vec![start],
        }
    }

    /// Pre-allocate room for a full tour of `total_squares`.
    pub fn with_capacity(start: Position, total_squares: usize) -> Self {
        let mut squares = Vec::with_capacity(total_squares.max(1));
        squares.push(start);
        Self { squares }
    }

    pub fn start(&self) -> Position {
        self.squares[0]
    }

    /// The square the knight currently stands on.
    pub fn last(&self) -> Position {
        self.squares[self.squares.len() - 1]
    }

    /// Number of squares visited, start included.
    pub fn len(&self) -> usize {
        self.squares.len()
    }

    /// A path always holds at least its start square.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of knight moves made (`len - 1`).
    pub fn steps(&self) -> usize {
        self.squares.len() - 1
    }

    pub fn push(&mut self, pos: Position) {
        self.squares.push(pos);
    }

    /// Remove the last square. The start square is never removed.
    pub fn pop(&mut self) -> Option<Position> {
        if self.squares.len() > 1 {
            self.squares.pop()
        } else {
            None
        }
    }

    pub fn as_slice(&self) -> &[Position] {
        &self.squares
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Position> {
        self.squares.iter()
    }

    /// Check that consecutive squares are a knight move apart and that no
    /// square repeats.
    pub fn is_valid(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.squares.len());
        if !self.squares.iter().all(|p| seen.insert(*p)) {
            return false;
        }
        self.squares
            .windows(2)
            .all(|w| is_knight_move(w[0], w[1]))
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Position;
    type IntoIter = std::slice::Iter<'a, Position>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_path() {
        let p = Path::new(Position::new(2, 3));
        assert_eq!(p.len(), 1);
        assert_eq!(p.steps(), 0);
        assert_eq!(p.start(), p.last());
    }

    #[test]
    fn test_pop_keeps_start() {
        let mut p = Path::new(Position::new(0, 0));
        p.push(Position::new(1, 2));
        assert_eq!(p.pop(), Some(Position::new(1, 2)));
        assert_eq!(p.pop(), None);
        assert_eq!(p.len(), 1);
    }

    #[test]
    fn test_is_valid() {
        let mut p = Path::new(Position::new(0, 0));
        p.push(Position::new(1, 2));
        p.push(Position::new(2, 0));
        assert!(p.is_valid());

        p.push(Position::new(2, 1));
        assert!(!p.is_valid(), "non-knight step");
    }

    #[test]
    fn test_repeat_is_invalid() {
        let mut p = Path::new(Position::new(0, 0));
        p.push(Position::new(1, 2));
        p.push(Position::new(0, 0));
        assert!(!p.is_valid());
    }
}
