//! Square grid of visitation markers.
//!
//! Each cell holds the order in which the knight reached it, or
//! [`UNVISITED`]. A board belongs to a single trial; the engines take it by
//! `&mut` and are responsible for only marking empty squares.

use std::fmt;

use crate::constants::UNVISITED;
use crate::position::Position;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<i32>,
}

impl Board {
    /// Create an `size` x `size` board with every square unvisited.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![UNVISITED; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of squares on the board (`n * n`).
    pub fn total_squares(&self) -> usize {
        self.cells.len()
    }

    fn idx(&self, pos: Position) -> usize {
        pos.x * self.size + pos.y
    }

    /// Visitation order of `pos`, or `None` if it is unvisited or off the board.
    pub fn get(&self, pos: Position) -> Option<usize> {
        if pos.x >= self.size || pos.y >= self.size {
            return None;
        }
        match self.cells[self.idx(pos)] {
            UNVISITED => None,
            order => Some(order as usize),
        }
    }

    pub fn is_occupied(&self, pos: Position) -> bool {
        self.cells[self.idx(pos)] != UNVISITED
    }

    /// Record that the knight reached `pos` as its `order`-th square.
    pub fn mark(&mut self, pos: Position, order: usize) {
        debug_assert!(!self.is_occupied(pos), "square {pos} already visited");
        let i = self.idx(pos);
        self.cells[i] = order as i32;
    }

    /// Reset `pos` to unvisited. Only backtracking retracts squares.
    pub fn unmark(&mut self, pos: Position) {
        debug_assert!(self.is_occupied(pos), "square {pos} is not visited");
        let i = self.idx(pos);
        self.cells[i] = UNVISITED;
    }

    pub fn visited_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != UNVISITED).count()
    }

    pub fn is_full(&self) -> bool {
        self.visited_count() == self.total_squares()
    }

    /// Rows of the grid, row `x` holding columns `y = 0..n`.
    pub fn rows(&self) -> impl Iterator<Item = &[i32]> + '_ {
        self.cells.chunks(self.size.max(1))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = (self.total_squares().saturating_sub(1)).to_string().len().max(2);
        for row in self.rows() {
            let line = row
                .iter()
                .map(|c| format!("{c:>width$}"))
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
