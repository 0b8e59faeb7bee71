//! Board coordinates.

use std::fmt;

/// A square on the board, `0 <= x, y < n`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Apply a `(dx, dy)` delta, returning `None` when either coordinate
    /// would leave `[0, size)`.
    pub fn offset(self, (dx, dy): (i32, i32), size: usize) -> Option<Position> {
        let x = self.x as i64 + dx as i64;
        let y = self.y as i64 + dy as i64;
        let n = size as i64;
        if (0..n).contains(&x) && (0..n).contains(&y) {
            Some(Position::new(x as usize, y as usize))
        } else {
            None
        }
    }

    /// The `(dx, dy)` that takes `self` to `other`.
    pub fn delta_to(self, other: Position) -> (i64, i64) {
        (
            other.x as i64 - self.x as i64,
            other.y as i64 - self.y as i64,
        )
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
