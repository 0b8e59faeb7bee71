//! Knight move generation.

use crate::board::Board;
use crate::constants::KNIGHT_OFFSETS;
use crate::position::Position;

/// Legal knight moves from `pos`: on the board and not yet visited.
///
/// Candidates are returned in [`KNIGHT_OFFSETS`] order.
pub fn legal_moves(pos: Position, board: &Board) -> Vec<Position> {
    let mut out = Vec::with_capacity(KNIGHT_OFFSETS.len());
    for delta in KNIGHT_OFFSETS {
        if let Some(to) = pos.offset(delta, board.size()) {
            if !board.is_occupied(to) {
                out.push(to);
            }
        }
    }
    out
}

/// True if `a` and `b` are one knight move apart.
pub fn is_knight_move(a: Position, b: Position) -> bool {
    let (dx, dy) = a.delta_to(b);
    KNIGHT_OFFSETS
        .iter()
        .any(|&(ox, oy)| ox as i64 == dx && oy as i64 == dy)
}
