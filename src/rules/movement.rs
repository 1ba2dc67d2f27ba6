//! Per-kind movement predicates.
//!
//! Each piece kind has a pure legality predicate over the current grid,
//! evaluated before any mutation. Forward-relative rules read `dy` in the
//! owning side's direction of advance.

use crate::board::{Coord, Grid, Piece, PieceKind};

/// Returns true if the piece may move from `from` to `to` under its kind's
/// movement rule. Occupancy of the destination is the resolver's concern;
/// this predicate only checks geometry, path clearance, and the pin.
pub fn can_move(piece: &Piece, grid: &Grid, from: Coord, to: Coord) -> bool {
    if !from.in_bounds() || !to.in_bounds() || from == to {
        return false;
    }
    // A pinned piece cannot move at all, whatever its own rule says.
    if piece.locked {
        return false;
    }
    let dx = (to.x - from.x).abs();
    let dy = (to.y - from.y).abs();
    // Positive when moving toward the enemy back rank.
    let fwd = (to.y - from.y) * piece.side.forward();

    match piece.kind {
        PieceKind::King => (dx <= 1 && dy <= 1) || (dx == 0 && dy == 2) || (dx == 2 && dy == 0),
        PieceKind::Revive | PieceKind::Attract => fwd == 1 && dx <= 1,
        PieceKind::Confuse => dx == 0 && dy == 1,
        PieceKind::Archer => line_clear(grid, from, to),
        PieceKind::Bubble | PieceKind::Songstress => dx == 1 && dy == 1,
        PieceKind::Witch => dx == 1 && fwd == 2,
        PieceKind::Spy => (dx == 1 && dy == 0) || (dx == 0 && dy == 1) || (dx == 0 && fwd == 2),
        PieceKind::Grounded => (dx == 1 && dy == 0) || (dx == 0 && dy == 1),
        PieceKind::Angel => (dx == 1 && dy == 1) || (dx == 0 && dy == 1),
    }
}

/// True if `from` and `to` lie on a shared rank, file, or diagonal and every
/// intermediate cell is empty. The destination itself may be occupied.
fn line_clear(grid: &Grid, from: Coord, to: Coord) -> bool {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    if !(dx == 0 || dy == 0 || dx.abs() == dy.abs()) {
        return false;
    }
    let step_x = dx.signum();
    let step_y = dy.signum();
    let mut at = from.offset(step_x, step_y);
    while at != to {
        if grid.get(at).is_some() {
            return false;
        }
        at = at.offset(step_x, step_y);
    }
    true
}
