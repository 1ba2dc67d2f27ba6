//! The 7x7 cell store.
//!
//! Pure storage: placement, relocation, and occupancy queries over piece
//! handles. No knowledge of movement rules or effects.

use super::arena::PieceId;
use super::coord::{all_coords, Coord, BOARD_SIZE};

const SIZE: usize = BOARD_SIZE as usize;

/// The board grid. Each cell holds at most one piece handle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    cells: [[Option<PieceId>; SIZE]; SIZE],
}

impl Grid {
    /// Creates an empty grid.
    pub fn new() -> Self {
        Grid::default()
    }

    /// Returns the occupant of a cell, if any. Out of bounds reads as empty.
    pub fn get(&self, at: Coord) -> Option<PieceId> {
        if !at.in_bounds() {
            return None;
        }
        self.cells[at.y as usize][at.x as usize]
    }

    /// Returns true if the cell is on the board and unoccupied.
    pub fn is_empty(&self, at: Coord) -> bool {
        at.in_bounds() && self.get(at).is_none()
    }

    /// Places a piece. Fails if the cell is occupied or out of bounds.
    pub fn place(&mut self, id: PieceId, at: Coord) -> bool {
        if !at.in_bounds() || self.get(at).is_some() {
            return false;
        }
        self.cells[at.y as usize][at.x as usize] = Some(id);
        true
    }

    /// Moves the occupant of `from` to `to`. Fails if the source is empty.
    /// The destination must already be vacated.
    pub fn relocate(&mut self, from: Coord, to: Coord) -> bool {
        if !from.in_bounds() || !to.in_bounds() {
            return false;
        }
        let Some(id) = self.get(from) else {
            return false;
        };
        debug_assert!(self.get(to).is_none(), "relocate into occupied cell {}", to);
        self.cells[from.y as usize][from.x as usize] = None;
        self.cells[to.y as usize][to.x as usize] = Some(id);
        true
    }

    /// Exchanges the contents of two cells.
    pub fn swap(&mut self, a: Coord, b: Coord) {
        let pa = self.get(a);
        let pb = self.get(b);
        self.cells[a.y as usize][a.x as usize] = pb;
        self.cells[b.y as usize][b.x as usize] = pa;
    }

    /// Clears a cell, returning the removed occupant.
    pub fn remove(&mut self, at: Coord) -> Option<PieceId> {
        if !at.in_bounds() {
            return None;
        }
        self.cells[at.y as usize][at.x as usize].take()
    }

    /// Iterates occupied cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, PieceId)> + '_ {
        all_coords().filter_map(|c| self.get(c).map(|id| (c, id)))
    }

    /// Finds the cell holding the given handle, if it is on the board.
    pub fn find(&self, id: PieceId) -> Option<Coord> {
        self.iter().find(|&(_, o)| o == id).map(|(c, _)| c)
    }
}
