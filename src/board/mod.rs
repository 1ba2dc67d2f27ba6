//! Board representation and piece state.
//!
//! Contains the core data structures for coordinates, piece kinds, the
//! cell grid, and the handle-addressed piece arena.

pub mod arena;
pub mod coord;
pub mod grid;
pub mod piece;

pub use arena::{PieceArena, PieceId};
pub use coord::{all_coords, Coord, BOARD_SIZE, NEIGHBORS8, ORTHOGONAL};
pub use grid::Grid;
pub use piece::{Piece, PieceKind, Side, ALL_KINDS, ALL_SIDES, ARROW_COUNT};
