//! Handle-addressed piece storage.
//!
//! All pieces created during a game live in one append-only arena and are
//! referred to by [`PieceId`] from board cells, hands, captured lists, and
//! the Grounded pin back-reference. Removal from play is expressed by moving
//! the handle between those collections; the arena entry itself never moves.

use std::ops::{Index, IndexMut};

use super::piece::Piece;

/// A stable handle to a piece in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceId(u32);

impl PieceId {
    /// The arena slot this handle refers to.
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Append-only piece store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PieceArena {
    pieces: Vec<Piece>,
}

impl PieceArena {
    /// Creates an empty arena.
    pub fn new() -> Self {
        PieceArena::default()
    }

    /// Adds a piece and returns its handle.
    pub fn insert(&mut self, piece: Piece) -> PieceId {
        let id = PieceId(self.pieces.len() as u32);
        self.pieces.push(piece);
        id
    }

    /// Number of pieces ever created.
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    /// Returns true if no pieces have been created.
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Iterates over all pieces with their handles.
    pub fn iter(&self) -> impl Iterator<Item = (PieceId, &Piece)> {
        self.pieces
            .iter()
            .enumerate()
            .map(|(i, p)| (PieceId(i as u32), p))
    }
}

impl Index<PieceId> for PieceArena {
    type Output = Piece;

    fn index(&self, id: PieceId) -> &Piece {
        &self.pieces[id.index()]
    }
}

impl IndexMut<PieceId> for PieceArena {
    fn index_mut(&mut self, id: PieceId) -> &mut Piece {
        &mut self.pieces[id.index()]
    }
}
