//! Initial army construction.
//!
//! The draft pool holds two copies of every ordinary kind; each side drafts
//! a hand at random and deploys it inside its home rows. Kings enter on
//! fixed royal squares and the Angel is a hidden extra, never drafted.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::{Coord, PieceKind, Side, ALL_SIDES, BOARD_SIZE};
use crate::game::{Game, PlaceError};

/// Pieces drafted into each hand for a standard game.
pub const HAND_SIZE: usize = 5;

/// Copies of each ordinary kind in the draft pool.
pub const POOL_COPIES: usize = 2;

/// The draftable kinds: everything except the King and the hidden Angel.
pub const POOL_KINDS: [PieceKind; 9] = [
    PieceKind::Revive,
    PieceKind::Confuse,
    PieceKind::Attract,
    PieceKind::Archer,
    PieceKind::Bubble,
    PieceKind::Witch,
    PieceKind::Spy,
    PieceKind::Grounded,
    PieceKind::Songstress,
];

/// The full draft pool as kind tags (two of each ordinary kind).
pub fn draft_pool() -> Vec<PieceKind> {
    let mut pool = Vec::with_capacity(POOL_KINDS.len() * POOL_COPIES);
    for kind in POOL_KINDS {
        for _ in 0..POOL_COPIES {
            pool.push(kind);
        }
    }
    pool
}

/// Drafts `n` random pool pieces into a side's hand.
pub fn deal_hand(game: &mut Game, side: Side, n: usize, rng: &mut impl Rng) {
    let mut pool = draft_pool();
    pool.shuffle(rng);
    for kind in pool.into_iter().take(n) {
        game.add_to_hand(side, kind);
    }
}

/// Every cell of a side's home rows, row-major.
pub fn home_cells(side: Side) -> Vec<Coord> {
    side.home_rows()
        .iter()
        .flat_map(|&y| (0..BOARD_SIZE).map(move |x| Coord::new(x, y)))
        .collect()
}

/// Auto-setup: Kings on their royal squares, a drafted hand of
/// [`HAND_SIZE`] per side scattered across random home cells, then play
/// begins with South to move.
pub fn standard_setup(game: &mut Game, rng: &mut impl Rng) -> Result<(), PlaceError> {
    for side in ALL_SIDES {
        game.place_king(side)?;
        deal_hand(game, side, HAND_SIZE, rng);

        let mut cells = home_cells(side);
        cells.shuffle(rng);
        for cell in cells {
            if game.hand(side).is_empty() {
                break;
            }
            if game.grid().is_empty(cell) {
                game.place_from_hand(side, 0, cell)?;
            }
        }
    }
    game.start_play()
}
