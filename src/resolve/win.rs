//! Win evaluation.
//!
//! King capture is the primary terminal condition, checked after every
//! resolved move. The Spy's infiltration is the only special (non-capture)
//! win. A side left with no legal move loses.

use crate::board::{Grid, PieceArena, PieceKind, Side};

/// Why the game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinReason {
    /// The loser's King was removed from the board.
    KingCaptured,
    /// A Spy reached an opposing back-rank corner.
    Infiltration,
    /// The loser had no legal move on their turn.
    NoMoves,
}

impl WinReason {
    /// Short label for logs and game records.
    pub const fn label(&self) -> &'static str {
        match self {
            WinReason::KingCaptured => "king_captured",
            WinReason::Infiltration => "infiltration",
            WinReason::NoMoves => "no_moves",
        }
    }
}

/// The terminal result of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOutcome {
    pub winner: Side,
    pub reason: WinReason,
}

/// Returns true if `side` has no King anywhere on the board.
pub fn king_missing(arena: &PieceArena, grid: &Grid, side: Side) -> bool {
    !grid.iter().any(|(_, id)| {
        let p = &arena[id];
        p.kind == PieceKind::King && p.side == side
    })
}
