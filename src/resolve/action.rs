//! Move resolution.
//!
//! The attempt-move pipeline: validate, capture, relocate, apply the
//! mover's effect, evaluate wins, advance the turn. Validation never
//! mutates; once it passes, the move applies in full.

use thiserror::Error;

use crate::board::{Coord, PieceId, PieceKind};
use crate::game::{Game, GamePhase};
use crate::movegen;
use crate::rules::can_move;

use super::decision::DecisionProvider;
use super::effect::{apply_effect, EffectOutcome};
use super::win::{king_missing, GameOutcome, WinReason};

/// Reasons a move request is rejected. All recoverable: the game state is
/// unchanged and the caller may retry.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("the game is still in setup")]
    GameNotStarted,

    #[error("the game is over")]
    GameOver,

    #[error("coordinate {0} is off the board")]
    OutOfBounds(Coord),

    #[error("no piece at {0}")]
    NoPieceAtSource(Coord),

    #[error("the piece at {0} belongs to the opponent")]
    NotYourPiece(Coord),

    #[error("the piece at {0} is blocked this turn")]
    PieceBlocked(Coord),

    #[error("a pending extra move must be made with the piece it was granted to")]
    ExtraMoveMismatch,

    #[error("destination {0} holds a friendly piece")]
    OwnPieceAtDestination(Coord),

    #[error("that piece cannot move from {0} to {1}")]
    IllegalMove(Coord, Coord),
}

/// The result of a successfully applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReport {
    pub mover: PieceKind,
    pub from: Coord,
    pub to: Coord,
    /// The enemy piece captured at the destination, if any.
    pub capture: Option<PieceKind>,
    pub effect: EffectOutcome,
    /// Set when this move ended the game.
    pub outcome: Option<GameOutcome>,
}

/// Runs the full move pipeline for the side to move.
pub(crate) fn attempt_move(
    game: &mut Game,
    from: Coord,
    to: Coord,
    decider: &mut dyn DecisionProvider,
) -> Result<MoveReport, MoveError> {
    match game.phase {
        GamePhase::Setup => return Err(MoveError::GameNotStarted),
        GamePhase::Over => return Err(MoveError::GameOver),
        GamePhase::Play => {}
    }
    if !from.in_bounds() {
        return Err(MoveError::OutOfBounds(from));
    }
    if !to.in_bounds() {
        return Err(MoveError::OutOfBounds(to));
    }

    let side = game.current;
    let id = game.grid.get(from).ok_or(MoveError::NoPieceAtSource(from))?;
    if game.arena[id].side != side {
        return Err(MoveError::NotYourPiece(from));
    }
    let fulfilling_extra = match game.extra_move[side.index()] {
        Some(required) if required != id => return Err(MoveError::ExtraMoveMismatch),
        Some(_) => true,
        None => false,
    };
    if game.arena[id].blocked {
        return Err(MoveError::PieceBlocked(from));
    }
    if !can_move(&game.arena[id], &game.grid, from, to) {
        return Err(MoveError::IllegalMove(from, to));
    }

    let capture = match game.grid.get(to) {
        Some(occupant) if game.arena[occupant].side == side => {
            return Err(MoveError::OwnPieceAtDestination(to));
        }
        Some(_) => capture_at(game, to),
        None => None,
    };

    let mover = game.arena[id].kind;
    game.grid.relocate(from, to);

    // A captured King ends the game before any effect fires.
    if let Some(cap) = capture {
        if game.arena[cap].kind == PieceKind::King {
            let outcome = GameOutcome {
                winner: side,
                reason: WinReason::KingCaptured,
            };
            game.finish(outcome);
            return Ok(MoveReport {
                mover,
                from,
                to,
                capture: Some(PieceKind::King),
                effect: EffectOutcome::None,
                outcome: Some(outcome),
            });
        }
    }

    let effect = apply_effect(game, id, to, capture, decider);

    let outcome = if effect == EffectOutcome::Infiltrated {
        Some(GameOutcome {
            winner: side,
            reason: WinReason::Infiltration,
        })
    } else if king_missing(&game.arena, &game.grid, side.opponent()) {
        // An effect (the Archer's shot) can fell the King too.
        Some(GameOutcome {
            winner: side,
            reason: WinReason::KingCaptured,
        })
    } else {
        None
    };

    if let Some(out) = outcome {
        game.finish(out);
    } else {
        advance_turn(game, fulfilling_extra);
    }

    Ok(MoveReport {
        mover,
        from,
        to,
        capture: capture.map(|c| game.arena[c].kind),
        effect,
        outcome,
    })
}

/// Capture resolution for the piece at `at`: remove it from the board, add
/// it to its owner's captured list, and if it is a Grounded piece with a
/// live pin, release the pinned piece in the same transaction.
pub(crate) fn capture_at(game: &mut Game, at: Coord) -> Option<PieceId> {
    let id = game.grid.remove(at)?;
    if let Some(target) = game.arena[id].lock_target {
        game.arena[target].locked = false;
    }
    let owner = game.arena[id].side;
    game.players[owner.index()].captured.push(id);
    Some(id)
}

/// Turn bookkeeping after a non-terminal move. A freshly granted extra move
/// keeps the turn with the same side; otherwise the turn passes and the
/// mover's blocked flags clear.
fn advance_turn(game: &mut Game, fulfilling_extra: bool) {
    let side = game.current;
    if fulfilling_extra {
        game.end_turn();
        return;
    }
    match game.extra_move[side.index()] {
        Some(granted) => {
            // Abandon the bonus if the named piece has nothing to do.
            if !movegen::has_legal_move(game, granted) {
                game.end_turn();
            }
        }
        None => game.end_turn(),
    }
}
