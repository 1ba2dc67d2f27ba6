//! Post-move effect application.
//!
//! Every piece kind carries one effect, fired once at the destination after
//! its move has been applied. Effects may mutate board topology: relocate or
//! remove pieces, summon from hand, toggle block/pin flags, grant an extra
//! move, or trigger the special win. Dispatch is a closed match on the kind
//! tag so each effect stays independently testable.

use rand::Rng;

use crate::board::{Coord, PieceId, PieceKind, NEIGHBORS8, ORTHOGONAL};
use crate::game::Game;

use super::decision::{DecisionProvider, Query};

/// What an effect did, reported back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectOutcome {
    /// The kind has no effect, or its condition was not met.
    None,
    /// The operator declined the effect or made an invalid choice.
    Declined,
    /// Revive relocated itself to a home-row cell.
    Revived { to: Coord },
    /// Confuse swapped places with a friendly piece.
    Swapped { with: Coord },
    /// Attract summoned a hand piece into the cell behind it.
    Summoned { kind: PieceKind, at: Coord },
    /// Archer removed an adjacent enemy piece.
    Shot { kind: PieceKind, at: Coord },
    /// Bubble set the blocked flag on adjacent enemies.
    Dazed { count: usize },
    /// Witch set the blocked flag on one chosen enemy.
    Hexed { at: Coord },
    /// Spy reached an opposing back-rank corner; the game is won.
    Infiltrated,
    /// Grounded pinned an enemy piece.
    Pinned { target: PieceId },
    /// Songstress left the board and granted an ally an extra move.
    Encore { piece: PieceId },
}

impl EffectOutcome {
    /// Short label for logs and game records.
    pub const fn label(&self) -> &'static str {
        match self {
            EffectOutcome::None => "none",
            EffectOutcome::Declined => "declined",
            EffectOutcome::Revived { .. } => "revived",
            EffectOutcome::Swapped { .. } => "swapped",
            EffectOutcome::Summoned { .. } => "summoned",
            EffectOutcome::Shot { .. } => "shot",
            EffectOutcome::Dazed { .. } => "dazed",
            EffectOutcome::Hexed { .. } => "hexed",
            EffectOutcome::Infiltrated => "infiltrated",
            EffectOutcome::Pinned { .. } => "pinned",
            EffectOutcome::Encore { .. } => "encore",
        }
    }
}

/// Applies the mover's effect at its destination. `captured` is the piece
/// removed from that cell by this move, if any.
pub(crate) fn apply_effect(
    game: &mut Game,
    id: PieceId,
    at: Coord,
    captured: Option<PieceId>,
    decider: &mut dyn DecisionProvider,
) -> EffectOutcome {
    match game.arena[id].kind {
        PieceKind::King | PieceKind::Angel => EffectOutcome::None,
        PieceKind::Revive => revive(game, id, at, captured),
        PieceKind::Confuse => confuse(game, id, at, decider),
        PieceKind::Attract => attract(game, id, at, decider),
        PieceKind::Archer => archer(game, id, at),
        PieceKind::Bubble => bubble(game, id, at),
        PieceKind::Witch => witch(game, id, at, decider),
        PieceKind::Spy => spy(game, id, at),
        PieceKind::Grounded => grounded(game, id, at, decider),
        PieceKind::Songstress => songstress(game, id, at, decider),
    }
}

/// On capturing a non-King enemy, relocate into the first empty own home
/// cell (row-major from the back rank), consuming the one-shot charge.
fn revive(game: &mut Game, id: PieceId, at: Coord, captured: Option<PieceId>) -> EffectOutcome {
    if !game.arena[id].can_revive {
        return EffectOutcome::None;
    }
    let Some(cap) = captured else {
        return EffectOutcome::None;
    };
    if game.arena[cap].kind == PieceKind::King {
        return EffectOutcome::None;
    }

    let side = game.arena[id].side;
    game.arena[id].can_revive = false;
    for row in side.home_rows() {
        for x in 0..crate::board::BOARD_SIZE {
            let cell = Coord::new(x, row);
            if game.grid.is_empty(cell) {
                game.grid.relocate(at, cell);
                return EffectOutcome::Revived { to: cell };
            }
        }
    }
    EffectOutcome::None
}

/// Optional swap with a friendly piece at an operator-chosen coordinate.
fn confuse(
    game: &mut Game,
    id: PieceId,
    at: Coord,
    decider: &mut dyn DecisionProvider,
) -> EffectOutcome {
    if !decider.confirm(Query::SwapConfirm) {
        return EffectOutcome::Declined;
    }
    let Some(with) = decider.pick_coord(Query::SwapWith) else {
        return EffectOutcome::Declined;
    };
    let side = game.arena[id].side;
    match game.grid.get(with) {
        Some(other) if game.arena[other].side == side => {
            game.grid.swap(at, with);
            EffectOutcome::Swapped { with }
        }
        _ => EffectOutcome::Declined,
    }
}

/// Optional summon of a hand piece into the empty cell directly behind the
/// mover. The summoned piece arrives unblocked.
fn attract(
    game: &mut Game,
    id: PieceId,
    at: Coord,
    decider: &mut dyn DecisionProvider,
) -> EffectOutcome {
    if !decider.confirm(Query::SummonConfirm) {
        return EffectOutcome::Declined;
    }
    let side = game.arena[id].side;
    let behind = at.offset(0, -side.forward());
    if !game.grid.is_empty(behind) {
        return EffectOutcome::Declined;
    }
    let hand_len = game.players[side.index()].hand.len();
    let Some(pick) = decider.pick_index(Query::SummonPiece, hand_len) else {
        return EffectOutcome::Declined;
    };
    let summoned = game.players[side.index()].hand.remove(pick);
    game.arena[summoned].blocked = false;
    game.grid.place(summoned, behind);
    EffectOutcome::Summoned {
        kind: game.arena[summoned].kind,
        at: behind,
    }
}

/// With arrows remaining, remove one uniformly-random adjacent enemy piece
/// and spend an arrow. Removal goes through capture resolution, so a pinned
/// victim's lock is released like any other capture.
fn archer(game: &mut Game, id: PieceId, at: Coord) -> EffectOutcome {
    if game.arena[id].arrows == 0 {
        return EffectOutcome::None;
    }
    let side = game.arena[id].side;
    let targets: Vec<Coord> = NEIGHBORS8
        .iter()
        .map(|&(dx, dy)| at.offset(dx, dy))
        .filter(|&c| {
            game.grid
                .get(c)
                .is_some_and(|t| game.arena[t].side != side)
        })
        .collect();
    if targets.is_empty() {
        return EffectOutcome::None;
    }
    let target = targets[game.rng.gen_range(0..targets.len())];
    let felled = super::action::capture_at(game, target)
        .expect("archer target cell was occupied");
    game.arena[id].arrows -= 1;
    EffectOutcome::Shot {
        kind: game.arena[felled].kind,
        at: target,
    }
}

/// Set the blocked flag on every orthogonally-adjacent non-immune enemy.
fn bubble(game: &mut Game, id: PieceId, at: Coord) -> EffectOutcome {
    let side = game.arena[id].side;
    let mut count = 0;
    for &(dx, dy) in &ORTHOGONAL {
        let cell = at.offset(dx, dy);
        if let Some(target) = game.grid.get(cell) {
            let p = &mut game.arena[target];
            if p.side != side && !p.is_immune() {
                p.blocked = true;
                count += 1;
            }
        }
    }
    EffectOutcome::Dazed { count }
}

/// Set the blocked flag on the enemy piece at the collaborator-derived
/// coordinate, if it is non-immune.
fn witch(
    game: &mut Game,
    id: PieceId,
    _at: Coord,
    decider: &mut dyn DecisionProvider,
) -> EffectOutcome {
    let Some(target_cell) = decider.pick_coord(Query::HexTarget) else {
        return EffectOutcome::Declined;
    };
    let side = game.arena[id].side;
    match game.grid.get(target_cell) {
        Some(target) if game.arena[target].side != side && !game.arena[target].is_immune() => {
            game.arena[target].blocked = true;
            EffectOutcome::Hexed { at: target_cell }
        }
        _ => EffectOutcome::Declined,
    }
}

/// On an opposing back-rank corner, the Spy's owner wins outright.
fn spy(game: &mut Game, id: PieceId, at: Coord) -> EffectOutcome {
    let side = game.arena[id].side;
    let enemy_back = side.opponent().back_rank();
    if (at.x == 0 || at.x == crate::board::BOARD_SIZE - 1) && at.y == enemy_back {
        EffectOutcome::Infiltrated
    } else {
        EffectOutcome::None
    }
}

/// First activation pins an operator-chosen non-immune enemy piece. A
/// rejected selection does not consume the shot; a completed pin never
/// re-arms.
fn grounded(
    game: &mut Game,
    id: PieceId,
    _at: Coord,
    decider: &mut dyn DecisionProvider,
) -> EffectOutcome {
    if game.arena[id].lock_target.is_some() {
        return EffectOutcome::None;
    }
    let side = game.arena[id].side;
    let candidates = game.pieces_on_board(side.opponent());
    let Some(pick) = decider.pick_index(Query::LockTarget, candidates.len()) else {
        return EffectOutcome::Declined;
    };
    let target = candidates[pick];
    if game.arena[target].is_immune() {
        return EffectOutcome::Declined;
    }
    game.arena[target].locked = true;
    game.arena[id].lock_target = Some(target);
    EffectOutcome::Pinned { target }
}

/// Leave the board permanently, then grant an operator-chosen surviving
/// friendly non-King piece an extra move this turn. The self-removal is
/// unconditional; a rejected or abstained choice grants nothing.
fn songstress(
    game: &mut Game,
    id: PieceId,
    at: Coord,
    decider: &mut dyn DecisionProvider,
) -> EffectOutcome {
    let side = game.arena[id].side;
    game.grid.remove(at);
    game.players[side.index()].captured.push(id);

    let candidates = game.pieces_on_board(side);
    let Some(pick) = decider.pick_index(Query::ExtraMoveTarget, candidates.len()) else {
        return EffectOutcome::Declined;
    };
    let chosen = candidates[pick];
    if game.arena[chosen].kind == PieceKind::King {
        return EffectOutcome::Declined;
    }
    game.extra_move[side.index()] = Some(chosen);
    EffectOutcome::Encore { piece: chosen }
}
