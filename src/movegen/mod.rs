//! Legal move enumeration.
//!
//! Generates the set of moves the resolver would accept for the side to
//! move, honoring blocked pieces, the Grounded pin, and a pending extra
//! move. The random chooser is the AI stand-in.

use rand::Rng;

use crate::board::{all_coords, Coord, PieceId};
use crate::game::{Game, GamePhase};
use crate::rules::can_move;

/// Every destination the piece at `from` may legally move to.
pub fn legal_destinations(game: &Game, from: Coord) -> Vec<Coord> {
    let Some(id) = game.grid().get(from) else {
        return Vec::new();
    };
    let piece = game.piece(id);
    if piece.blocked {
        return Vec::new();
    }
    all_coords()
        .filter(|&to| {
            can_move(piece, game.grid(), from, to)
                && game
                    .piece_at(to)
                    .map_or(true, |occupant| occupant.side != piece.side)
        })
        .collect()
}

/// Every `(from, to)` move available to the side to move. A pending extra
/// move restricts the set to the granted piece.
pub fn legal_moves(game: &Game) -> Vec<(Coord, Coord)> {
    if game.phase() != GamePhase::Play {
        return Vec::new();
    }
    let side = game.current_side();

    if let Some(required) = game.extra_move_piece(side) {
        let Some(from) = game.grid().find(required) else {
            return Vec::new();
        };
        return legal_destinations(game, from)
            .into_iter()
            .map(|to| (from, to))
            .collect();
    }

    let mut moves = Vec::new();
    for id in game.pieces_on_board(side) {
        let from = game.grid().find(id).expect("on-board piece has a cell");
        moves.extend(legal_destinations(game, from).into_iter().map(|to| (from, to)));
    }
    moves
}

/// Returns true if the piece is on the board and has at least one legal move.
pub fn has_legal_move(game: &Game, id: PieceId) -> bool {
    game.grid()
        .find(id)
        .map_or(false, |from| !legal_destinations(game, from).is_empty())
}

/// Picks a uniformly-random legal move for the side to move.
pub fn random_move(game: &Game, rng: &mut impl Rng) -> Option<(Coord, Coord)> {
    let moves = legal_moves(game);
    if moves.is_empty() {
        None
    } else {
        Some(moves[rng.gen_range(0..moves.len())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Piece, PieceKind, Side};
    use crate::resolve::AutoDecline;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn kings_only() -> Game {
        let mut game = Game::seeded(1);
        game.place_king(Side::South).unwrap();
        game.place_king(Side::North).unwrap();
        game.start_play().unwrap();
        game
    }

    #[test]
    fn king_on_back_rank_has_eight_moves() {
        let game = kings_only();
        // From (3,0): five Chebyshev neighbors plus jumps to (1,0), (5,0),
        // and (3,2).
        assert_eq!(legal_destinations(&game, Side::South.royal_square()).len(), 8);
        assert_eq!(legal_moves(&game).len(), 8);
    }

    #[test]
    fn no_moves_during_setup() {
        let game = Game::seeded(1);
        assert!(legal_moves(&game).is_empty());
    }

    #[test]
    fn blocked_piece_generates_nothing() {
        let mut game = kings_only();
        let spy = game.arena.insert(Piece::new(PieceKind::Spy, Side::South));
        game.grid.place(spy, Coord::new(0, 3));
        game.arena[spy].blocked = true;
        assert!(legal_destinations(&game, Coord::new(0, 3)).is_empty());
    }

    #[test]
    fn own_piece_destinations_are_excluded() {
        let mut game = kings_only();
        let spy = game.arena.insert(Piece::new(PieceKind::Spy, Side::South));
        game.grid.place(spy, Coord::new(3, 1));
        let dests = legal_destinations(&game, Side::South.royal_square());
        assert!(!dests.contains(&Coord::new(3, 1)));
    }

    #[test]
    fn pending_extra_move_restricts_the_set() {
        let mut game = kings_only();
        let spy = game.arena.insert(Piece::new(PieceKind::Spy, Side::South));
        game.grid.place(spy, Coord::new(0, 3));
        game.extra_move[Side::South.index()] = Some(spy);

        let moves = legal_moves(&game);
        assert!(!moves.is_empty());
        assert!(moves.iter().all(|&(from, _)| from == Coord::new(0, 3)));
    }

    #[test]
    fn random_moves_are_legal() {
        let game = kings_only();
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let (from, to) = random_move(&game, &mut rng).unwrap();
            let mut probe = game.clone();
            assert!(
                probe.attempt_move(from, to, &mut AutoDecline).is_ok(),
                "random move {} -> {} was rejected",
                from,
                to
            );
        }
    }

    #[test]
    fn random_move_deterministic_with_same_seed() {
        let game = kings_only();
        let a = random_move(&game, &mut StdRng::seed_from_u64(123));
        let b = random_move(&game, &mut StdRng::seed_from_u64(123));
        assert_eq!(a, b);
    }

    #[test]
    fn has_legal_move_false_for_off_board_piece() {
        let mut game = kings_only();
        let spy = game.arena.insert(Piece::new(PieceKind::Spy, Side::South));
        assert!(!has_legal_move(&game, spy));
        game.grid.place(spy, Coord::new(0, 3));
        assert!(has_legal_move(&game, spy));
    }
}
