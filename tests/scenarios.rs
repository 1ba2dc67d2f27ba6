//! End-to-end rule scenarios driven through the public API.
//!
//! Each test sets up a position with the glyph-grid fixture parser, plays
//! the moves a real shell would submit, and checks the resulting state.

use coronet::board::{Coord, PieceKind, Side, ARROW_COUNT};
use coronet::render::{glyph_at, parse_board, render};
use coronet::resolve::{Answer, AutoDecline, EffectOutcome, ScriptedDecisions, WinReason};

fn c(x: i8, y: i8) -> Coord {
    Coord::new(x, y)
}

#[test]
fn king_chebyshev_step_from_the_royal_square() {
    let mut game = parse_board(
        ". . . K . . .
         . . . . . . .
         . . . . . . .
         . . . . . . .
         . . . . . . .
         . . . . . . .
         . . . k . . .",
    )
    .unwrap();

    let report = game.attempt_move(c(3, 0), c(4, 1), &mut AutoDecline).unwrap();
    assert_eq!(report.mover, PieceKind::King);
    assert_eq!(report.capture, None);

    let grid = render(&game);
    assert_eq!(glyph_at(&grid, c(4, 1)), 'K');
    assert_eq!(glyph_at(&grid, c(3, 0)), '.');
}

#[test]
fn king_orthogonal_jump_of_two() {
    let mut game = parse_board(
        ". . . K . . .
         . . . . . . .
         . . . . . . .
         . . . . . . .
         . . . . . . .
         . . . . . . .
         . . . k . . .",
    )
    .unwrap();

    assert!(game.attempt_move(c(3, 0), c(3, 2), &mut AutoDecline).is_ok());
    // A diagonal jump of two is not a King move.
    let mut other = parse_board(
        ". . . K . . .
         . . . . . . .
         . . . . . . .
         . . . . . . .
         . . . . . . .
         . . . . . . .
         . . . k . . .",
    )
    .unwrap();
    assert!(other.attempt_move(c(3, 0), c(5, 2), &mut AutoDecline).is_err());
}

#[test]
fn spy_wins_in_either_far_corner() {
    for corner_x in [0, 6] {
        let mut game = parse_board(&format!(
            ". . . K . . .
             . . . . . . .
             . . . . . . .
             . . . . . . .
             . . . . . . .
             {}
             . . . k . . .",
            if corner_x == 0 {
                "S . . . . . ."
            } else {
                ". . . . . . S"
            },
        ))
        .unwrap();

        let report = game
            .attempt_move(c(corner_x, 5), c(corner_x, 6), &mut AutoDecline)
            .unwrap();
        assert_eq!(report.effect, EffectOutcome::Infiltrated);
        assert!(game.is_terminal());
        assert_eq!(game.winner(), Some(Side::South));
        assert_eq!(game.outcome().unwrap().reason, WinReason::Infiltration);
    }
}

#[test]
fn north_spy_infiltrates_the_south_corners() {
    let mut game = parse_board(
        ". . . K . . .
         s . . . . . .
         . . . . . . .
         . . . . . . .
         . . . . . . .
         . . . . . . .
         . . . k . . .",
    )
    .unwrap();

    // South passes a move, then the North spy drops into (0,0).
    game.attempt_move(c(3, 0), c(4, 0), &mut AutoDecline).unwrap();
    let report = game.attempt_move(c(0, 1), c(0, 0), &mut AutoDecline).unwrap();
    assert_eq!(report.effect, EffectOutcome::Infiltrated);
    assert_eq!(game.winner(), Some(Side::North));
}

#[test]
fn spy_on_a_non_corner_back_rank_cell_does_not_win() {
    let mut game = parse_board(
        ". . . K . . .
         . . . . . . .
         . . . . . . .
         . . . . . . .
         . . . . . . .
         . S . . . . .
         . . . k . . .",
    )
    .unwrap();

    let report = game.attempt_move(c(1, 5), c(1, 6), &mut AutoDecline).unwrap();
    assert_eq!(report.effect, EffectOutcome::None);
    assert!(!game.is_terminal());
}

#[test]
fn archer_spends_at_most_three_arrows() {
    // Four North spies ring the Archer's two oscillation squares; the
    // King shuffles on the far file to burn North's turns.
    let mut game = parse_board(
        ". . . K . . .
         s X s . . . .
         s . s . . . .
         . . . . . . .
         . . . . . . .
         . . . . . . .
         . . . . . k .",
    )
    .unwrap();

    let archer = game.grid().get(c(1, 1)).unwrap();
    let mut north_at = c(5, 6);
    let mut from = c(1, 1);
    let mut shots = 0;

    for round in 0..4 {
        let to = if round % 2 == 0 { c(1, 2) } else { c(1, 1) };
        let report = game.attempt_move(from, to, &mut AutoDecline).unwrap();
        match report.effect {
            EffectOutcome::Shot { .. } => shots += 1,
            EffectOutcome::None => {}
            other => panic!("unexpected archer effect {:?}", other),
        }
        from = to;

        if game.is_terminal() {
            break;
        }
        // North shuffles its King.
        let north_to = if north_at == c(5, 6) { c(5, 5) } else { c(5, 6) };
        game.attempt_move(north_at, north_to, &mut AutoDecline).unwrap();
        north_at = north_to;
    }

    assert_eq!(shots, ARROW_COUNT as usize);
    assert_eq!(game.piece(archer).arrows, 0);
    assert_eq!(game.captured(Side::North).len(), ARROW_COUNT as usize);
    // One of the four spies outlived the quiver.
    assert_eq!(game.pieces_on_board(Side::North).len(), 2);
}

#[test]
fn grounded_pin_survives_until_the_captor_falls() {
    let mut game = parse_board(
        ". . . K . . .
         . . . . . . .
         . . . . . . .
         . . . G . . .
         . . . . s . .
         . . w . . . .
         . . . k . . .",
    )
    .unwrap();

    // South pins the Witch (North candidates row-major: spy, witch, king).
    let mut decider = ScriptedDecisions::new([Answer::Index(1)]);
    let report = game.attempt_move(c(3, 3), c(3, 4), &mut decider).unwrap();
    assert!(matches!(report.effect, EffectOutcome::Pinned { .. }));

    // The pinned Witch cannot use its own movement rule.
    assert!(game.attempt_move(c(2, 5), c(1, 3), &mut AutoDecline).is_err());

    // The North spy captures the Grounded captor instead.
    let report = game.attempt_move(c(4, 4), c(3, 4), &mut AutoDecline).unwrap();
    assert_eq!(report.capture, Some(PieceKind::Grounded));

    // South moves; the freed Witch now hops.
    game.attempt_move(c(3, 0), c(3, 1), &mut AutoDecline).unwrap();
    assert!(game.attempt_move(c(2, 5), c(1, 3), &mut AutoDecline).is_ok());
}

#[test]
fn songstress_encore_gives_exactly_one_bonus_move() {
    let mut game = parse_board(
        ". . . K . . .
         . S . . . . .
         . . D . . . .
         . . . . . . .
         . . . . . . .
         . . . . . . .
         . . . k . . .",
    )
    .unwrap();

    let songstress = game.grid().get(c(2, 2)).unwrap();
    let mut decider = ScriptedDecisions::new([Answer::Index(1)]);
    let report = game.attempt_move(c(2, 2), c(3, 3), &mut decider).unwrap();
    let spy = game.grid().get(c(1, 1)).unwrap();
    assert_eq!(report.effect, EffectOutcome::Encore { piece: spy });

    // The Songstress is gone from play.
    assert!(game.grid().find(songstress).is_none());
    assert!(game.captured(Side::South).contains(&songstress));

    // Still South's move, bound to the chosen ally.
    assert_eq!(game.current_side(), Side::South);
    assert_eq!(game.extra_move_piece(Side::South), Some(spy));
    assert!(game.attempt_move(c(3, 0), c(3, 1), &mut AutoDecline).is_err());

    // Exactly one bonus move, then the turn passes.
    game.attempt_move(c(1, 1), c(1, 2), &mut AutoDecline).unwrap();
    assert_eq!(game.current_side(), Side::North);
    assert_eq!(game.extra_move_piece(Side::South), None);
}

#[test]
fn king_capture_beats_everything_else() {
    let mut game = parse_board(
        ". . . K . . .
         . . . . . . .
         . . . . . . .
         . . . . . . .
         . . . . . . .
         . . . X . . .
         . . . k . . .",
    )
    .unwrap();

    // The Archer takes the King by capture; no arrow is spent because the
    // game ends before the effect fires.
    let archer = game.grid().get(c(3, 5)).unwrap();
    let report = game.attempt_move(c(3, 5), c(3, 6), &mut AutoDecline).unwrap();
    assert_eq!(report.capture, Some(PieceKind::King));
    assert_eq!(report.effect, EffectOutcome::None);
    assert!(game.is_terminal());
    assert_eq!(game.winner(), Some(Side::South));
    assert_eq!(game.outcome().unwrap().reason, WinReason::KingCaptured);
    assert_eq!(game.piece(archer).arrows, ARROW_COUNT);
}
