//! Board display projection and fixture parsing.
//!
//! One glyph per piece kind, uppercase for South and lowercase for North,
//! `.` for an empty cell. `parse_board` rebuilds a mid-game position from
//! the same glyph grid, which is how tests write fixtures.

use thiserror::Error;

use crate::board::{all_coords, Coord, Piece, PieceKind, BOARD_SIZE};
use crate::game::{Game, GamePhase};

/// Errors that can occur when parsing a glyph-grid fixture.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardParseError {
    #[error("expected {expected} rows, got {got}")]
    WrongRowCount { expected: usize, got: usize },

    #[error("row {row} has {got} cells, expected {expected}")]
    WrongRowLength {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("unknown glyph '{0}'")]
    UnknownGlyph(char),
}

/// Pure projection of the board to display glyphs.
pub fn render(game: &Game) -> [[char; 7]; 7] {
    let mut out = [['.'; 7]; 7];
    for (at, id) in game.grid().iter() {
        let piece = game.piece(id);
        let glyph = piece.kind.glyph();
        out[at.y as usize][at.x as usize] = match piece.side {
            crate::board::Side::South => glyph,
            crate::board::Side::North => glyph.to_ascii_lowercase(),
        };
    }
    out
}

/// Formats the board with coordinate headers, row 0 on top.
pub fn format_board(game: &Game) -> String {
    let grid = render(game);
    let mut out = String::from("  0 1 2 3 4 5 6\n");
    for (y, row) in grid.iter().enumerate() {
        out.push_str(&format!("{} ", y));
        for (x, glyph) in row.iter().enumerate() {
            out.push(*glyph);
            if x + 1 < row.len() {
                out.push(' ');
            }
        }
        out.push('\n');
    }
    out
}

/// Builds a mid-game position from a glyph grid: seven whitespace-separated
/// rows of seven glyphs, row 0 first. The resulting game is in the play
/// phase with South to move and empty hands.
pub fn parse_board(text: &str) -> Result<Game, BoardParseError> {
    let rows: Vec<Vec<char>> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(|l| l.split_whitespace().flat_map(|t| t.chars()).collect())
        .collect();
    let size = BOARD_SIZE as usize;
    if rows.len() != size {
        return Err(BoardParseError::WrongRowCount {
            expected: size,
            got: rows.len(),
        });
    }
    for (y, row) in rows.iter().enumerate() {
        if row.len() != size {
            return Err(BoardParseError::WrongRowLength {
                row: y,
                expected: size,
                got: row.len(),
            });
        }
    }

    let mut game = Game::seeded(0);
    for at in all_coords() {
        let glyph = rows[at.y as usize][at.x as usize];
        if glyph == '.' {
            continue;
        }
        let Some((kind, side)) = PieceKind::from_glyph(glyph) else {
            return Err(BoardParseError::UnknownGlyph(glyph));
        };
        let id = game.arena.insert(Piece::new(kind, side));
        game.grid.place(id, at);
    }
    game.phase = GamePhase::Play;
    Ok(game)
}

/// Convenience for fixtures that also need a deterministic Archer: like
/// [`parse_board`] but with an explicit engine seed.
pub fn parse_board_seeded(text: &str, seed: u64) -> Result<Game, BoardParseError> {
    let parsed = parse_board(text)?;
    let mut game = Game::seeded(seed);
    game.arena = parsed.arena;
    game.grid = parsed.grid;
    game.phase = parsed.phase;
    Ok(game)
}

/// Looks up the glyph at a coordinate of a rendered grid.
pub fn glyph_at(grid: &[[char; 7]; 7], at: Coord) -> char {
    grid[at.y as usize][at.x as usize]
}
