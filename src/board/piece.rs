//! Piece kinds, sides, and per-piece state.
//!
//! Every piece couples a movement rule with a post-move effect; both are
//! keyed off the [`PieceKind`] tag. Mutable status (blocked, arrows, the
//! Grounded pin) lives on [`Piece`] and is addressed through the arena.

use super::arena::PieceId;
use super::coord::Coord;

/// Number of arrows an Archer starts with.
pub const ARROW_COUNT: u8 = 3;

/// The two players. South owns rows 0-1 and advances toward +y;
/// North owns rows 5-6 and advances toward -y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    South,
    North,
}

/// Both sides, South first.
pub const ALL_SIDES: [Side; 2] = [Side::South, Side::North];

impl Side {
    /// Returns the opposing side.
    pub const fn opponent(self) -> Side {
        match self {
            Side::South => Side::North,
            Side::North => Side::South,
        }
    }

    /// The forward direction along y: +1 for South, -1 for North.
    pub const fn forward(self) -> i8 {
        match self {
            Side::South => 1,
            Side::North => -1,
        }
    }

    /// The two home rows, back rank first.
    pub const fn home_rows(self) -> [i8; 2] {
        match self {
            Side::South => [0, 1],
            Side::North => [6, 5],
        }
    }

    /// The back-rank row.
    pub const fn back_rank(self) -> i8 {
        match self {
            Side::South => 0,
            Side::North => 6,
        }
    }

    /// The fixed square where this side's King enters the board.
    pub const fn royal_square(self) -> Coord {
        Coord::new(3, self.back_rank())
    }

    /// Index for per-side arrays.
    pub const fn index(self) -> usize {
        match self {
            Side::South => 0,
            Side::North => 1,
        }
    }

    /// The player number used in display output (1 or 2).
    pub const fn number(self) -> u8 {
        match self {
            Side::South => 1,
            Side::North => 2,
        }
    }

    /// Human-readable side name.
    pub const fn name(self) -> &'static str {
        match self {
            Side::South => "South",
            Side::North => "North",
        }
    }
}

/// The closed set of piece kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    King = 0,
    Revive,
    Confuse,
    Attract,
    Archer,
    Bubble,
    Witch,
    Spy,
    Grounded,
    Songstress,
    Angel,
}

/// Every piece kind, in discriminant order.
pub const ALL_KINDS: [PieceKind; 11] = [
    PieceKind::King,
    PieceKind::Revive,
    PieceKind::Confuse,
    PieceKind::Attract,
    PieceKind::Archer,
    PieceKind::Bubble,
    PieceKind::Witch,
    PieceKind::Spy,
    PieceKind::Grounded,
    PieceKind::Songstress,
    PieceKind::Angel,
];

impl PieceKind {
    /// Returns the display glyph for this kind (uppercase form).
    pub const fn glyph(self) -> char {
        match self {
            PieceKind::King => 'K',
            PieceKind::Revive => 'R',
            PieceKind::Confuse => 'C',
            PieceKind::Attract => 'A',
            PieceKind::Archer => 'X',
            PieceKind::Bubble => 'O',
            PieceKind::Witch => 'W',
            PieceKind::Spy => 'S',
            PieceKind::Grounded => 'G',
            PieceKind::Songstress => 'D',
            PieceKind::Angel => 'N',
        }
    }

    /// Parses a glyph back to a kind and side: uppercase is South,
    /// lowercase is North.
    pub fn from_glyph(c: char) -> Option<(PieceKind, Side)> {
        let side = if c.is_ascii_uppercase() {
            Side::South
        } else {
            Side::North
        };
        let upper = c.to_ascii_uppercase();
        ALL_KINDS
            .iter()
            .find(|k| k.glyph() == upper)
            .map(|&k| (k, side))
    }

    /// Returns true if this kind is immune to lock and block effects.
    /// Fixed at construction: only the King and the Angel are immune.
    pub const fn is_immune(self) -> bool {
        matches!(self, PieceKind::King | PieceKind::Angel)
    }

    /// Human-readable kind name.
    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::King => "King",
            PieceKind::Revive => "Revive",
            PieceKind::Confuse => "Confuse",
            PieceKind::Attract => "Attract",
            PieceKind::Archer => "Archer",
            PieceKind::Bubble => "Bubble",
            PieceKind::Witch => "Witch",
            PieceKind::Spy => "Spy",
            PieceKind::Grounded => "Grounded",
            PieceKind::Songstress => "Songstress",
            PieceKind::Angel => "Angel",
        }
    }
}

/// A piece instance: kind tag, owning side, and mutable status flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub side: Side,
    /// Set by enemy Bubble/Witch effects; cleared when the owner's turn ends.
    pub blocked: bool,
    /// Revive's one-shot reanimation charge.
    pub can_revive: bool,
    /// Archer's remaining arrows.
    pub arrows: u8,
    /// True while an enemy Grounded piece pins this piece in place.
    pub locked: bool,
    /// For a Grounded piece: the enemy it has pinned. One-shot; once set it
    /// never re-arms, even if the target is later captured.
    pub lock_target: Option<PieceId>,
}

impl Piece {
    /// Creates a fresh piece of the given kind and side.
    pub fn new(kind: PieceKind, side: Side) -> Self {
        Piece {
            kind,
            side,
            blocked: false,
            can_revive: kind == PieceKind::Revive,
            arrows: if kind == PieceKind::Archer { ARROW_COUNT } else { 0 },
            locked: false,
            lock_target: None,
        }
    }

    /// Returns true if this piece cannot be the target of lock/block effects.
    pub fn is_immune(&self) -> bool {
        self.kind.is_immune()
    }
}
