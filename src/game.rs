//! Game state and turn sequencing.
//!
//! Holds the piece arena, the grid, both players, whose turn it is, and the
//! extra-move bookkeeping. Setup-phase placement lives here; move
//! resolution is delegated to [`crate::resolve`].

use rand::rngs::SmallRng;
use rand::SeedableRng;
use thiserror::Error;

use crate::board::{Coord, Grid, Piece, PieceArena, PieceId, PieceKind, Side};
use crate::render;
use crate::resolve::action;
use crate::resolve::win::GameOutcome;
use crate::resolve::{DecisionProvider, MoveError, MoveReport};

/// Lifecycle of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Armies are being placed; moves are rejected.
    Setup,
    /// Normal play.
    Play,
    /// Terminal; the outcome is recorded.
    Over,
}

/// Reasons a setup-phase placement is rejected.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PlaceError {
    #[error("placement is only allowed during setup")]
    NotInSetup,

    #[error("coordinate {0} is off the board")]
    OutOfBounds(Coord),

    #[error("{0} is outside the home rows")]
    OutsideHomeRows(Coord),

    #[error("cell {0} is occupied")]
    CellOccupied(Coord),

    #[error("no hand piece at index {0}")]
    NoSuchHandPiece(usize),

    #[error("{0} has already placed a King")]
    KingAlreadyPlaced(&'static str),

    #[error("{0} has already summoned the Angel")]
    AngelAlreadyPlaced(&'static str),

    #[error("{0} has no King on the board")]
    KingMissing(&'static str),
}

/// One player: owning side, undeployed hand, and lost pieces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub side: Side,
    /// Drafted but not yet placed or summoned.
    pub hand: Vec<PieceId>,
    /// Pieces removed from play, in capture order.
    pub captured: Vec<PieceId>,
}

impl Player {
    fn new(side: Side) -> Self {
        Player {
            side,
            hand: Vec::new(),
            captured: Vec::new(),
        }
    }
}

/// Complete game state.
#[derive(Debug, Clone)]
pub struct Game {
    pub(crate) arena: PieceArena,
    pub(crate) grid: Grid,
    pub(crate) players: [Player; 2],
    pub(crate) phase: GamePhase,
    pub(crate) current: Side,
    /// Songstress bonus: the piece each side must move next, if set.
    pub(crate) extra_move: [Option<PieceId>; 2],
    pub(crate) outcome: Option<GameOutcome>,
    pub(crate) angel_placed: [bool; 2],
    pub(crate) rng: SmallRng,
}

/// Equality over game state, ignoring the RNG (which has no meaningful
/// equality). Used by parse/render tests.
impl PartialEq for Game {
    fn eq(&self, other: &Self) -> bool {
        self.arena == other.arena
            && self.grid == other.grid
            && self.players == other.players
            && self.phase == other.phase
            && self.current == other.current
            && self.extra_move == other.extra_move
            && self.outcome == other.outcome
            && self.angel_placed == other.angel_placed
    }
}

impl Game {
    /// Creates an empty game in the setup phase, seeded from entropy.
    pub fn new() -> Self {
        Self::with_rng(SmallRng::from_entropy())
    }

    /// Creates an empty game with a deterministic seed (the Archer's random
    /// target draws from this).
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(SmallRng::seed_from_u64(seed))
    }

    fn with_rng(rng: SmallRng) -> Self {
        Game {
            arena: PieceArena::new(),
            grid: Grid::new(),
            players: [Player::new(Side::South), Player::new(Side::North)],
            phase: GamePhase::Setup,
            current: Side::South,
            extra_move: [None, None],
            outcome: None,
            angel_placed: [false, false],
            rng,
        }
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// The side to move.
    pub fn current_side(&self) -> Side {
        self.current
    }

    /// True once the game has ended.
    pub fn is_terminal(&self) -> bool {
        self.phase == GamePhase::Over
    }

    /// The recorded outcome, if the game has ended.
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// The winning side, if the game has ended.
    pub fn winner(&self) -> Option<Side> {
        self.outcome.map(|o| o.winner)
    }

    /// Read access to the grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Read access to a piece by handle.
    pub fn piece(&self, id: PieceId) -> &Piece {
        &self.arena[id]
    }

    /// The piece occupying a cell, if any.
    pub fn piece_at(&self, at: Coord) -> Option<&Piece> {
        self.grid.get(at).map(|id| &self.arena[id])
    }

    /// A side's undeployed hand.
    pub fn hand(&self, side: Side) -> &[PieceId] {
        &self.players[side.index()].hand
    }

    /// A side's lost pieces, in capture order.
    pub fn captured(&self, side: Side) -> &[PieceId] {
        &self.players[side.index()].captured
    }

    /// The piece a side must move next under a Songstress bonus, if any.
    pub fn extra_move_piece(&self, side: Side) -> Option<PieceId> {
        self.extra_move[side.index()]
    }

    /// All of a side's on-board pieces, row-major.
    pub fn pieces_on_board(&self, side: Side) -> Vec<PieceId> {
        self.grid
            .iter()
            .filter(|&(_, id)| self.arena[id].side == side)
            .map(|(_, id)| id)
            .collect()
    }

    /// Creates a piece of the given kind directly into a side's hand.
    pub fn add_to_hand(&mut self, side: Side, kind: PieceKind) -> PieceId {
        let id = self.arena.insert(Piece::new(kind, side));
        self.players[side.index()].hand.push(id);
        id
    }

    /// Places a side's King on its royal square. Setup phase only.
    pub fn place_king(&mut self, side: Side) -> Result<PieceId, PlaceError> {
        if self.phase != GamePhase::Setup {
            return Err(PlaceError::NotInSetup);
        }
        let has_king = self
            .pieces_on_board(side)
            .iter()
            .any(|&id| self.arena[id].kind == PieceKind::King);
        if has_king {
            return Err(PlaceError::KingAlreadyPlaced(side.name()));
        }
        let at = side.royal_square();
        if self.grid.get(at).is_some() {
            return Err(PlaceError::CellOccupied(at));
        }
        let id = self.arena.insert(Piece::new(PieceKind::King, side));
        self.grid.place(id, at);
        Ok(id)
    }

    /// Places a hand piece on an empty home-row cell. Setup phase only.
    pub fn place_from_hand(
        &mut self,
        side: Side,
        index: usize,
        at: Coord,
    ) -> Result<PieceId, PlaceError> {
        self.check_placement(side, at)?;
        if index >= self.players[side.index()].hand.len() {
            return Err(PlaceError::NoSuchHandPiece(index));
        }
        let id = self.players[side.index()].hand.remove(index);
        self.grid.place(id, at);
        Ok(id)
    }

    /// Summons the hidden Angel onto an empty home-row cell. At most one
    /// per side, setup phase only.
    pub fn place_angel(&mut self, side: Side, at: Coord) -> Result<PieceId, PlaceError> {
        self.check_placement(side, at)?;
        if self.angel_placed[side.index()] {
            return Err(PlaceError::AngelAlreadyPlaced(side.name()));
        }
        let id = self.arena.insert(Piece::new(PieceKind::Angel, side));
        self.grid.place(id, at);
        self.angel_placed[side.index()] = true;
        Ok(id)
    }

    fn check_placement(&self, side: Side, at: Coord) -> Result<(), PlaceError> {
        if self.phase != GamePhase::Setup {
            return Err(PlaceError::NotInSetup);
        }
        if !at.in_bounds() {
            return Err(PlaceError::OutOfBounds(at));
        }
        if !side.home_rows().contains(&at.y) {
            return Err(PlaceError::OutsideHomeRows(at));
        }
        if self.grid.get(at).is_some() {
            return Err(PlaceError::CellOccupied(at));
        }
        Ok(())
    }

    /// Ends setup and begins play with South to move. Both Kings must be
    /// on the board.
    pub fn start_play(&mut self) -> Result<(), PlaceError> {
        if self.phase != GamePhase::Setup {
            return Err(PlaceError::NotInSetup);
        }
        for side in [Side::South, Side::North] {
            let has_king = self
                .pieces_on_board(side)
                .iter()
                .any(|&id| self.arena[id].kind == PieceKind::King);
            if !has_king {
                return Err(PlaceError::KingMissing(side.name()));
            }
        }
        self.phase = GamePhase::Play;
        self.current = Side::South;
        Ok(())
    }

    /// Attempts a move for the side to move. See [`crate::resolve::action`].
    pub fn attempt_move(
        &mut self,
        from: Coord,
        to: Coord,
        decider: &mut dyn DecisionProvider,
    ) -> Result<MoveReport, MoveError> {
        action::attempt_move(self, from, to, decider)
    }

    /// Records a loss for the side to move because it has no legal move.
    pub fn declare_no_moves(&mut self) {
        if self.phase != GamePhase::Play {
            return;
        }
        self.finish(GameOutcome {
            winner: self.current.opponent(),
            reason: crate::resolve::WinReason::NoMoves,
        });
    }

    /// Pure projection of the board to display glyphs.
    pub fn render(&self) -> [[char; 7]; 7] {
        render::render(self)
    }

    /// Marks the game terminal with the given outcome.
    pub(crate) fn finish(&mut self, outcome: GameOutcome) {
        self.outcome = Some(outcome);
        self.phase = GamePhase::Over;
    }

    /// Passes the turn: clears the mover's pending bonus and blocked flags,
    /// then hands the move to the opponent.
    pub(crate) fn end_turn(&mut self) {
        let side = self.current;
        self.extra_move[side.index()] = None;
        for id in self.pieces_on_board(side) {
            self.arena[id].blocked = false;
        }
        self.current = side.opponent();
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
