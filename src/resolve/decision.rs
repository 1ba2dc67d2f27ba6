//! Operator decision points for piece effects.
//!
//! Several effects need an operator choice mid-resolution (swap target,
//! summon pick, pin target, extra-move target). The engine calls out to a
//! [`DecisionProvider`] collaborator instead of blocking on I/O, so it can
//! be driven by a console shell, a test script, or random self-play alike.
//! A provider that abstains simply lets the effect fizzle.

use std::collections::VecDeque;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::board::{Coord, BOARD_SIZE};

/// Identifies which decision is being requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query {
    /// Confuse: swap with a friendly piece? (yes/no)
    SwapConfirm,
    /// Confuse: coordinate of the friendly piece to swap with.
    SwapWith,
    /// Attract: summon a hand piece behind the mover? (yes/no)
    SummonConfirm,
    /// Attract: index into the owner's hand.
    SummonPiece,
    /// Grounded: index into the enemy's on-board pieces.
    LockTarget,
    /// Songstress: index into the owner's on-board pieces.
    ExtraMoveTarget,
    /// Witch: coordinate of the enemy piece to block.
    HexTarget,
}

/// The collaborator that supplies operator choices during effect resolution.
pub trait DecisionProvider {
    /// Answers a yes/no question.
    fn confirm(&mut self, query: Query) -> bool;

    /// Picks a coordinate, or abstains.
    fn pick_coord(&mut self, query: Query) -> Option<Coord>;

    /// Picks an index in `0..count`, or abstains. `count` is the number of
    /// options on offer.
    fn pick_index(&mut self, query: Query, count: usize) -> Option<usize>;
}

/// Declines every optional effect and abstains from every choice.
///
/// This is the documented default for non-interactive embedding: moves
/// resolve, effects that need an operator simply do nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoDecline;

impl DecisionProvider for AutoDecline {
    fn confirm(&mut self, _query: Query) -> bool {
        false
    }

    fn pick_coord(&mut self, _query: Query) -> Option<Coord> {
        None
    }

    fn pick_index(&mut self, _query: Query, _count: usize) -> Option<usize> {
        None
    }
}

/// A pre-scripted answer consumed by [`ScriptedDecisions`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
    Coord(Coord),
    Index(usize),
    /// Explicit abstention.
    Pass,
}

/// Replays a fixed queue of answers, for tests. Answers are consumed in
/// order; a mismatched or exhausted queue reads as decline/abstain.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDecisions {
    queue: VecDeque<Answer>,
}

impl ScriptedDecisions {
    /// Creates a provider that will hand out the given answers in order.
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        ScriptedDecisions {
            queue: answers.into_iter().collect(),
        }
    }

    /// Number of answers not yet consumed.
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl DecisionProvider for ScriptedDecisions {
    fn confirm(&mut self, _query: Query) -> bool {
        matches!(self.queue.pop_front(), Some(Answer::Yes))
    }

    fn pick_coord(&mut self, _query: Query) -> Option<Coord> {
        match self.queue.pop_front() {
            Some(Answer::Coord(c)) => Some(c),
            _ => None,
        }
    }

    fn pick_index(&mut self, _query: Query, count: usize) -> Option<usize> {
        match self.queue.pop_front() {
            Some(Answer::Index(i)) if i < count => Some(i),
            _ => None,
        }
    }
}

/// Makes every choice at random, for self-play. Coordinates are drawn from
/// the whole board, so invalid picks (and thus fizzled effects) are common;
/// that is acceptable for a random-legal-move stand-in.
#[derive(Debug, Clone)]
pub struct RandomDecisions {
    rng: SmallRng,
}

impl RandomDecisions {
    /// Creates a provider with a deterministic seed.
    pub fn seeded(seed: u64) -> Self {
        RandomDecisions {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Creates a provider seeded from entropy.
    pub fn from_entropy() -> Self {
        RandomDecisions {
            rng: SmallRng::from_entropy(),
        }
    }
}

impl DecisionProvider for RandomDecisions {
    fn confirm(&mut self, _query: Query) -> bool {
        self.rng.gen_bool(0.5)
    }

    fn pick_coord(&mut self, _query: Query) -> Option<Coord> {
        Some(Coord::new(
            self.rng.gen_range(0..BOARD_SIZE),
            self.rng.gen_range(0..BOARD_SIZE),
        ))
    }

    fn pick_index(&mut self, _query: Query, count: usize) -> Option<usize> {
        if count == 0 {
            None
        } else {
            Some(self.rng.gen_range(0..count))
        }
    }
}
