//! Move and effect resolution.
//!
//! Orchestrates "validate, capture, relocate, apply effect, check win",
//! including the capture interaction rule (a captured Grounded piece
//! releases its pin) and extra-move scheduling.

pub mod action;
pub mod decision;
pub mod effect;
pub mod win;

pub use action::{MoveError, MoveReport};
pub use decision::{
    Answer, AutoDecline, DecisionProvider, Query, RandomDecisions, ScriptedDecisions,
};
pub use effect::EffectOutcome;
pub use win::{king_missing, GameOutcome, WinReason};
