//! Coronet engine library.
//!
//! Exposes the board representation, movement rules, effect resolver, move
//! generation, and self-play modules for use by integration tests and the
//! binary entry points.

pub mod board;
pub mod game;
pub mod movegen;
pub mod render;
pub mod resolve;
pub mod rules;
pub mod selfplay;
pub mod setup;
