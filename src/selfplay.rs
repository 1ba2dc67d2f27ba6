//! Random self-play game generation.
//!
//! Plays full games with the random-legal-move stand-in on both sides and
//! random effect decisions, recording each move and the final outcome.
//! Records serialize to JSONL for downstream analysis.

use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::game::Game;
use crate::movegen::random_move;
use crate::resolve::RandomDecisions;
use crate::setup::standard_setup;

/// Configuration for self-play game generation.
#[derive(Debug, Clone)]
pub struct SelfPlayConfig {
    /// Number of games to play.
    pub num_games: usize,
    /// Maximum moves per game before calling it a draw.
    pub max_turns: u32,
    /// Number of parallel threads for concurrent games.
    pub threads: usize,
    /// Random seed (0 = use entropy).
    pub seed: u64,
    /// Suppress per-game progress output.
    pub quiet: bool,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        SelfPlayConfig {
            num_games: 10,
            max_turns: 300,
            threads: 4,
            seed: 0,
            quiet: false,
        }
    }
}

/// A single recorded move.
#[derive(Debug, Clone, Serialize)]
pub struct MoveRecord {
    /// Zero-based move number within the game.
    pub turn: u32,
    /// Moving player (1 or 2).
    pub player: u8,
    /// Glyph of the moving piece.
    pub piece: char,
    pub from: (i8, i8),
    pub to: (i8, i8),
    /// Glyph of the captured piece, if any.
    pub capture: Option<char>,
    /// Label of the effect outcome.
    pub effect: &'static str,
}

/// A complete self-play game record.
#[derive(Debug, Clone, Serialize)]
pub struct GameRecord {
    /// Sequential game ID.
    pub game_id: usize,
    /// The seed this game was played with.
    pub seed: u64,
    /// Winning player (1 or 2), or None for a turn-capped draw.
    pub winner: Option<u8>,
    /// Why the game ended, when it did.
    pub reason: Option<&'static str>,
    /// Total moves played.
    pub turns: u32,
    pub moves: Vec<MoveRecord>,
}

/// Plays one full random game from the standard setup.
pub fn play_game(config: &SelfPlayConfig, game_id: usize, seed: u64) -> GameRecord {
    let mut game = Game::seeded(seed);
    let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(1));
    let mut decider = RandomDecisions::seeded(seed.wrapping_add(2));
    standard_setup(&mut game, &mut rng).expect("standard setup is always placeable");

    let mut moves = Vec::new();
    let mut turn = 0u32;
    while !game.is_terminal() && turn < config.max_turns {
        let side = game.current_side();
        let Some((from, to)) = random_move(&game, &mut rng) else {
            game.declare_no_moves();
            break;
        };
        let report = game
            .attempt_move(from, to, &mut decider)
            .expect("generated move was legal");
        moves.push(MoveRecord {
            turn,
            player: side.number(),
            piece: report.mover.glyph(),
            from: (from.x, from.y),
            to: (to.x, to.y),
            capture: report.capture.map(|k| k.glyph()),
            effect: report.effect.label(),
        });
        turn += 1;
    }

    GameRecord {
        game_id,
        seed,
        winner: game.winner().map(|s| s.number()),
        reason: game.outcome().map(|o| o.reason.label()),
        turns: turn,
        moves,
    }
}

/// Plays the configured number of games, delivering each completed record
/// to the callback. Runs on a rayon pool when more than one thread is
/// configured.
pub fn run_self_play<F>(config: &SelfPlayConfig, on_game: F)
where
    F: FnMut(GameRecord) + Send,
{
    if config.threads > 1 {
        run_self_play_parallel(config, on_game);
    } else {
        run_self_play_sequential(config, on_game);
    }
}

fn base_seed(config: &SelfPlayConfig) -> u64 {
    if config.seed != 0 {
        config.seed
    } else {
        SmallRng::from_entropy().gen()
    }
}

fn report_game(config: &SelfPlayConfig, completed: usize, game: &GameRecord) {
    if config.quiet {
        return;
    }
    let outcome = match game.winner {
        Some(w) => format!("player {} wins ({})", w, game.reason.unwrap_or("?")),
        None => "draw".to_string(),
    };
    eprintln!(
        "Game {}/{}: {} in {} moves",
        completed, config.num_games, outcome, game.turns,
    );
}

fn run_self_play_sequential<F>(config: &SelfPlayConfig, mut on_game: F)
where
    F: FnMut(GameRecord),
{
    let base = base_seed(config);
    for i in 0..config.num_games {
        let game = play_game(config, i, base.wrapping_add(i as u64));
        report_game(config, i + 1, &game);
        on_game(game);
    }
}

/// Parallel self-play: plays games concurrently using rayon.
/// Uses a channel to deliver completed games to the callback from worker
/// threads.
fn run_self_play_parallel<F>(config: &SelfPlayConfig, mut on_game: F)
where
    F: FnMut(GameRecord) + Send,
{
    use rayon::prelude::*;
    use std::sync::mpsc;

    let completed = AtomicUsize::new(0);
    let (tx, rx) = mpsc::channel::<GameRecord>();

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()
        .expect("failed to build rayon thread pool");

    let base = base_seed(config);
    let config_clone = config.clone();
    let handle = std::thread::spawn(move || {
        pool.install(|| {
            (0..config_clone.num_games)
                .into_par_iter()
                .for_each_with(tx, |tx, i| {
                    let game = play_game(&config_clone, i, base.wrapping_add(i as u64));
                    let n = completed.fetch_add(1, Ordering::Relaxed) + 1;
                    report_game(&config_clone, n, &game);
                    let _ = tx.send(game);
                });
        });
    });

    // Receive completed games on the main thread and pass to the callback.
    for game in rx {
        on_game(game);
    }

    handle.join().expect("self-play worker thread panicked");
}

/// Writes game records as JSONL (one JSON object per line).
pub fn write_jsonl<W: Write>(games: &[GameRecord], out: &mut W) -> std::io::Result<()> {
    for game in games {
        serde_json::to_writer(&mut *out, game)?;
        writeln!(out)?;
    }
    out.flush()
}
