//! Coronet -- demo binary.
//!
//! Plays one game with the random-legal-move stand-in on both sides,
//! printing the board after every move.
//!
//! Usage:
//!   cargo run --release -- [OPTIONS]
//!
//! Options:
//!   --seed N       Random seed, 0 for entropy (default: 0)
//!   --max-turns N  Move cap before calling a draw (default: 300)
//!   --quiet        Only print the final position and result

use std::env;
use std::process;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use coronet::game::Game;
use coronet::movegen::random_move;
use coronet::render::format_board;
use coronet::resolve::RandomDecisions;
use coronet::setup::standard_setup;

fn main() {
    let args: Vec<String> = env::args().collect();
    let mut seed: u64 = 0;
    let mut max_turns: u32 = 300;
    let mut quiet = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                seed = args[i].parse().expect("invalid --seed value");
            }
            "--max-turns" => {
                i += 1;
                max_turns = args[i].parse().expect("invalid --max-turns value");
            }
            "--quiet" => {
                quiet = true;
            }
            "--help" | "-h" => {
                print_usage();
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                process::exit(1);
            }
        }
        i += 1;
    }

    if seed == 0 {
        seed = SmallRng::from_entropy().gen();
    }

    let mut game = Game::seeded(seed);
    let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(1));
    let mut decider = RandomDecisions::seeded(seed.wrapping_add(2));
    standard_setup(&mut game, &mut rng).expect("standard setup is always placeable");

    if !quiet {
        println!("Seed: {}", seed);
        println!("{}", format_board(&game));
    }

    let mut turn = 0u32;
    while !game.is_terminal() && turn < max_turns {
        let side = game.current_side();
        let Some((from, to)) = random_move(&game, &mut rng) else {
            game.declare_no_moves();
            break;
        };
        let report = game
            .attempt_move(from, to, &mut decider)
            .expect("generated move was legal");
        turn += 1;
        if !quiet {
            let capture = match report.capture {
                Some(kind) => format!(", capturing {}", kind.name()),
                None => String::new(),
            };
            println!(
                "{}. Player {} moved {} {} -> {}{} [{}]",
                turn,
                side.number(),
                report.mover.name(),
                from,
                to,
                capture,
                report.effect.label(),
            );
            println!("{}", format_board(&game));
        }
    }

    if quiet {
        println!("{}", format_board(&game));
    }
    match game.outcome() {
        Some(outcome) => println!(
            "Player {} wins after {} moves ({}).",
            outcome.winner.number(),
            turn,
            outcome.reason.label(),
        ),
        None => println!("Draw after {} moves.", turn),
    }
}

fn print_usage() {
    eprintln!("Usage: coronet [--seed N] [--max-turns N] [--quiet]");
}
