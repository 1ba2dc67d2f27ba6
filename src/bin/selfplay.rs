//! Self-play game generation CLI.
//!
//! Plays random games and outputs one JSON record per game as JSONL.
//!
//! Usage:
//!   cargo run --release --bin selfplay -- [OPTIONS]
//!
//! Options:
//!   --games N      Number of games to play (default: 10)
//!   --max-turns N  Move cap per game before calling a draw (default: 300)
//!   --threads N    Number of parallel threads (default: 4)
//!   --seed N       Random seed, 0 for entropy (default: 0)
//!   --output FILE  Output file path (default: stdout)
//!   --quiet        Suppress summary output

use std::env;
use std::fs::File;
use std::io::{self, BufWriter};
use std::time::Instant;

use coronet::selfplay::{self, SelfPlayConfig};

fn main() {
    let args: Vec<String> = env::args().collect();
    let mut config = SelfPlayConfig::default();
    let mut output_path: Option<String> = None;
    let mut quiet = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--games" => {
                i += 1;
                config.num_games = args[i].parse().expect("invalid --games value");
            }
            "--max-turns" => {
                i += 1;
                config.max_turns = args[i].parse().expect("invalid --max-turns value");
            }
            "--threads" => {
                i += 1;
                config.threads = args[i].parse().expect("invalid --threads value");
            }
            "--seed" => {
                i += 1;
                config.seed = args[i].parse().expect("invalid --seed value");
            }
            "--output" => {
                i += 1;
                output_path = Some(args[i].clone());
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
                std::process::exit(1);
            }
        }
        i += 1;
    }

    config.quiet = quiet;

    if !quiet {
        eprintln!(
            "Self-play: {} games, max {} moves, {} threads",
            config.num_games, config.max_turns, config.threads
        );
    }

    let start = Instant::now();
    let mut games = Vec::with_capacity(config.num_games);
    selfplay::run_self_play(&config, |g| games.push(g));
    let elapsed = start.elapsed();

    if !quiet {
        let decided = games.iter().filter(|g| g.winner.is_some()).count();
        eprintln!(
            "Completed {} games in {:.1}s ({} decided, {} drawn)",
            games.len(),
            elapsed.as_secs_f64(),
            decided,
            games.len() - decided,
        );
    }

    match output_path {
        Some(path) => {
            let file = File::create(&path).expect("failed to create output file");
            let mut writer = BufWriter::new(file);
            selfplay::write_jsonl(&games, &mut writer).expect("failed to write output");
            if !quiet {
                eprintln!("Wrote {} games to {}", games.len(), path);
            }
        }
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            selfplay::write_jsonl(&games, &mut writer).expect("failed to write output");
        }
    }
}

fn print_usage() {
    eprintln!("Usage: selfplay [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --games N      Number of games to play (default: 10)");
    eprintln!("  --max-turns N  Move cap per game before calling a draw (default: 300)");
    eprintln!("  --threads N    Number of parallel threads (default: 4)");
    eprintln!("  --seed N       Random seed, 0 for entropy (default: 0)");
    eprintln!("  --output FILE  Output file path (default: stdout)");
    eprintln!("  --quiet        Suppress summary output");
    eprintln!("  --help         Show this help");
}
