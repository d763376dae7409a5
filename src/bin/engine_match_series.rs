//! Standalone engine-vs-engine series runner.
//!
//! Run with:
//! `cargo run --release --bin engine_match_series`
//! `cargo run --release --bin engine_match_series -- --games 50 --log-level debug`

use clap::Parser;

use janggi::engines::engine_greedy::GreedyEngine;
use janggi::engines::engine_random::RandomEngine;
use janggi::engines::engine_trait::Engine;
use janggi::utils::engine_match_harness::{play_engine_match_series, MatchConfig, MatchSeriesConfig};
use janggi::utils::logging::{init_logging, parse_level};

#[derive(Parser)]
struct Arguments {
    #[clap(long, default_value_t = 10)]
    games: u16,

    #[clap(long, default_value_t = 1234)]
    seed: u64,

    #[clap(long, default_value_t = 200)]
    max_plies: u16,

    #[clap(long, value_parser = parse_level)]
    log_level: Option<log::LevelFilter>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let arguments = Arguments::parse();
    init_logging(arguments.log_level);

    let seed = arguments.seed;
    // Swap these to pit other engines against each other.
    let player1 = move || Box::new(GreedyEngine::with_seed(seed)) as Box<dyn Engine>;
    let player2 = move || Box::new(RandomEngine::with_seed(seed ^ 0x5A5A)) as Box<dyn Engine>;

    let stats = play_engine_match_series(
        player1,
        player2,
        MatchSeriesConfig {
            games: arguments.games,
            base_seed: seed,
            per_game: MatchConfig {
                max_plies: arguments.max_plies,
                opening_min_plies: 0,
                opening_max_plies: 4,
            },
        },
    )?;

    println!("{}", stats.report());
    println!("outcomes: {:?}", stats.outcomes);
    Ok(())
}
