use clap::Parser;
use log::info;

use janggi::console::console_top::run_stdio_loop;
use janggi::engines::engine_greedy::GreedyEngine;
use janggi::engines::engine_random::RandomEngine;
use janggi::utils::engine_match_harness::{play_engine_match, MatchConfig};
use janggi::utils::logging::{init_logging, parse_level};
use janggi::utils::render_game_state::render_game_state;

/// Janggi board in a terminal: an interactive console by default, or one
/// random-versus-greedy self-play game with `--self-play`.
#[derive(Parser)]
#[clap(version)]
struct Arguments {
    /// Play one engine game instead of opening the console.
    #[clap(long)]
    self_play: bool,

    /// Seed for the self-play engines and opening.
    #[clap(long)]
    seed: Option<u64>,

    /// Ply limit for self-play.
    #[clap(long, default_value_t = 300)]
    max_plies: u16,

    /// Log filter, overriding JANGGI_LOG.
    #[clap(long, value_parser = parse_level)]
    log_level: Option<log::LevelFilter>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let arguments = Arguments::parse();
    init_logging(arguments.log_level);

    if !arguments.self_play {
        run_stdio_loop()?;
        return Ok(());
    }

    let seed = arguments.seed.unwrap_or_else(rand::random);
    info!("self-play seed {seed}");

    let result = play_engine_match(
        Box::new(RandomEngine::with_seed(seed)),
        Box::new(GreedyEngine::with_seed(seed.wrapping_add(1))),
        seed,
        MatchConfig {
            max_plies: arguments.max_plies,
            ..MatchConfig::default()
        },
    )?;

    println!("{}", render_game_state(&result.final_state));
    println!("opening: {}", result.opening_moves.join(" "));
    println!("moves: {}", result.played_moves.join(" "));
    println!("outcome: {:?} after {} plies", result.outcome, result.plies);
    Ok(())
}
