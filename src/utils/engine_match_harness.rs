//! Minimal head-to-head engine match harness for local testing.
//!
//! This module runs two `Engine` implementations against each other on a
//! [`GameState`], with an optional seeded random opening prefix.

use log::{debug, info};
use rand::prelude::IndexedRandom;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::time::Instant;

use crate::engines::engine_trait::Engine;
use crate::errors::JanggiError;
use crate::game_state::game_state::GameState;
use crate::game_state::janggi_types::Side;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// A general was captured by this side.
    Won(Side),
    MaxPlies,
    /// This side had no move to make.
    Stalled(Side),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerId {
    Player1,
    Player2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesOutcome {
    PlayerWin { player: PlayerId, side: Side },
    Stalled { player: PlayerId, side: Side },
    DrawMaxPlies,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u16,
    pub opening_min_plies: u8,
    pub opening_max_plies: u8,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 300,
            opening_min_plies: 0,
            opening_max_plies: 4,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    /// Plies played by the engines, excluding the random opening.
    pub plies: u16,
    pub opening_moves: Vec<String>,
    pub played_moves: Vec<String>,
    pub final_state: GameState,
    pub blue_move_count: u32,
    pub red_move_count: u32,
    pub blue_total_time_ns: u128,
    pub red_total_time_ns: u128,
}

#[derive(Debug, Clone)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: MatchConfig,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 10,
            base_seed: 0,
            per_game: MatchConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub games: u16,
    pub player1_wins: u16,
    pub player2_wins: u16,
    pub draws: u16,
    pub outcomes: Vec<SeriesOutcome>,
    pub player1_moves: u32,
    pub player2_moves: u32,
    pub player1_total_time_ns: u128,
    pub player2_total_time_ns: u128,
    pub player1_avg_move_time_ms: f64,
    pub player2_avg_move_time_ms: f64,
    pub overall_avg_move_time_ms: f64,
}

impl MatchSeriesStats {
    pub fn report(&self) -> String {
        format!(
            "games={} player1_wins={} player2_wins={} draws={} p1_avg_ms={:.3} p2_avg_ms={:.3} overall_avg_ms={:.3}",
            self.games,
            self.player1_wins,
            self.player2_wins,
            self.draws,
            self.player1_avg_move_time_ms,
            self.player2_avg_move_time_ms,
            self.overall_avg_move_time_ms
        )
    }
}

/// Play a single seeded engine-vs-engine match from the standard layout.
///
/// `engine_blue` opens, `engine_red` replies.
pub fn play_engine_match(
    mut engine_blue: Box<dyn Engine>,
    mut engine_red: Box<dyn Engine>,
    seed: u64,
    config: MatchConfig,
) -> Result<MatchResult, JanggiError> {
    play_engine_match_from_state_internal(
        GameState::new_game(),
        engine_blue.as_mut(),
        engine_red.as_mut(),
        seed,
        config,
        true,
    )
}

/// Like [`play_engine_match`] but from a caller-provided game and without
/// the random opening.
pub fn play_engine_match_from_state(
    mut engine_blue: Box<dyn Engine>,
    mut engine_red: Box<dyn Engine>,
    start_state: GameState,
    seed: u64,
    config: MatchConfig,
) -> Result<MatchResult, JanggiError> {
    play_engine_match_from_state_internal(
        start_state,
        engine_blue.as_mut(),
        engine_red.as_mut(),
        seed,
        config,
        false,
    )
}

fn play_engine_match_from_state_internal<'a>(
    mut state: GameState,
    engine_blue: &'a mut dyn Engine,
    engine_red: &'a mut dyn Engine,
    seed: u64,
    config: MatchConfig,
    apply_random_opening: bool,
) -> Result<MatchResult, JanggiError> {
    engine_blue.new_game();
    engine_red.new_game();

    let opening_moves = if apply_random_opening {
        apply_seeded_random_opening(
            &mut state,
            seed,
            config.opening_min_plies,
            config.opening_max_plies,
        )?
    } else {
        Vec::new()
    };

    let mut result = MatchResult {
        outcome: MatchOutcome::MaxPlies,
        plies: 0,
        opening_moves,
        played_moves: Vec::new(),
        final_state: GameState::new_game(),
        blue_move_count: 0,
        red_move_count: 0,
        blue_total_time_ns: 0,
        red_total_time_ns: 0,
    };

    while result.plies < config.max_plies {
        if let Some(winner) = state.outcome() {
            result.outcome = MatchOutcome::Won(winner);
            break;
        }

        let mover = state.side_to_move();
        let engine = match mover {
            Side::Blue => &mut *engine_blue,
            Side::Red => &mut *engine_red,
        };

        let started = Instant::now();
        let chosen = match engine.choose_move(&state) {
            Ok(out) => out.best_move,
            Err(JanggiError::NoMoves(_)) => None,
            Err(err) => return Err(err),
        };
        let elapsed_ns = started.elapsed().as_nanos();

        match mover {
            Side::Blue => {
                result.blue_move_count = result.blue_move_count.saturating_add(1);
                result.blue_total_time_ns = result.blue_total_time_ns.saturating_add(elapsed_ns);
            }
            Side::Red => {
                result.red_move_count = result.red_move_count.saturating_add(1);
                result.red_total_time_ns = result.red_total_time_ns.saturating_add(elapsed_ns);
            }
        }

        let Some(chosen) = chosen else {
            debug!("{} ({}) has no move", mover, engine.name());
            result.outcome = MatchOutcome::Stalled(mover);
            break;
        };

        state.try_move(chosen.from, chosen.to)?;
        result.played_moves.push(chosen.to_string());
        result.plies += 1;
    }

    if let Some(winner) = state.outcome() {
        result.outcome = MatchOutcome::Won(winner);
    }
    result.final_state = state;
    Ok(result)
}

/// Play a series of matches and aggregate win/loss/draw statistics.
///
/// Seats alternate: player 1 opens as blue in even-numbered games.
pub fn play_engine_match_series<F1, F2>(
    player1_factory: F1,
    player2_factory: F2,
    config: MatchSeriesConfig,
) -> Result<MatchSeriesStats, JanggiError>
where
    F1: Fn() -> Box<dyn Engine>,
    F2: Fn() -> Box<dyn Engine>,
{
    let mut stats = MatchSeriesStats {
        games: config.games,
        ..MatchSeriesStats::default()
    };

    for i in 0..config.games {
        let player1_is_blue = i % 2 == 0;
        let seed = config.base_seed.wrapping_add(u64::from(i));
        debug!(
            "[series] game {}/{} seed={} player1={}",
            i + 1,
            config.games,
            seed,
            if player1_is_blue { Side::Blue } else { Side::Red }
        );

        let result = if player1_is_blue {
            play_engine_match(player1_factory(), player2_factory(), seed, config.per_game.clone())?
        } else {
            play_engine_match(player2_factory(), player1_factory(), seed, config.per_game.clone())?
        };

        let (p1_moves, p2_moves, p1_ns, p2_ns) = if player1_is_blue {
            (result.blue_move_count, result.red_move_count, result.blue_total_time_ns, result.red_total_time_ns)
        } else {
            (result.red_move_count, result.blue_move_count, result.red_total_time_ns, result.blue_total_time_ns)
        };
        stats.player1_moves = stats.player1_moves.saturating_add(p1_moves);
        stats.player2_moves = stats.player2_moves.saturating_add(p2_moves);
        stats.player1_total_time_ns = stats.player1_total_time_ns.saturating_add(p1_ns);
        stats.player2_total_time_ns = stats.player2_total_time_ns.saturating_add(p2_ns);

        let player_for = |side: Side| {
            if (side == Side::Blue) == player1_is_blue {
                PlayerId::Player1
            } else {
                PlayerId::Player2
            }
        };

        let mapped = match result.outcome {
            MatchOutcome::Won(side) => {
                let player = player_for(side);
                match player {
                    PlayerId::Player1 => stats.player1_wins += 1,
                    PlayerId::Player2 => stats.player2_wins += 1,
                }
                SeriesOutcome::PlayerWin { player, side }
            }
            MatchOutcome::Stalled(side) => {
                stats.draws += 1;
                SeriesOutcome::Stalled {
                    player: player_for(side),
                    side,
                }
            }
            MatchOutcome::MaxPlies => {
                stats.draws += 1;
                SeriesOutcome::DrawMaxPlies
            }
        };
        stats.outcomes.push(mapped);

        info!(
            "[series] game {}/{} result={:?} p1_wins={} p2_wins={} draws={}",
            i + 1,
            config.games,
            mapped,
            stats.player1_wins,
            stats.player2_wins,
            stats.draws
        );
    }

    stats.player1_avg_move_time_ms = avg_ns_per_move_ms(stats.player1_total_time_ns, stats.player1_moves);
    stats.player2_avg_move_time_ms = avg_ns_per_move_ms(stats.player2_total_time_ns, stats.player2_moves);

    let total_ns = stats.player1_total_time_ns.saturating_add(stats.player2_total_time_ns);
    let total_moves = stats.player1_moves.saturating_add(stats.player2_moves);
    stats.overall_avg_move_time_ms = avg_ns_per_move_ms(total_ns, total_moves);

    Ok(stats)
}

#[inline]
fn avg_ns_per_move_ms(total_ns: u128, moves: u32) -> f64 {
    if moves == 0 {
        0.0
    } else {
        (total_ns as f64) / (moves as f64) / 1_000_000.0
    }
}

/// Plays a seeded number of uniformly random plies on `state`.
fn apply_seeded_random_opening(
    state: &mut GameState,
    seed: u64,
    min_plies: u8,
    max_plies: u8,
) -> Result<Vec<String>, JanggiError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut opening_moves = Vec::new();

    let low = min_plies.min(max_plies);
    let high = max_plies.max(min_plies);
    let target_plies = if low == high { low } else { rng.random_range(low..=high) };

    for _ in 0..target_plies {
        if state.is_over() {
            break;
        }
        let legal_moves = state.moves();
        let Some(&chosen) = legal_moves.choose(&mut rng) else {
            break;
        };
        state.try_move(chosen.from, chosen.to)?;
        opening_moves.push(chosen.to_string());
    }

    Ok(opening_moves)
}
