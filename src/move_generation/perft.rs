use std::panic;
use std::sync::Arc;
use std::thread;

use crate::errors::JanggiError;
use crate::game_state::game_state::GameState;
use crate::game_state::janggi_types::Move;
use crate::move_generation::move_generator::MoveGenerator;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub general_captures: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.general_captures += rhs.general_captures;
    }
}

/// Counts leaf positions `depth` plies below `game_state`.
///
/// A general capture ends the game, so lines that capture a general before
/// the final ply contribute nothing below that point.
pub fn perft<G: MoveGenerator>(
    generator: &G,
    game_state: &GameState,
    depth: u8,
) -> Result<PerftCounts, JanggiError> {
    perft_single_thread(generator, game_state, depth)
}

pub fn perft_single_thread<G: MoveGenerator>(
    generator: &G,
    game_state: &GameState,
    depth: u8,
) -> Result<PerftCounts, JanggiError> {
    let mut scratch = game_state.clone();
    let mut total = PerftCounts::default();
    perft_recurse(generator, &mut scratch, depth, &mut total)?;
    Ok(total)
}

/// Splits the root moves across one thread each.
pub fn perft_multi_threaded(
    generator: Arc<dyn MoveGenerator>,
    game_state: &GameState,
    depth: u8,
) -> Result<PerftCounts, JanggiError> {
    if depth == 0 || game_state.is_over() {
        let mut scratch = game_state.clone();
        let mut total = PerftCounts::default();
        perft_recurse(generator.as_ref(), &mut scratch, depth, &mut total)?;
        return Ok(total);
    }

    let root_moves = side_moves(generator.as_ref(), game_state);
    let mut handles = Vec::with_capacity(root_moves.len());

    for mv in root_moves {
        let generator_ref = Arc::clone(&generator);
        let mut child = game_state.clone();
        handles.push(thread::spawn(move || {
            let mut local = PerftCounts::default();
            let mut result = play(&mut child, mv, depth, &mut local);
            if result.is_ok() && depth > 1 {
                result = perft_recurse(generator_ref.as_ref(), &mut child, depth - 1, &mut local);
            }
            (result, local)
        }));
    }

    let mut total = PerftCounts::default();
    for handle in handles {
        let (result, local) = handle.join().unwrap_or_else(|payload| panic::resume_unwind(payload));
        result?;
        total.merge(local);
    }

    Ok(total)
}

fn side_moves(generator: &dyn MoveGenerator, game_state: &GameState) -> Vec<Move> {
    generator.moves_for_side(game_state.position(), game_state.side_to_move())
}

/// Applies `mv`, counting it when it is the last ply of the walk.
fn play(game_state: &mut GameState, mv: Move, depth: u8, counts: &mut PerftCounts) -> Result<(), JanggiError> {
    let captured = game_state.apply_move(mv.from, mv.to)?;
    if !game_state.is_over() {
        game_state.switch_turn();
    }

    if depth == 1 {
        counts.nodes += 1;
        if captured.is_some() {
            counts.captures += 1;
        }
        if game_state.is_over() {
            counts.general_captures += 1;
        }
    }
    Ok(())
}

fn perft_recurse(
    generator: &dyn MoveGenerator,
    game_state: &mut GameState,
    depth: u8,
    counts: &mut PerftCounts,
) -> Result<(), JanggiError> {
    if depth == 0 {
        counts.nodes += 1;
        return Ok(());
    }
    if game_state.is_over() {
        return Ok(());
    }

    for mv in side_moves(generator, game_state) {
        play(game_state, mv, depth, counts)?;
        if depth > 1 {
            perft_recurse(generator, game_state, depth - 1, counts)?;
        }
        game_state.undo_last_move()?;
    }

    Ok(())
}
