//! Uniform random-move engine.
//!
//! Selects uniformly from the moves of the side to move. Used for self-play
//! smoke runs, integration tests and the console's `engine` command.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::errors::JanggiError;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;

pub struct RandomEngine {
    move_generator: LegalMoveGenerator,
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    /// Reproducible engine: equal seeds pick equal moves from equal games.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            move_generator: LegalMoveGenerator,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Janggi Random"
    }

    fn choose_move(&mut self, game_state: &GameState) -> Result<EngineOutput, JanggiError> {
        if let Some(winner) = game_state.outcome() {
            return Err(JanggiError::GameOver(winner));
        }

        let side = game_state.side_to_move();
        let legal_moves = self
            .move_generator
            .moves_for_side(game_state.position(), side);

        let mut out = EngineOutput::default();
        out.info_lines
            .push(format!("info string random_engine legal_moves {}", legal_moves.len()));

        let picked = legal_moves
            .as_slice()
            .choose(&mut self.rng)
            .ok_or(JanggiError::NoMoves(side))?;

        out.best_move = Some(*picked);
        Ok(out)
    }
}
