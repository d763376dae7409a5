use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::errors::JanggiError;
use crate::game_state::game_state::GameState;
use crate::game_state::janggi_types::{Move, PieceKind};
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;

/// One-ply capture maximiser with random tie-breaks.
pub struct GreedyEngine {
    move_generator: LegalMoveGenerator,
    rng: StdRng,
}

impl GreedyEngine {
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            move_generator: LegalMoveGenerator,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Conventional Janggi point values; the general outweighs everything.
    #[inline]
    pub fn piece_value(piece: PieceKind) -> i32 {
        match piece {
            PieceKind::Soldier => 2,
            PieceKind::Guard => 3,
            PieceKind::Elephant => 3,
            PieceKind::Horse => 5,
            PieceKind::Cannon => 7,
            PieceKind::Chariot => 13,
            PieceKind::General => 1000,
        }
    }
}

impl Default for GreedyEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for GreedyEngine {
    fn name(&self) -> &str {
        "Janggi Greedy"
    }

    fn choose_move(&mut self, game_state: &GameState) -> Result<EngineOutput, JanggiError> {
        if let Some(winner) = game_state.outcome() {
            return Err(JanggiError::GameOver(winner));
        }

        let side = game_state.side_to_move();
        let position = game_state.position();
        let legal_moves = self.move_generator.moves_for_side(position, side);

        let mut out = EngineOutput::default();
        out.info_lines
            .push(format!("info string greedy_engine legal_moves {}", legal_moves.len()));

        let mut best_value = i32::MIN;
        let mut best_moves: Vec<Move> = Vec::new();

        for mv in &legal_moves {
            let capture_value = position
                .piece_at(mv.to)
                .map_or(0, |captured| Self::piece_value(captured.kind));

            if capture_value > best_value {
                best_value = capture_value;
                best_moves.clear();
                best_moves.push(*mv);
            } else if capture_value == best_value {
                best_moves.push(*mv);
            }
        }

        let picked = best_moves
            .as_slice()
            .choose(&mut self.rng)
            .ok_or(JanggiError::NoMoves(side))?;

        out.info_lines
            .push(format!("info string greedy_engine capture_score {best_value}"));
        out.best_move = Some(*picked);
        Ok(out)
    }
}
