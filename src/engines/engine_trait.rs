//! Engine abstraction used by self-play and the console.
//!
//! An engine looks at a game and proposes one move for the side to move.
//! Engines never mutate the game; the caller applies the proposal.

use crate::errors::JanggiError;
use crate::game_state::game_state::GameState;
use crate::game_state::janggi_types::Move;

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<Move>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    /// Fails with [`JanggiError::NoMoves`] when the side to move has nothing
    /// to play, and with [`JanggiError::GameOver`] on a finished game.
    fn choose_move(&mut self, game_state: &GameState) -> Result<EngineOutput, JanggiError>;
}
