//! Crate root module declarations for the Janggi rules engine.
//!
//! Exposes the board model, move rules, turn sequencing, engines, the text
//! console and utility helpers so binaries, tests and benches can import
//! stable module paths.

pub mod errors;

pub mod game_state {
    pub mod game_state;
    pub mod janggi_rules;
    pub mod janggi_types;
    pub mod position;
    pub mod undo_state;
}

pub mod moves {
    pub mod elephant_moves;
    pub mod horse_moves;
    pub mod palace;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_cannon;
    pub mod legal_moves_chariot;
    pub mod legal_moves_elephant;
    pub mod legal_moves_general;
    pub mod legal_moves_horse;
    pub mod legal_moves_soldier;
    pub mod move_generator;
    pub mod perft;
}

pub mod engines {
    pub mod engine_greedy;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod console {
    pub mod console_top;
}

pub mod utils {
    pub mod engine_match_harness;
    pub mod logging;
    pub mod render_game_state;
}

pub use crate::errors::JanggiError;
pub use crate::game_state::game_state::{ClickOutcome, GameState, GameStatus, MoveReport};
pub use crate::game_state::janggi_types::{Coordinate, Move, Piece, PieceKind, Side};
pub use crate::game_state::position::Position;
