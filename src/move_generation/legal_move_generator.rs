//! Move generation entry points.
//!
//! Dispatches on [`PieceKind`] to the per-kind generators. Moves that leave
//! the mover's own general attacked are not filtered out: only capturing a
//! general ends the game.

use crate::game_state::janggi_types::*;
use crate::game_state::position::Position;
use crate::move_generation::legal_moves_cannon::generate_cannon_moves;
use crate::move_generation::legal_moves_chariot::generate_chariot_moves;
use crate::move_generation::legal_moves_elephant::generate_elephant_moves;
use crate::move_generation::legal_moves_general::{generate_general_moves, generate_guard_moves};
use crate::move_generation::legal_moves_horse::generate_horse_moves;
use crate::move_generation::legal_moves_soldier::generate_soldier_moves;
use crate::move_generation::move_generator::MoveGenerator;

#[derive(Debug, Clone, Copy, Default)]
pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn destinations(&self, position: &Position, piece: &Piece) -> Vec<Coordinate> {
        legal_destinations(position, piece)
    }
}

/// Legal destinations of `piece`, sorted row-major and duplicate-free.
pub fn legal_destinations(position: &Position, piece: &Piece) -> Vec<Coordinate> {
    let mut out = Vec::with_capacity(17);
    generate_piece_moves(position, piece, &mut out);
    out.sort_unstable();
    out.dedup();
    out
}

/// Appends the raw destinations of `piece` to `out`.
pub fn generate_piece_moves(position: &Position, piece: &Piece, out: &mut Vec<Coordinate>) {
    match piece.kind {
        PieceKind::General => generate_general_moves(position, piece, out),
        PieceKind::Guard => generate_guard_moves(position, piece, out),
        PieceKind::Horse => generate_horse_moves(position, piece, out),
        PieceKind::Elephant => generate_elephant_moves(position, piece, out),
        PieceKind::Chariot => generate_chariot_moves(position, piece, out),
        PieceKind::Cannon => generate_cannon_moves(position, piece, out),
        PieceKind::Soldier => generate_soldier_moves(position, piece, out),
    }
}

pub fn legal_moves_for_side(position: &Position, side: Side) -> Vec<Move> {
    LegalMoveGenerator.moves_for_side(position, side)
}
