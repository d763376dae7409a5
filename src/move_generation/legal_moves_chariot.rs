//! Chariot move generation.
//!
//! Slides orthogonally to the first occupied point, and along any palace
//! diagonal (either palace) it stands on.

use crate::game_state::janggi_types::*;
use crate::game_state::position::Position;
use crate::move_generation::legal_move_shared::{ray, slide, ORTHOGONAL_DIRECTIONS};
use crate::moves::palace::{lines_through, ALL_PALACE_DIAGONALS};

pub fn generate_chariot_moves(position: &Position, piece: &Piece, out: &mut Vec<Coordinate>) {
    let from = piece.position;
    for (d_col, d_row) in ORTHOGONAL_DIRECTIONS {
        slide(position, piece.side, ray(from, d_col, d_row), out);
    }

    for (line, index) in lines_through(from, &ALL_PALACE_DIAGONALS) {
        slide(position, piece.side, line[..index].iter().rev().copied(), out);
        slide(position, piece.side, line[index + 1..].iter().copied(), out);
    }
}
