//! Soldier move generation.
//!
//! One step forward or sideways, never backward. Inside the enemy palace a
//! soldier standing on a diagonal may also step diagonally forward along it.

use crate::game_state::janggi_types::*;
use crate::game_state::position::Position;
use crate::move_generation::legal_move_shared::push_if_enterable;
use crate::moves::palace::{lines_through, palace_diagonals};

pub fn generate_soldier_moves(position: &Position, piece: &Piece, out: &mut Vec<Coordinate>) {
    let from = piece.position;
    let forward = piece.side.forward();

    for (d_col, d_row) in [(-1, 0), (1, 0), (0, forward)] {
        if let Some(to) = from.offset(d_col, d_row) {
            push_if_enterable(position, piece.side, to, out);
        }
    }

    let enemy_lines = palace_diagonals(piece.side.opposite());
    for (line, index) in lines_through(from, enemy_lines) {
        let neighbors = index
            .checked_sub(1)
            .map(|i| line[i])
            .into_iter()
            .chain(line.get(index + 1).copied());
        for to in neighbors {
            if to.row() - from.row() == forward {
                push_if_enterable(position, piece.side, to, out);
            }
        }
    }
}
