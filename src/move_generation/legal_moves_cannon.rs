//! Cannon move generation.
//!
//! A cannon needs exactly one screen between itself and its destination.
//! Cannons can neither screen for nor be captured by another cannon.

use crate::game_state::janggi_types::*;
use crate::game_state::position::Position;
use crate::move_generation::legal_move_shared::{ray, ORTHOGONAL_DIRECTIONS};
use crate::moves::palace::{lines_through, ALL_PALACE_DIAGONALS};

pub fn generate_cannon_moves(position: &Position, piece: &Piece, out: &mut Vec<Coordinate>) {
    let from = piece.position;
    for (d_col, d_row) in ORTHOGONAL_DIRECTIONS {
        jump_screen(position, piece.side, ray(from, d_col, d_row), out);
    }

    // Diagonal jumps run end to end across the palace center.
    for (line, index) in lines_through(from, &ALL_PALACE_DIAGONALS) {
        if index == 1 {
            continue;
        }
        let screen_is_valid = position
            .piece_at(line[1])
            .is_some_and(|screen| screen.kind != PieceKind::Cannon);
        if !screen_is_valid {
            continue;
        }
        let target = line[2 - index];
        if is_cannon_landing(position, piece.side, target) {
            out.push(target);
        }
    }
}

fn jump_screen<I>(position: &Position, side: Side, path: I, out: &mut Vec<Coordinate>)
where
    I: IntoIterator<Item = Coordinate>,
{
    let mut screened = false;
    for at in path {
        match position.piece_at(at) {
            None => {
                if screened {
                    out.push(at);
                }
            }
            Some(screen) if !screened => {
                if screen.kind == PieceKind::Cannon {
                    return;
                }
                screened = true;
            }
            Some(_) => {
                if is_cannon_landing(position, side, at) {
                    out.push(at);
                }
                return;
            }
        }
    }
}

/// Empty, or an enemy piece that is not a cannon.
fn is_cannon_landing(position: &Position, side: Side, at: Coordinate) -> bool {
    match position.piece_at(at) {
        None => true,
        Some(occupant) => occupant.side != side && occupant.kind != PieceKind::Cannon,
    }
}
