//! General and guard move generation.
//!
//! Both kinds step one point inside their own palace, orthogonally or along
//! a palace diagonal when standing on one.

use crate::game_state::janggi_types::*;
use crate::game_state::position::Position;
use crate::move_generation::legal_move_shared::push_if_enterable;
use crate::moves::palace::palace_neighbors;

pub fn generate_general_moves(position: &Position, piece: &Piece, out: &mut Vec<Coordinate>) {
    generate_palace_steps(position, piece, out);
}

pub fn generate_guard_moves(position: &Position, piece: &Piece, out: &mut Vec<Coordinate>) {
    generate_palace_steps(position, piece, out);
}

fn generate_palace_steps(position: &Position, piece: &Piece, out: &mut Vec<Coordinate>) {
    for to in palace_neighbors(piece.position, piece.side) {
        push_if_enterable(position, piece.side, to, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(col: i8, row: i8) -> Coordinate {
        Coordinate::new(col, row).unwrap()
    }

    fn destinations(position: &Position, piece: Piece) -> Vec<Coordinate> {
        let mut out = Vec::new();
        generate_general_moves(position, &piece, &mut out);
        out.sort();
        out
    }

    #[test]
    fn general_in_palace_center_reaches_all_eight_points() {
        let general = Piece::new(PieceKind::General, Side::Red, at(4, 8));
        let position = Position::from_pieces([general]).unwrap();
        let moves = destinations(&position, general);
        assert_eq!(
            moves,
            vec![at(3, 7), at(4, 7), at(5, 7), at(3, 8), at(5, 8), at(3, 9), at(4, 9), at(5, 9)]
        );
    }

    #[test]
    fn guard_on_edge_midpoint_moves_orthogonally_only() {
        let guard = Piece::new(PieceKind::Guard, Side::Blue, at(3, 1));
        let position = Position::from_pieces([guard]).unwrap();
        let mut out = Vec::new();
        generate_guard_moves(&position, &guard, &mut out);
        out.sort();
        assert_eq!(out, vec![at(3, 0), at(4, 1), at(3, 2)]);
    }

    #[test]
    fn own_pieces_block_and_enemies_are_captured() {
        let general = Piece::new(PieceKind::General, Side::Blue, at(3, 0));
        let own_guard = Piece::new(PieceKind::Guard, Side::Blue, at(4, 0));
        let enemy = Piece::new(PieceKind::Chariot, Side::Red, at(4, 1));
        let position = Position::from_pieces([general, own_guard, enemy]).unwrap();
        assert_eq!(destinations(&position, general), vec![at(3, 1), at(4, 1)]);
    }
}
