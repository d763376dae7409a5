use crate::game_state::janggi_types::*;
use crate::game_state::position::Position;
use crate::move_generation::legal_move_generator::legal_destinations;

#[inline]
pub fn general_square(position: &Position, side: Side) -> Option<Coordinate> {
    position.general_of(side).map(|general| general.position)
}

/// True when `side`'s general can be captured next turn. A side whose
/// general is already gone is not in check.
#[inline]
pub fn is_general_in_check(position: &Position, side: Side) -> bool {
    let Some(general_sq) = general_square(position, side) else {
        return false;
    };
    is_square_attacked(position, general_sq, side.opposite())
}

pub fn is_square_attacked(position: &Position, square: Coordinate, attacker: Side) -> bool {
    position
        .pieces_of(attacker)
        .any(|piece| legal_destinations(position, &piece).contains(&square))
}

pub fn attackers_to_square(position: &Position, square: Coordinate, attacker: Side) -> Vec<Piece> {
    position
        .pieces_of(attacker)
        .filter(|piece| legal_destinations(position, piece).contains(&square))
        .collect()
}
