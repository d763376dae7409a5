use crate::game_state::janggi_types::*;
use crate::game_state::position::Position;
use crate::move_generation::legal_move_shared::push_if_enterable;
use crate::moves::horse_moves::HORSE_JUMPS;

pub fn generate_horse_moves(position: &Position, piece: &Piece, out: &mut Vec<Coordinate>) {
    let from = piece.position;
    for jump in HORSE_JUMPS {
        let Some(leg) = from.offset(jump.leg.0, jump.leg.1) else {
            continue;
        };
        if !position.is_empty_at(leg) {
            continue;
        }
        let Some(to) = from.offset(jump.offset.0, jump.offset.1) else {
            continue;
        };
        push_if_enterable(position, piece.side, to, out);
    }
}
