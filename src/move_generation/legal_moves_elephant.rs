use crate::game_state::janggi_types::*;
use crate::game_state::position::Position;
use crate::move_generation::legal_move_shared::push_if_enterable;
use crate::moves::elephant_moves::ELEPHANT_JUMPS;

pub fn generate_elephant_moves(position: &Position, piece: &Piece, out: &mut Vec<Coordinate>) {
    let from = piece.position;
    for jump in ELEPHANT_JUMPS {
        let Some(to) = from.offset(jump.offset.0, jump.offset.1) else {
            continue;
        };
        let legs_clear = jump.legs.iter().all(|&(d_col, d_row)| {
            from.offset(d_col, d_row)
                .is_some_and(|leg| position.is_empty_at(leg))
        });
        if legs_clear {
            push_if_enterable(position, piece.side, to, out);
        }
    }
}
