use crate::game_state::janggi_types::*;
use crate::game_state::position::Position;

pub const ORTHOGONAL_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// True when `side` may land on `at`: the point is empty or holds an enemy.
#[inline]
pub fn can_enter(position: &Position, side: Side, at: Coordinate) -> bool {
    !matches!(position.piece_at(at), Some(occupant) if occupant.side == side)
}

#[inline]
pub fn push_if_enterable(position: &Position, side: Side, at: Coordinate, out: &mut Vec<Coordinate>) {
    if can_enter(position, side, at) {
        out.push(at);
    }
}

/// Walks `path` in order, pushing empty points until the first occupied
/// point, which is pushed only when it holds an enemy.
pub fn slide<I>(position: &Position, side: Side, path: I, out: &mut Vec<Coordinate>)
where
    I: IntoIterator<Item = Coordinate>,
{
    for at in path {
        match position.piece_at(at) {
            None => out.push(at),
            Some(occupant) => {
                if occupant.side != side {
                    out.push(at);
                }
                break;
            }
        }
    }
}

/// Points from `from` (exclusive) to the board edge in one direction.
pub fn ray(from: Coordinate, d_col: i8, d_row: i8) -> impl Iterator<Item = Coordinate> {
    std::iter::successors(from.offset(d_col, d_row), move |at| at.offset(d_col, d_row))
}
