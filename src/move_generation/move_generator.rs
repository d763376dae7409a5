use crate::game_state::janggi_types::*;
use crate::game_state::position::Position;

/// Per-piece destination generation behind a swappable interface.
///
/// Implementations must be pure: they read `position` and never mutate it,
/// so one generator can serve concurrent scans of the same snapshot.
pub trait MoveGenerator: Send + Sync {
    /// Destinations of `piece` on `position`, sorted and free of duplicates.
    fn destinations(&self, position: &Position, piece: &Piece) -> Vec<Coordinate>;

    /// Every from/to pair available to `side`.
    fn moves_for_side(&self, position: &Position, side: Side) -> Vec<Move> {
        position
            .pieces_of(side)
            .flat_map(|piece| {
                self.destinations(position, &piece)
                    .into_iter()
                    .map(move |to| Move {
                        from: piece.position,
                        to,
                    })
            })
            .collect()
    }
}
