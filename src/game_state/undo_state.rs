use crate::game_state::janggi_types::*;

/// Single history entry for `apply_move` / `undo`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    /// The mover as it stood before the move.
    pub piece: Piece,
    pub from: Coordinate,
    pub to: Coordinate,
    /// Captured piece, still carrying the point it was taken on.
    pub captured: Option<Piece>,
}

impl MoveRecord {
    #[inline]
    pub fn as_move(&self) -> Move {
        Move {
            from: self.from,
            to: self.to,
        }
    }

    #[inline]
    pub fn captured_general(&self) -> bool {
        self.captured
            .is_some_and(|piece| piece.kind == PieceKind::General)
    }
}
