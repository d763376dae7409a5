//! Position-level make/unmake.
//!
//! Builds the [`MoveRecord`] for a move, commits it to a [`Position`] and
//! reverts it exactly. Turn order, legality and outcome belong to
//! [`crate::game_state::game_state::GameState`].

use crate::errors::JanggiError;
use crate::game_state::janggi_types::*;
use crate::game_state::position::Position;

/// Moves the piece on `from` to `to`, capturing any enemy there.
///
/// Fails without touching `position` when `from` is empty or `to` holds a
/// piece of the mover's own side.
pub fn apply_move(
    position: &mut Position,
    from: Coordinate,
    to: Coordinate,
) -> Result<MoveRecord, JanggiError> {
    let piece = position.piece_at(from).ok_or(JanggiError::NoPieceAt(from))?;
    let captured = position.piece_at(to);
    if captured.is_some_and(|target| target.side == piece.side) {
        return Err(JanggiError::OwnPieceAtDestination(to));
    }

    position.relocate(from, to);

    Ok(MoveRecord {
        piece,
        from,
        to,
        captured,
    })
}

/// Puts the mover back on its source point and restores any captured piece.
pub fn revert_move(position: &mut Position, record: &MoveRecord) {
    position.remove(record.from);
    position.remove(record.to);
    position.restore(record.piece);
    if let Some(captured) = record.captured {
        position.restore(captured);
    }
}
