//! Errors used throughout the Janggi engine.
//!
//! `JanggiError` is the single error type of the crate. Every variant is an
//! expected, recoverable condition: an operation that returns one leaves the
//! game state exactly as it was.

use thiserror::Error;

use crate::game_state::janggi_types::{Coordinate, Side};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JanggiError {
    /// A column/row pair outside the 9x10 board.
    #[error("coordinate ({col}, {row}) is off the board")]
    OutOfBounds { col: i8, row: i8 },

    /// Text that is not a point in `a0`..`i9` notation.
    #[error("invalid coordinate notation '{0}'")]
    InvalidCoordinate(String),

    #[error("no piece at {0}")]
    NoPieceAt(Coordinate),

    /// The selected piece does not belong to the side to move.
    #[error("it is {expected}'s turn, not {found}'s")]
    WrongSide { expected: Side, found: Side },

    /// The destination is not in the piece's legal set.
    #[error("illegal move from {from} to {to}")]
    IllegalMove { from: Coordinate, to: Coordinate },

    #[error("destination {0} is occupied by the mover's own side")]
    OwnPieceAtDestination(Coordinate),

    /// A general has been captured; only undo can reopen the game.
    #[error("game is over, {0} has won")]
    GameOver(Side),

    #[error("no move to undo")]
    EmptyHistory,

    #[error("point {0} is already occupied")]
    SquareOccupied(Coordinate),

    /// Move generation produced nothing for the side to move.
    #[error("{0} has no moves")]
    NoMoves(Side),
}
