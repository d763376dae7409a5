//! Board occupancy.
//!
//! `Position` is a 90-point mailbox indexed by [`Coordinate::index`]. Each
//! occupied point stores the full [`Piece`], whose `position` field always
//! equals the point it is stored on.

use crate::errors::JanggiError;
use crate::game_state::janggi_rules::{BOARD_POINTS, INITIAL_SETUP};
use crate::game_state::janggi_types::{Coordinate, Piece, PieceKind, Side};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    squares: [Option<Piece>; BOARD_POINTS],
}

impl Default for Position {
    fn default() -> Self {
        Self::empty()
    }
}

impl Position {
    pub fn empty() -> Self {
        Self {
            squares: [None; BOARD_POINTS],
        }
    }

    /// The standard 32-piece starting layout.
    pub fn initial() -> Self {
        let mut position = Self::empty();
        for (col, row, kind, side) in INITIAL_SETUP {
            if let Some(at) = Coordinate::new(col, row) {
                position.squares[at.index()] = Some(Piece::new(kind, side, at));
            }
        }
        position
    }

    /// Builds a position from loose pieces, rejecting two pieces on one point.
    pub fn from_pieces<I>(pieces: I) -> Result<Self, JanggiError>
    where
        I: IntoIterator<Item = Piece>,
    {
        let mut position = Self::empty();
        for piece in pieces {
            position.place(piece)?;
        }
        Ok(position)
    }

    #[inline]
    pub fn piece_at(&self, at: Coordinate) -> Option<Piece> {
        self.squares[at.index()]
    }

    #[inline]
    pub fn is_empty_at(&self, at: Coordinate) -> bool {
        self.squares[at.index()].is_none()
    }

    pub fn place(&mut self, piece: Piece) -> Result<(), JanggiError> {
        let slot = &mut self.squares[piece.position.index()];
        if slot.is_some() {
            return Err(JanggiError::SquareOccupied(piece.position));
        }
        *slot = Some(piece);
        Ok(())
    }

    /// Writes `piece` onto its own point, returning whatever stood there.
    pub fn restore(&mut self, piece: Piece) -> Option<Piece> {
        self.squares[piece.position.index()].replace(piece)
    }

    pub fn remove(&mut self, at: Coordinate) -> Option<Piece> {
        self.squares[at.index()].take()
    }

    /// Moves whatever stands on `from` to `to`, returning the piece that was
    /// displaced from `to`. Does nothing when `from` is empty.
    pub fn relocate(&mut self, from: Coordinate, to: Coordinate) -> Option<Piece> {
        let moving = self.squares[from.index()].take()?;
        self.squares[to.index()].replace(moving.at(to))
    }

    pub fn pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.squares.iter().filter_map(|slot| *slot)
    }

    pub fn pieces_of(&self, side: Side) -> impl Iterator<Item = Piece> + '_ {
        self.pieces().filter(move |piece| piece.side == side)
    }

    pub fn general_of(&self, side: Side) -> Option<Piece> {
        self.pieces_of(side)
            .find(|piece| piece.kind == PieceKind::General)
    }

    pub fn len(&self) -> usize {
        self.pieces().count()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces().next().is_none()
    }
}
