//! Core value types shared by every subsystem.
//!
//! Sides, piece kinds, board coordinates and pieces are all small `Copy`
//! values with structural equality, so they can be stored in the position
//! mailbox, recorded in the undo history and compared directly in tests.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::errors::JanggiError;
use crate::game_state::janggi_rules::{BOARD_COLS, BOARD_ROWS};

pub use crate::game_state::game_state::GameState;
pub use crate::game_state::undo_state::MoveRecord;

/// One of the two competing sides.
///
/// `Red` is han and starts on rows 6..=9, `Blue` is cho and starts on rows
/// 0..=3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    Red,
    Blue,
}

impl Side {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Side::Red => Side::Blue,
            Side::Blue => Side::Red,
        }
    }

    /// Row delta of a soldier's forward step.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Side::Red => -1,
            Side::Blue => 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Red => write!(f, "red"),
            Side::Blue => write!(f, "blue"),
        }
    }
}

/// Piece kind. Side is stored separately on [`Piece`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    General,
    Guard,
    Horse,
    Elephant,
    Chariot,
    Cannon,
    Soldier,
}

impl PieceKind {
    /// Single-letter code used by the text renderer and console.
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::General => 'k',
            PieceKind::Guard => 'a',
            PieceKind::Horse => 'h',
            PieceKind::Elephant => 'e',
            PieceKind::Chariot => 'r',
            PieceKind::Cannon => 'c',
            PieceKind::Soldier => 'p',
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::General => "general",
            PieceKind::Guard => "guard",
            PieceKind::Horse => "horse",
            PieceKind::Elephant => "elephant",
            PieceKind::Chariot => "chariot",
            PieceKind::Cannon => "cannon",
            PieceKind::Soldier => "soldier",
        };
        f.write_str(name)
    }
}

/// A board intersection. Always in bounds once constructed.
///
/// Ordering is row-major, matching [`Coordinate::index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    col: i8,
    row: i8,
}

impl Coordinate {
    /// Returns `None` for points off the 9x10 board.
    #[inline]
    pub const fn new(col: i8, row: i8) -> Option<Self> {
        if col < 0 || col >= BOARD_COLS || row < 0 || row >= BOARD_ROWS {
            return None;
        }
        Some(Self { col, row })
    }

    /// Like [`Coordinate::new`] but reports the offending pair.
    pub fn checked(col: i8, row: i8) -> Result<Self, JanggiError> {
        Self::new(col, row).ok_or(JanggiError::OutOfBounds { col, row })
    }

    #[inline]
    pub const fn offset(self, d_col: i8, d_row: i8) -> Option<Self> {
        Self::new(self.col + d_col, self.row + d_row)
    }

    #[inline]
    pub const fn col(self) -> i8 {
        self.col
    }

    #[inline]
    pub const fn row(self) -> i8 {
        self.row
    }

    /// Mailbox index, row-major.
    #[inline]
    pub const fn index(self) -> usize {
        (self.row as usize) * (BOARD_COLS as usize) + self.col as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        let cols = BOARD_COLS as usize;
        if index >= cols * BOARD_ROWS as usize {
            return None;
        }
        Self::new((index % cols) as i8, (index / cols) as i8)
    }

    /// Every point of the board, row by row.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..BOARD_ROWS).flat_map(|row| (0..BOARD_COLS).map(move |col| Coordinate { col, row }))
    }
}

impl Ord for Coordinate {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}

impl PartialOrd for Coordinate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.col as u8) as char, self.row)
    }
}

impl FromStr for Coordinate {
    type Err = JanggiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || JanggiError::InvalidCoordinate(s.to_owned());
        let mut chars = s.trim().chars();
        let file = chars.next().ok_or_else(invalid)?.to_ascii_lowercase();
        let rank = chars.next().ok_or_else(invalid)?;
        if chars.next().is_some() || !file.is_ascii_lowercase() {
            return Err(invalid());
        }
        let row = rank.to_digit(10).ok_or_else(invalid)? as i8;
        let col = (file as u8 - b'a') as i8;
        Self::new(col, row).ok_or_else(invalid)
    }
}

/// A piece standing on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub side: Side,
    pub position: Coordinate,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, side: Side, position: Coordinate) -> Self {
        Self {
            kind,
            side,
            position,
        }
    }

    /// Same piece relocated to `position`.
    #[inline]
    pub const fn at(self, position: Coordinate) -> Self {
        Self { position, ..self }
    }

    /// Uppercase for red, lowercase for blue.
    pub fn letter(&self) -> char {
        match self.side {
            Side::Red => self.kind.letter().to_ascii_uppercase(),
            Side::Blue => self.kind.letter(),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} at {}", self.side, self.kind, self.position)
    }
}

/// A from/to pair as produced by side-wide move generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Move {
    pub from: Coordinate,
    pub to: Coordinate,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}
