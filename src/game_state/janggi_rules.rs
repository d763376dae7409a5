//! Canonical Janggi rule constants.
//!
//! Board dimensions, the side that opens the game and the standard 32-piece
//! starting layout used by [`crate::game_state::position::Position::initial`].

use crate::game_state::janggi_types::{PieceKind, Side};

/// Number of columns (files) of intersections.
pub const BOARD_COLS: i8 = 9;
/// Number of rows (ranks) of intersections.
pub const BOARD_ROWS: i8 = 10;
pub const BOARD_POINTS: usize = (BOARD_COLS as usize) * (BOARD_ROWS as usize);

/// Cho (blue) opens the game.
pub const FIRST_SIDE: Side = Side::Blue;

/// Standard starting layout as `(col, row, kind, side)`.
pub const INITIAL_SETUP: [(i8, i8, PieceKind, Side); 32] = [
    (0, 0, PieceKind::Chariot, Side::Blue),
    (1, 0, PieceKind::Horse, Side::Blue),
    (2, 0, PieceKind::Elephant, Side::Blue),
    (3, 0, PieceKind::Guard, Side::Blue),
    (5, 0, PieceKind::Guard, Side::Blue),
    (6, 0, PieceKind::Elephant, Side::Blue),
    (7, 0, PieceKind::Horse, Side::Blue),
    (8, 0, PieceKind::Chariot, Side::Blue),
    (4, 1, PieceKind::General, Side::Blue),
    (1, 2, PieceKind::Cannon, Side::Blue),
    (7, 2, PieceKind::Cannon, Side::Blue),
    (0, 3, PieceKind::Soldier, Side::Blue),
    (2, 3, PieceKind::Soldier, Side::Blue),
    (4, 3, PieceKind::Soldier, Side::Blue),
    (6, 3, PieceKind::Soldier, Side::Blue),
    (8, 3, PieceKind::Soldier, Side::Blue),
    (0, 9, PieceKind::Chariot, Side::Red),
    (1, 9, PieceKind::Horse, Side::Red),
    (2, 9, PieceKind::Elephant, Side::Red),
    (3, 9, PieceKind::Guard, Side::Red),
    (5, 9, PieceKind::Guard, Side::Red),
    (6, 9, PieceKind::Elephant, Side::Red),
    (7, 9, PieceKind::Horse, Side::Red),
    (8, 9, PieceKind::Chariot, Side::Red),
    (4, 8, PieceKind::General, Side::Red),
    (1, 7, PieceKind::Cannon, Side::Red),
    (7, 7, PieceKind::Cannon, Side::Red),
    (0, 6, PieceKind::Soldier, Side::Red),
    (2, 6, PieceKind::Soldier, Side::Red),
    (4, 6, PieceKind::Soldier, Side::Red),
    (6, 6, PieceKind::Soldier, Side::Red),
    (8, 6, PieceKind::Soldier, Side::Red),
];
