//! Static palace geometry.
//!
//! Each side owns a 3x3 palace on its back rows. Two 3-point diagonal lines
//! cross each palace; diagonal steps and slides are only ever taken along
//! these lines.

use crate::game_state::janggi_types::{Coordinate, Side};

pub const PALACE_COL_MIN: i8 = 3;
pub const PALACE_COL_MAX: i8 = 5;

/// Three points joined by a palace diagonal, end to end.
pub type DiagonalLine = [Coordinate; 3];

const fn point(col: i8, row: i8) -> Coordinate {
    match Coordinate::new(col, row) {
        Some(coordinate) => coordinate,
        None => panic!("palace point off the board"),
    }
}

pub const BLUE_PALACE_DIAGONALS: [DiagonalLine; 2] = [
    [point(3, 0), point(4, 1), point(5, 2)],
    [point(5, 0), point(4, 1), point(3, 2)],
];

pub const RED_PALACE_DIAGONALS: [DiagonalLine; 2] = [
    [point(3, 7), point(4, 8), point(5, 9)],
    [point(5, 7), point(4, 8), point(3, 9)],
];

/// Both palaces' lines; chariots and cannons may use either palace.
pub const ALL_PALACE_DIAGONALS: [DiagonalLine; 4] = [
    BLUE_PALACE_DIAGONALS[0],
    BLUE_PALACE_DIAGONALS[1],
    RED_PALACE_DIAGONALS[0],
    RED_PALACE_DIAGONALS[1],
];

/// Inclusive row range of a side's palace.
#[inline]
pub const fn palace_rows(side: Side) -> (i8, i8) {
    match side {
        Side::Blue => (0, 2),
        Side::Red => (7, 9),
    }
}

#[inline]
pub const fn palace_diagonals(side: Side) -> &'static [DiagonalLine; 2] {
    match side {
        Side::Blue => &BLUE_PALACE_DIAGONALS,
        Side::Red => &RED_PALACE_DIAGONALS,
    }
}

pub fn in_palace(at: Coordinate, side: Side) -> bool {
    let (top, bottom) = palace_rows(side);
    (PALACE_COL_MIN..=PALACE_COL_MAX).contains(&at.col()) && (top..=bottom).contains(&at.row())
}

/// Lines from `lines` that pass through `at`, with the index of `at` on each.
pub fn lines_through<'a>(
    at: Coordinate,
    lines: &'a [DiagonalLine],
) -> impl Iterator<Item = (&'a DiagonalLine, usize)> + 'a {
    lines.iter().filter_map(move |line| {
        line.iter()
            .position(|&point| point == at)
            .map(|index| (line, index))
    })
}

/// Orthogonal one-step neighbours that stay inside `side`'s palace.
pub fn orthogonal_neighbors(at: Coordinate, side: Side) -> impl Iterator<Item = Coordinate> {
    [(1, 0), (-1, 0), (0, 1), (0, -1)]
        .into_iter()
        .filter_map(move |(d_col, d_row)| at.offset(d_col, d_row))
        .filter(move |&neighbor| in_palace(neighbor, side))
}

/// Points adjacent to `at` along `side`'s palace diagonals.
pub fn diagonal_neighbors(at: Coordinate, side: Side) -> impl Iterator<Item = Coordinate> {
    lines_through(at, palace_diagonals(side)).flat_map(|(line, index)| {
        let before = index.checked_sub(1).map(|i| line[i]);
        let after = line.get(index + 1).copied();
        before.into_iter().chain(after)
    })
}

/// Orthogonal and diagonal palace neighbours of `at`, without duplicates.
pub fn palace_neighbors(at: Coordinate, side: Side) -> Vec<Coordinate> {
    let mut out = Vec::with_capacity(8);
    for neighbor in orthogonal_neighbors(at, side).chain(diagonal_neighbors(at, side)) {
        if !out.contains(&neighbor) {
            out.push(neighbor);
        }
    }
    out
}
