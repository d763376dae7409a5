//! Plain-text board renderer.
//!
//! Row 0 (blue's back rank) is printed on top. Red pieces are uppercase,
//! blue pieces lowercase and empty points `+`.

use crate::game_state::game_state::GameState;
use crate::game_state::janggi_rules::{BOARD_COLS, BOARD_ROWS};
use crate::game_state::janggi_types::Coordinate;
use crate::game_state::position::Position;

const FILE_LABELS: &str = "  a b c d e f g h i";

/// Render the board of `game_state` for terminal output.
pub fn render_game_state(game_state: &GameState) -> String {
    render_position(game_state.position(), &[])
}

/// Render with `highlights` marked `*` where they fall on empty points.
pub fn render_position(position: &Position, highlights: &[Coordinate]) -> String {
    let mut out = String::new();

    out.push_str(FILE_LABELS);
    out.push('\n');

    for row in 0..BOARD_ROWS {
        out.push(char::from(b'0' + row as u8));
        out.push(' ');

        for col in 0..BOARD_COLS {
            let symbol = Coordinate::new(col, row).map_or('?', |at| match position.piece_at(at) {
                Some(piece) => piece.letter(),
                None if highlights.contains(&at) => '*',
                None => '+',
            });
            out.push(symbol);

            if col < BOARD_COLS - 1 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'0' + row as u8));
        out.push('\n');
    }

    out.push_str(FILE_LABELS);

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_board_renders_both_back_ranks() {
        let text = render_game_state(&GameState::new_game());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 12);
        assert_eq!(lines[0], FILE_LABELS);
        assert_eq!(lines[1], "0 r h e a + a e h r 0");
        assert_eq!(lines[2], "1 + + + + k + + + + 1");
        assert_eq!(lines[9], "8 + + + + K + + + + 8");
        assert_eq!(lines[10], "9 R H E A + A E H R 9");
        assert_eq!(lines[11], FILE_LABELS);
    }

    #[test]
    fn highlights_only_mark_empty_points() {
        let position = Position::initial();
        let a0 = Coordinate::new(0, 0).unwrap();
        let a1 = Coordinate::new(0, 1).unwrap();
        let text = render_position(&position, &[a0, a1]);
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[1].starts_with("0 r "));
        assert!(lines[2].starts_with("1 * "));
    }
}
