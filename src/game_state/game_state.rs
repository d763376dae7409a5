//! Authoritative game model.
//!
//! `GameState` owns the position, the side to move, the undo history, the
//! outcome and the UI selection. It sequences turns, gates moves through the
//! rules in [`crate::move_generation`] and detects the one terminal event of
//! the game: the capture of a general.
//!
//! There is no internal synchronisation. Callers sharing one game across
//! threads must serialise every mutating call themselves.

use log::{debug, info, trace};

use crate::errors::JanggiError;
use crate::game_state::janggi_rules::FIRST_SIDE;
use crate::game_state::janggi_types::*;
use crate::game_state::position::Position;
use crate::move_generation::legal_move_apply::{apply_move, revert_move};
use crate::move_generation::legal_move_checks::is_general_in_check;
use crate::move_generation::legal_move_generator::{legal_destinations, legal_moves_for_side};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Ended(Side),
}

/// Result of a turn-loop move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveReport {
    pub applied: bool,
    pub captured: Option<PieceKind>,
    /// Winner after the request, if the game has ended.
    pub outcome: Option<Side>,
}

/// What a board click did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    Selected(Coordinate),
    Moved(MoveReport),
    Cleared,
    Ignored,
}

#[derive(Debug, Clone)]
pub struct GameState {
    position: Position,
    side_to_move: Side,
    history: Vec<MoveRecord>,
    outcome: Option<Side>,
    selected: Option<Coordinate>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Standard layout, blue to move.
    pub fn new_game() -> Self {
        Self::from_position(Position::initial(), FIRST_SIDE)
    }

    pub fn from_position(position: Position, side_to_move: Side) -> Self {
        Self {
            position,
            side_to_move,
            history: Vec::new(),
            outcome: None,
            selected: None,
        }
    }

    #[inline]
    pub fn position(&self) -> &Position {
        &self.position
    }

    #[inline]
    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    #[inline]
    pub fn outcome(&self) -> Option<Side> {
        self.outcome
    }

    pub fn status(&self) -> GameStatus {
        match self.outcome {
            Some(winner) => GameStatus::Ended(winner),
            None => GameStatus::InProgress,
        }
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.history.last()
    }

    pub fn piece_at(&self, at: Coordinate) -> Option<Piece> {
        self.position.piece_at(at)
    }

    /// Legal destinations of whatever stands on `at`; empty for an empty point.
    pub fn legal_moves(&self, at: Coordinate) -> Vec<Coordinate> {
        match self.position.piece_at(at) {
            Some(piece) => legal_destinations(&self.position, &piece),
            None => Vec::new(),
        }
    }

    pub fn legal_moves_for(&self, piece: &Piece) -> Vec<Coordinate> {
        legal_destinations(&self.position, piece)
    }

    /// Every move available to the side to move.
    pub fn moves(&self) -> Vec<Move> {
        legal_moves_for_side(&self.position, self.side_to_move)
    }

    pub fn is_in_check(&self, side: Side) -> bool {
        is_general_in_check(&self.position, side)
    }

    /// Commits `from -> to` without checking turn order or the legal set.
    ///
    /// Fails when the game has ended, `from` is empty or `to` holds a piece of
    /// the mover's side. Capturing a general ends the game in the mover's
    /// favour. The side to move is left alone; see [`GameState::switch_turn`].
    pub fn apply_move(
        &mut self,
        from: Coordinate,
        to: Coordinate,
    ) -> Result<Option<Piece>, JanggiError> {
        if let Some(winner) = self.outcome {
            return Err(JanggiError::GameOver(winner));
        }

        let record = apply_move(&mut self.position, from, to)?;
        trace!("{} {} -> {}", record.piece.side, record.as_move(), record.piece.kind);

        if record.captured_general() {
            info!("{} captured the {} general with {}", record.piece.side, record.piece.side.opposite(), record.as_move());
            self.outcome = Some(record.piece.side);
        }

        self.history.push(record);
        Ok(record.captured)
    }

    pub fn switch_turn(&mut self) {
        self.side_to_move = self.side_to_move.opposite();
    }

    /// Full turn-loop move: validates, applies and passes the turn unless
    /// the move ended the game.
    pub fn try_move(&mut self, from: Coordinate, to: Coordinate) -> Result<MoveReport, JanggiError> {
        if let Some(winner) = self.outcome {
            return Err(JanggiError::GameOver(winner));
        }

        let piece = self.position.piece_at(from).ok_or(JanggiError::NoPieceAt(from))?;
        if piece.side != self.side_to_move {
            return Err(JanggiError::WrongSide {
                expected: self.side_to_move,
                found: piece.side,
            });
        }
        if self.position.piece_at(to).is_some_and(|target| target.side == piece.side) {
            return Err(JanggiError::OwnPieceAtDestination(to));
        }
        if !legal_destinations(&self.position, &piece).contains(&to) {
            return Err(JanggiError::IllegalMove { from, to });
        }

        let captured = self.apply_move(from, to)?;
        if self.outcome.is_none() {
            self.switch_turn();
        }
        self.selected = None;

        Ok(MoveReport {
            applied: true,
            captured: captured.map(|piece| piece.kind),
            outcome: self.outcome,
        })
    }

    /// [`GameState::try_move`] with rejections folded into `applied == false`.
    pub fn attempt_move(&mut self, from: Coordinate, to: Coordinate) -> MoveReport {
        match self.try_move(from, to) {
            Ok(report) => report,
            Err(err) => {
                debug!("rejected {from}{to}: {err}");
                MoveReport {
                    applied: false,
                    captured: None,
                    outcome: self.outcome,
                }
            }
        }
    }

    /// Takes back the last move and hands the turn back to its mover.
    pub fn undo_last_move(&mut self) -> Result<MoveRecord, JanggiError> {
        let record = self.history.pop().ok_or(JanggiError::EmptyHistory)?;
        revert_move(&mut self.position, &record);
        self.side_to_move = record.piece.side;
        self.selected = None;

        if record.captured_general() {
            info!("undo of {} reopens the game", record.as_move());
            self.outcome = None;
        }

        trace!("undo {}", record.as_move());
        Ok(record)
    }

    pub fn undo(&mut self) -> bool {
        self.undo_last_move().is_ok()
    }

    /// Selects the piece on `at` if it belongs to the side to move and the
    /// game is still running; otherwise clears the selection.
    pub fn select_piece(&mut self, at: Coordinate) -> bool {
        let selectable = !self.is_over()
            && self
                .position
                .piece_at(at)
                .is_some_and(|piece| piece.side == self.side_to_move);

        self.selected = selectable.then_some(at);
        if !selectable {
            debug!("cannot select {at} for {}", self.side_to_move);
        }
        selectable
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<Piece> {
        self.selected.and_then(|at| self.position.piece_at(at))
    }

    /// Destinations of the selected piece, for highlighting.
    pub fn selected_moves(&self) -> Vec<Coordinate> {
        self.selected().map(|piece| self.legal_moves_for(&piece)).unwrap_or_default()
    }

    /// One board click: select, reselect, move or clear.
    pub fn click(&mut self, at: Coordinate) -> ClickOutcome {
        if self.is_over() {
            return ClickOutcome::Ignored;
        }

        let own_piece_clicked = self
            .position
            .piece_at(at)
            .is_some_and(|piece| piece.side == self.side_to_move);

        let Some(selected) = self.selected() else {
            if own_piece_clicked && self.select_piece(at) {
                return ClickOutcome::Selected(at);
            }
            return ClickOutcome::Ignored;
        };

        if selected.side != self.side_to_move {
            self.clear_selection();
            return ClickOutcome::Cleared;
        }

        if self.legal_moves_for(&selected).contains(&at) {
            return ClickOutcome::Moved(self.attempt_move(selected.position, at));
        }

        if own_piece_clicked && self.select_piece(at) {
            return ClickOutcome::Selected(at);
        }

        self.clear_selection();
        ClickOutcome::Cleared
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(col: i8, row: i8) -> Coordinate {
        Coordinate::new(col, row).unwrap()
    }

    fn duel() -> GameState {
        let position = Position::from_pieces([
            Piece::new(PieceKind::General, Side::Red, at(4, 8)),
            Piece::new(PieceKind::General, Side::Blue, at(3, 1)),
            Piece::new(PieceKind::Chariot, Side::Blue, at(4, 1)),
        ])
        .unwrap();
        GameState::from_position(position, Side::Blue)
    }

    #[test]
    fn new_game_starts_in_progress_with_blue() {
        let game = GameState::new_game();
        assert_eq!(game.side_to_move(), Side::Blue);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert!(game.history().is_empty());
        assert_eq!(game.position().len(), 32);
    }

    #[test]
    fn legal_moves_on_empty_point_is_empty() {
        let game = GameState::new_game();
        assert!(game.legal_moves(at(4, 4)).is_empty());
    }

    #[test]
    fn try_move_passes_turn() {
        let mut game = GameState::new_game();
        let report = game.try_move(at(0, 3), at(0, 4)).unwrap();
        assert!(report.applied);
        assert_eq!(report.captured, None);
        assert_eq!(game.side_to_move(), Side::Red);
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn try_move_rejects_wrong_side_and_illegal_targets() {
        let mut game = GameState::new_game();
        assert_eq!(
            game.try_move(at(0, 6), at(0, 5)),
            Err(JanggiError::WrongSide {
                expected: Side::Blue,
                found: Side::Red
            })
        );
        assert_eq!(
            game.try_move(at(0, 0), at(0, 5)),
            Err(JanggiError::IllegalMove {
                from: at(0, 0),
                to: at(0, 5)
            })
        );
        assert_eq!(
            game.try_move(at(0, 0), at(1, 0)),
            Err(JanggiError::OwnPieceAtDestination(at(1, 0)))
        );
        assert_eq!(game.try_move(at(4, 4), at(4, 5)), Err(JanggiError::NoPieceAt(at(4, 4))));
        assert!(game.history().is_empty());
    }

    #[test]
    fn attempt_move_reports_rejection_without_state_change() {
        let mut game = GameState::new_game();
        let before = game.position().clone();
        let report = game.attempt_move(at(0, 0), at(0, 5));
        assert_eq!(report, MoveReport::default());
        assert_eq!(game.position(), &before);
        assert_eq!(game.side_to_move(), Side::Blue);
    }

    #[test]
    fn apply_move_does_not_pass_turn() {
        let mut game = GameState::new_game();
        game.apply_move(at(0, 6), at(0, 5)).unwrap();
        assert_eq!(game.side_to_move(), Side::Blue);
    }

    #[test]
    fn capturing_general_ends_game_and_blocks_further_moves() {
        let mut game = duel();
        let report = game.try_move(at(4, 1), at(4, 8)).unwrap();
        assert_eq!(report.captured, Some(PieceKind::General));
        assert_eq!(report.outcome, Some(Side::Blue));
        assert_eq!(game.status(), GameStatus::Ended(Side::Blue));
        // the winner keeps the turn
        assert_eq!(game.side_to_move(), Side::Blue);
        assert_eq!(game.apply_move(at(3, 1), at(3, 0)), Err(JanggiError::GameOver(Side::Blue)));
    }

    #[test]
    fn undo_of_general_capture_reopens_game() {
        let mut game = duel();
        let before = game.position().clone();
        game.try_move(at(4, 1), at(4, 8)).unwrap();
        assert!(game.undo());
        assert_eq!(game.outcome(), None);
        assert_eq!(game.position(), &before);
        assert_eq!(game.side_to_move(), Side::Blue);
    }

    #[test]
    fn undo_with_empty_history_fails() {
        let mut game = GameState::new_game();
        assert!(!game.undo());
        assert_eq!(game.undo_last_move(), Err(JanggiError::EmptyHistory));
    }

    #[test]
    fn undo_returns_turn_to_mover() {
        let mut game = GameState::new_game();
        game.try_move(at(0, 3), at(0, 4)).unwrap();
        game.try_move(at(0, 6), at(0, 5)).unwrap();
        assert_eq!(game.side_to_move(), Side::Blue);
        game.undo();
        assert_eq!(game.side_to_move(), Side::Red);
        game.undo();
        assert_eq!(game.side_to_move(), Side::Blue);
        assert_eq!(game.position(), &Position::initial());
    }

    #[test]
    fn check_is_reported_for_threatened_side() {
        let game = duel();
        assert!(game.is_in_check(Side::Red));
        assert!(!game.is_in_check(Side::Blue));
    }

    #[test]
    fn selection_only_accepts_side_to_move() {
        let mut game = GameState::new_game();
        assert!(!game.select_piece(at(0, 9)));
        assert!(game.selected().is_none());
        assert!(game.select_piece(at(0, 0)));
        assert_eq!(game.selected_moves(), vec![at(0, 1), at(0, 2)]);
        game.clear_selection();
        assert!(game.selected_moves().is_empty());
    }

    #[test]
    fn click_selects_reselects_and_moves() {
        let mut game = GameState::new_game();
        assert_eq!(game.click(at(4, 4)), ClickOutcome::Ignored);
        assert_eq!(game.click(at(0, 3)), ClickOutcome::Selected(at(0, 3)));
        assert_eq!(game.click(at(2, 3)), ClickOutcome::Selected(at(2, 3)));

        let moved = game.click(at(2, 4));
        assert!(matches!(moved, ClickOutcome::Moved(report) if report.applied));
        assert_eq!(game.side_to_move(), Side::Red);
        assert!(game.selected().is_none());
    }

    #[test]
    fn click_on_unreachable_point_clears_selection() {
        let mut game = GameState::new_game();
        game.click(at(0, 3));
        assert_eq!(game.click(at(5, 5)), ClickOutcome::Cleared);
        assert!(game.selected().is_none());
    }

    #[test]
    fn clicks_are_ignored_after_the_game_ends() {
        let mut game = duel();
        game.try_move(at(4, 1), at(4, 8)).unwrap();
        assert_eq!(game.click(at(3, 1)), ClickOutcome::Ignored);
    }
}
