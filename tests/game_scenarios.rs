use janggi::{Coordinate, GameState, GameStatus, JanggiError, Piece, PieceKind, Position, Side};

fn at(col: i8, row: i8) -> Coordinate {
    Coordinate::new(col, row).unwrap()
}

fn chariot_file_position() -> Position {
    Position::from_pieces([
        Piece::new(PieceKind::General, Side::Red, at(4, 8)),
        Piece::new(PieceKind::General, Side::Blue, at(3, 0)),
        Piece::new(PieceKind::Chariot, Side::Blue, at(4, 1)),
    ])
    .unwrap()
}

#[test]
fn opening_left_flank_moves_are_exact() {
    let mut game = GameState::new_game();

    assert_eq!(game.legal_moves(at(0, 0)), vec![at(0, 1), at(0, 2)]);
    assert_eq!(game.legal_moves(at(0, 3)), vec![at(1, 3), at(0, 4)]);

    // the soldier on a3 blocks the chariot's file
    assert_eq!(
        game.try_move(at(0, 0), at(0, 4)),
        Err(JanggiError::IllegalMove {
            from: at(0, 0),
            to: at(0, 4)
        })
    );
    assert_eq!(game.position(), &Position::initial());
    assert_eq!(game.side_to_move(), Side::Blue);
}

#[test]
fn chariot_on_open_file_attacks_the_red_general() {
    let game = GameState::from_position(chariot_file_position(), Side::Blue);

    assert!(game.legal_moves(at(4, 1)).contains(&at(4, 8)));
    assert!(game.is_in_check(Side::Red));
    assert!(!game.is_in_check(Side::Blue));
}

#[test]
fn blocking_the_file_lifts_the_check() {
    let mut game = GameState::from_position(chariot_file_position(), Side::Red);
    let red_general = game.piece_at(at(4, 8)).unwrap();
    assert!(game.legal_moves_for(&red_general).contains(&at(4, 7)));

    // stepping forward keeps the general on the open file
    game.try_move(at(4, 8), at(4, 7)).unwrap();
    assert!(game.is_in_check(Side::Red));
    game.undo();

    // sidestepping out of the file ends the threat
    game.try_move(at(4, 8), at(3, 8)).unwrap();
    assert!(!game.is_in_check(Side::Red));
}

#[test]
fn capturing_the_checking_chariot_lifts_the_check() {
    let mut position = chariot_file_position();
    position.place(Piece::new(PieceKind::Chariot, Side::Red, at(0, 1))).unwrap();
    let mut game = GameState::from_position(position, Side::Red);
    assert!(game.is_in_check(Side::Red));

    let report = game.try_move(at(0, 1), at(4, 1)).unwrap();
    assert_eq!(report.captured, Some(PieceKind::Chariot));
    assert!(!game.is_in_check(Side::Red));
    assert_eq!(game.side_to_move(), Side::Blue);
}

#[test]
fn interposing_on_the_file_lifts_the_check() {
    let mut position = chariot_file_position();
    position.place(Piece::new(PieceKind::Chariot, Side::Red, at(0, 5))).unwrap();
    let mut game = GameState::from_position(position, Side::Red);
    assert!(game.is_in_check(Side::Red));

    let report = game.try_move(at(0, 5), at(4, 5)).unwrap();
    assert_eq!(report.captured, None);
    assert!(!game.is_in_check(Side::Red));

    // stepping back off the file reopens it
    game.undo();
    assert!(game.is_in_check(Side::Red));
}

#[test]
fn general_capture_ends_the_game_and_undo_reverses_it() {
    let mut game = GameState::from_position(chariot_file_position(), Side::Blue);
    let before = game.position().clone();

    let report = game.try_move(at(4, 1), at(4, 8)).unwrap();
    assert!(report.applied);
    assert_eq!(report.captured, Some(PieceKind::General));
    assert_eq!(game.outcome(), Some(Side::Blue));
    assert_eq!(game.status(), GameStatus::Ended(Side::Blue));
    assert!(game.position().general_of(Side::Red).is_none());

    assert_eq!(game.apply_move(at(3, 0), at(3, 1)), Err(JanggiError::GameOver(Side::Blue)));
    assert_eq!(game.try_move(at(3, 0), at(3, 1)), Err(JanggiError::GameOver(Side::Blue)));
    assert!(!game.attempt_move(at(3, 0), at(3, 1)).applied);

    assert!(game.undo());
    assert_eq!(game.outcome(), None);
    assert_eq!(game.position(), &before);
    assert_eq!(game.side_to_move(), Side::Blue);
    assert!(game.history().is_empty());
    assert_eq!(game.piece_at(at(4, 8)).map(|p| (p.kind, p.side)), Some((PieceKind::General, Side::Red)));
}

#[test]
fn short_game_alternates_turns_and_captures() {
    let mut game = GameState::new_game();
    // a3-a4, a6-a5, a4xa5
    game.try_move(at(0, 3), at(0, 4)).unwrap();
    game.try_move(at(0, 6), at(0, 5)).unwrap();
    let report = game.try_move(at(0, 4), at(0, 5)).unwrap();

    assert_eq!(report.captured, Some(PieceKind::Soldier));
    assert_eq!(game.side_to_move(), Side::Red);
    assert_eq!(game.position().pieces_of(Side::Red).count(), 15);
    assert_eq!(game.history().len(), 3);
    assert_eq!(game.status(), GameStatus::InProgress);
}
