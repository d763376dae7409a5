//! Line-oriented console front-end.
//!
//! Reads commands from stdin, drives a [`GameState`] and writes plain-text
//! replies, so a game can be played or scripted from a terminal without any
//! graphical surface.

use std::io::{self, BufRead, Write};

use log::debug;

use crate::engines::engine_random::RandomEngine;
use crate::engines::engine_trait::Engine;
use crate::errors::JanggiError;
use crate::game_state::game_state::{ClickOutcome, GameState, GameStatus, MoveReport};
use crate::game_state::janggi_types::{Coordinate, Side};
use crate::utils::render_game_state::render_position;

const HELP_TEXT: &str = "\
commands:
  show                 print the board
  moves <sq>           list destinations of the piece on <sq>
  move <from> <to>     play a move (also accepts <from><to>)
  undo                 take back the last move
  check                report which generals are attacked
  select <sq>          select a piece of the side to move
  click <sq>           board click: select, reselect or move
  engine               let the random engine play the side to move
  new                  start a new game
  help                 show this text
  quit                 leave";

pub fn run_stdio_loop() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut console = ConsoleState::new();

    console.handle_command("show", &mut stdout)?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = console.handle_command(&line, &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

pub struct ConsoleState {
    game_state: GameState,
    engine: Box<dyn Engine>,
}

impl Default for ConsoleState {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleState {
    pub fn new() -> Self {
        Self::with_engine(Box::new(RandomEngine::new()))
    }

    pub fn with_engine(engine: Box<dyn Engine>) -> Self {
        Self {
            game_state: GameState::new_game(),
            engine,
        }
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    /// Runs one command line. Returns `Ok(true)` when the session should end.
    pub fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let mut parts = trimmed.split_whitespace();
        let cmd = parts.next().unwrap_or_default();
        let args: Vec<&str> = parts.collect();

        match cmd {
            "show" | "board" => self.write_board(out)?,
            "moves" => match parse_square(args.first().copied()) {
                Ok(at) => {
                    let moves = self.game_state.legal_moves(at);
                    writeln!(out, "{}", format_squares(&moves))?;
                }
                Err(err) => writeln!(out, "error: {err}")?,
            },
            "move" => match parse_move_args(&args) {
                Ok((from, to)) => match self.game_state.try_move(from, to) {
                    Ok(report) => self.write_report(from, to, report, out)?,
                    Err(err) => writeln!(out, "error: {err}")?,
                },
                Err(err) => writeln!(out, "error: {err}")?,
            },
            "undo" => match self.game_state.undo_last_move() {
                Ok(record) => writeln!(out, "undone {}", record.as_move())?,
                Err(err) => writeln!(out, "error: {err}")?,
            },
            "check" => {
                for side in [Side::Blue, Side::Red] {
                    let verdict = if self.game_state.is_in_check(side) { "yes" } else { "no" };
                    writeln!(out, "{side} in check: {verdict}")?;
                }
            }
            "select" => match parse_square(args.first().copied()) {
                Ok(at) => {
                    if self.game_state.select_piece(at) {
                        writeln!(out, "selected {at}: {}", format_squares(&self.game_state.selected_moves()))?;
                    } else {
                        writeln!(out, "cannot select {at}")?;
                    }
                }
                Err(err) => writeln!(out, "error: {err}")?,
            },
            "click" => match parse_square(args.first().copied()) {
                Ok(at) => match self.game_state.click(at) {
                    ClickOutcome::Selected(sq) => {
                        writeln!(out, "selected {sq}: {}", format_squares(&self.game_state.selected_moves()))?
                    }
                    ClickOutcome::Moved(report) => {
                        let from = self
                            .game_state
                            .last_move()
                            .filter(|_| report.applied)
                            .map(|record| record.from);
                        match from {
                            Some(from) => self.write_report(from, at, report, out)?,
                            None => writeln!(out, "move to {at} rejected")?,
                        }
                    }
                    ClickOutcome::Cleared => writeln!(out, "selection cleared")?,
                    ClickOutcome::Ignored => writeln!(out, "ignored")?,
                },
                Err(err) => writeln!(out, "error: {err}")?,
            },
            "engine" => {
                if let Err(err) = self.play_engine_move(out) {
                    writeln!(out, "error: {err}")?;
                }
            }
            "new" => {
                self.game_state = GameState::new_game();
                self.engine.new_game();
                self.write_board(out)?;
            }
            "help" => writeln!(out, "{HELP_TEXT}")?,
            "quit" | "exit" => return Ok(true),
            _ => {
                debug!("unknown console command {cmd:?}");
                writeln!(out, "unknown command '{cmd}', try help")?;
            }
        }

        Ok(false)
    }

    fn play_engine_move(&mut self, out: &mut impl Write) -> Result<(), ConsoleError> {
        let output = self.engine.choose_move(&self.game_state)?;
        let mv = output
            .best_move
            .ok_or(JanggiError::NoMoves(self.game_state.side_to_move()))?;
        let report = self.game_state.try_move(mv.from, mv.to)?;
        writeln!(out, "{} plays {mv}", self.engine.name())?;
        self.write_report(mv.from, mv.to, report, out)?;
        Ok(())
    }

    fn write_report(
        &self,
        from: Coordinate,
        to: Coordinate,
        report: MoveReport,
        out: &mut impl Write,
    ) -> io::Result<()> {
        match report.captured {
            Some(kind) => writeln!(out, "moved {from}{to} capturing {kind}")?,
            None => writeln!(out, "moved {from}{to}")?,
        }
        if let Some(winner) = report.outcome {
            writeln!(out, "game over: {winner} wins")?;
        }
        Ok(())
    }

    fn write_board(&self, out: &mut impl Write) -> io::Result<()> {
        let highlights = self.game_state.selected_moves();
        writeln!(out, "{}", render_position(self.game_state.position(), &highlights))?;
        match self.game_state.status() {
            GameStatus::InProgress => {
                let side = self.game_state.side_to_move();
                let check = if self.game_state.is_in_check(side) { " (in check)" } else { "" };
                writeln!(out, "{side} to move{check}")
            }
            GameStatus::Ended(winner) => writeln!(out, "game over: {winner} wins"),
        }
    }
}

/// Failure of a console action: either a rule rejection or broken output.
#[derive(Debug, thiserror::Error)]
enum ConsoleError {
    #[error(transparent)]
    Rules(#[from] JanggiError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

fn parse_square(token: Option<&str>) -> Result<Coordinate, JanggiError> {
    token
        .ok_or_else(|| JanggiError::InvalidCoordinate(String::new()))?
        .parse()
}

/// Accepts `e1 e2` or `e1e2`.
fn parse_move_args(args: &[&str]) -> Result<(Coordinate, Coordinate), JanggiError> {
    match args {
        [from, to, ..] => Ok((from.parse()?, to.parse()?)),
        [joined] if joined.len() == 4 && joined.is_char_boundary(2) => {
            let (from, to) = joined.split_at(2);
            Ok((from.parse()?, to.parse()?))
        }
        [other] => Err(JanggiError::InvalidCoordinate((*other).to_owned())),
        [] => Err(JanggiError::InvalidCoordinate(String::new())),
    }
}

fn format_squares(squares: &[Coordinate]) -> String {
    if squares.is_empty() {
        return "none".to_owned();
    }
    squares
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(console: &mut ConsoleState, line: &str) -> String {
        let mut out = Vec::new();
        console.handle_command(line, &mut out).expect("write to vec");
        String::from_utf8(out).expect("utf8 output")
    }

    fn console() -> ConsoleState {
        ConsoleState::with_engine(Box::new(RandomEngine::with_seed(3)))
    }

    #[test]
    fn moves_lists_destinations_in_notation() {
        let mut state = console();
        assert_eq!(run(&mut state, "moves a0"), "a1 a2\n");
        assert_eq!(run(&mut state, "moves e4"), "none\n");
        assert!(run(&mut state, "moves z9").starts_with("error: "));
    }

    #[test]
    fn move_accepts_split_and_joined_forms() {
        let mut state = console();
        assert_eq!(run(&mut state, "move a3 a4"), "moved a3a4\n");
        assert_eq!(run(&mut state, "move a6a5"), "moved a6a5\n");
        assert_eq!(state.game_state().history().len(), 2);
    }

    #[test]
    fn rejected_move_reports_error_and_keeps_turn() {
        let mut state = console();
        let reply = run(&mut state, "move a9 a8");
        assert!(reply.starts_with("error: "));
        assert_eq!(state.game_state().side_to_move(), Side::Blue);
    }

    #[test]
    fn undo_without_history_is_an_error() {
        let mut state = console();
        assert!(run(&mut state, "undo").starts_with("error: "));
        run(&mut state, "move a3 a4");
        assert_eq!(run(&mut state, "undo"), "undone a3a4\n");
    }

    #[test]
    fn click_flow_selects_then_moves() {
        let mut state = console();
        assert_eq!(run(&mut state, "click a3"), "selected a3: b3 a4\n");
        assert_eq!(run(&mut state, "click a4"), "moved a3a4\n");
        assert_eq!(run(&mut state, "click e4"), "ignored\n");
    }

    #[test]
    fn engine_plays_for_side_to_move() {
        let mut state = console();
        let reply = run(&mut state, "engine");
        assert!(reply.starts_with("Janggi Random plays "));
        assert_eq!(state.game_state().side_to_move(), Side::Red);
    }

    #[test]
    fn show_prints_board_and_status() {
        let mut state = console();
        let reply = run(&mut state, "show");
        assert!(reply.contains("0 r h e a + a e h r 0"));
        assert!(reply.ends_with("blue to move\n"));
    }

    #[test]
    fn quit_ends_session_and_unknown_is_reported() {
        let mut state = console();
        assert!(run(&mut state, "dance").starts_with("unknown command"));
        let mut out = Vec::new();
        assert!(state.handle_command("quit", &mut out).unwrap());
    }
}
