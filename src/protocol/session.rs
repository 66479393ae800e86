//! Line-oriented session front-end.
//!
//! Reads newline-terminated commands, keeps the single `GameState` of the
//! session, and answers on the output stream. `MOVE` lines use the same
//! shape peers exchange over the relay (`MOVE c3-d4`), so a transport can
//! pipe remote lines straight in. All commands are handled in arrival order
//! on the reading thread.

use std::io::{self, BufRead, Write};

use log::{info, warn};

use crate::game_state::checkers_rules::RuleSet;
use crate::game_state::checkers_types::Square;
use crate::game_state::game_state::{GameState, GameStatus};
use crate::move_generation::move_generator::CheckersMove;
use crate::utils::algebraic::{algebraic_to_path, algebraic_to_square, path_to_algebraic};
use crate::utils::render_game_state::render_board;

pub fn run_stdio_loop(rules: RuleSet) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut session = SessionState::new(rules);

    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = session.handle_command(&line, &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

pub struct SessionState {
    game_state: GameState,
    rules: RuleSet,
}

impl SessionState {
    pub fn new(rules: RuleSet) -> Self {
        info!("new session with {rules} rules");
        Self {
            game_state: GameState::with_rules(rules),
            rules,
        }
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    /// Handle one line. Returns true when the session should end.
    pub fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let (cmd, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (trimmed, ""),
        };

        match cmd.to_ascii_uppercase().as_str() {
            "MOVE" => self.handle_move(rest, out)?,
            "MSG" => {
                info!("message from peer: {rest}");
            }
            "LEGAL" => self.handle_legal(rest, out)?,
            "BOARD" => {
                writeln!(out, "{}", render_board(self.game_state.board()))?;
                writeln!(out, "turn {}", self.game_state.turn())?;
            }
            "NEWGAME" => {
                self.game_state = GameState::with_rules(self.rules);
                writeln!(out, "ok")?;
            }
            "RULES" => match rest.parse::<RuleSet>() {
                Ok(rules) => {
                    info!("switching to {rules} rules");
                    self.rules = rules;
                    self.game_state = GameState::with_rules(rules);
                    writeln!(out, "ok rules {rules}")?;
                }
                Err(err) => writeln!(out, "error config: {err}")?,
            },
            "QUIT" => return Ok(true),
            _ => {
                warn!("unknown protocol message: {trimmed}");
                writeln!(out, "error unknown command")?;
            }
        }

        Ok(false)
    }

    fn handle_move(&mut self, text: &str, out: &mut impl Write) -> io::Result<()> {
        let result = algebraic_to_path(text).and_then(|path| self.game_state.apply_path(&path));
        let outcome = match result {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!("rejected move '{text}': {err}");
                return writeln!(out, "error {}: {}", err.kind(), err);
            }
        };

        writeln!(out, "ok {}", format_path(&outcome.path))?;
        if !outcome.captured.is_empty() {
            let captured: Vec<String> = outcome
                .captured
                .iter()
                .map(|&square| format_path(&[square]))
                .collect();
            writeln!(out, "captured {}", captured.join(" "))?;
        }
        if outcome.promoted {
            writeln!(out, "promoted")?;
        }
        if let Some(square) = outcome.continuation {
            writeln!(out, "continue {}", format_path(&[square]))?;
        }
        match self.game_state.status() {
            GameStatus::Won(player) => writeln!(out, "winner {player}")?,
            GameStatus::Drawn => writeln!(out, "draw")?,
            GameStatus::InProgress => {}
        }
        Ok(())
    }

    fn handle_legal(&self, text: &str, out: &mut impl Write) -> io::Result<()> {
        let from: Option<Square> = if text.is_empty() {
            None
        } else {
            match algebraic_to_square(text) {
                Ok(square) => Some(square),
                Err(err) => return writeln!(out, "error {}: {}", err.kind(), err),
            }
        };

        let legal = self.game_state.legal_moves();
        let moves = legal
            .iter()
            .filter(|(origin, _)| from.map_or(true, |sq| sq == **origin))
            .flat_map(|(_, destinations)| destinations.values());
        for mv in moves {
            writeln!(out, "move {}", format_move(mv))?;
        }
        writeln!(out, "end")
    }
}

fn format_move(mv: &CheckersMove) -> String {
    format_path(&mv.path)
}

/// Squares in generated moves are always on the board.
fn format_path(path: &[Square]) -> String {
    path_to_algebraic(path).unwrap_or_else(|_| "?".to_owned())
}

#[cfg(test)]
mod tests {
    use super::SessionState;
    use crate::game_state::checkers_rules::RuleSet;
    use crate::game_state::checkers_types::Player;

    fn run(session: &mut SessionState, line: &str) -> (String, bool) {
        let mut out = Vec::<u8>::new();
        let quit = session
            .handle_command(line, &mut out)
            .expect("writing to a Vec should not fail");
        (String::from_utf8(out).expect("output should be utf-8"), quit)
    }

    #[test]
    fn opening_move_is_applied_and_echoed() {
        let mut session = SessionState::new(RuleSet::default());
        let (out, quit) = run(&mut session, "MOVE a3-b4");
        assert!(!quit);
        assert_eq!(out, "ok a3-b4\n");
        assert_eq!(session.game_state().turn(), Player::Black);
    }

    #[test]
    fn illegal_and_malformed_moves_report_errors() {
        let mut session = SessionState::new(RuleSet::default());
        let (out, _) = run(&mut session, "MOVE a3-c5");
        assert!(out.starts_with("error illegal-destination:"), "{out}");
        let (out, _) = run(&mut session, "MOVE a3");
        assert!(out.starts_with("error malformed-move:"), "{out}");
        let (out, _) = run(&mut session, "MOVE b6-a5");
        assert!(out.starts_with("error wrong-turn:"), "{out}");
        assert_eq!(session.game_state().turn(), Player::Red);
    }

    #[test]
    fn legal_lists_seven_opening_moves() {
        let session = SessionState::new(RuleSet::default());
        let mut out = Vec::<u8>::new();
        session
            .handle_legal("", &mut out)
            .expect("writing to a Vec should not fail");
        let text = String::from_utf8(out).expect("output should be utf-8");
        assert_eq!(text.lines().filter(|l| l.starts_with("move ")).count(), 7);
        assert_eq!(text.lines().last(), Some("end"));
    }

    #[test]
    fn rules_switch_resets_the_game() {
        let mut session = SessionState::new(RuleSet::default());
        run(&mut session, "MOVE a3-b4");
        let (out, _) = run(&mut session, "rules tournament");
        assert_eq!(out, "ok rules tournament\n");
        assert_eq!(session.game_state().rules(), RuleSet::tournament());
        assert_eq!(session.game_state().turn(), Player::Red);
        let (out, _) = run(&mut session, "RULES blitz");
        assert!(out.starts_with("error config:"));
    }

    #[test]
    fn unknown_and_quit_commands() {
        let mut session = SessionState::new(RuleSet::default());
        let (out, quit) = run(&mut session, "HELLO");
        assert_eq!(out, "error unknown command\n");
        assert!(!quit);
        let (out, quit) = run(&mut session, "MSG good luck");
        assert!(out.is_empty());
        assert!(!quit);
        let (_, quit) = run(&mut session, "quit");
        assert!(quit);
    }
}
