//! Session game state.
//!
//! `GameState` is the single mutable model of a game: board, side to move,
//! a pending multi-jump continuation and the result. It is changed only
//! through `apply_move` / `apply_path`; callers on other threads must funnel
//! their requests through one ordered queue to the owner.

use crate::checkers_errors::MoveResult;
use crate::game_state::board::Board;
use crate::game_state::checkers_rules::RuleSet;
use crate::game_state::checkers_types::{Player, Square};
use crate::move_generation::legal_move_apply::{self, MoveOutcome};
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::{DestinationMap, LegalMoveMap};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    /// Neither side can move.
    Drawn,
}

#[derive(Debug, Clone)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) turn: Player,
    /// Square whose piece must keep jumping before the turn passes.
    pub(crate) forced_continuation: Option<Square>,
    pub(crate) status: GameStatus,
    pub(crate) rules: RuleSet,
    /// Applied moves, counting each step of a multi-jump played piecewise.
    pub(crate) ply: u32,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    #[inline]
    pub fn new_game() -> Self {
        Self::with_rules(RuleSet::default())
    }

    pub fn with_rules(rules: RuleSet) -> Self {
        Self::from_board(Board::starting_position(), rules.first_to_move, rules)
    }

    /// Arbitrary position with `turn` to move. The terminal status is
    /// evaluated immediately.
    pub fn from_board(board: Board, turn: Player, rules: RuleSet) -> Self {
        let mut state = Self {
            board,
            turn,
            forced_continuation: None,
            status: GameStatus::InProgress,
            rules,
            ply: 0,
        };
        state.status = state.evaluate_status();
        state
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn turn(&self) -> Player {
        self.turn
    }

    #[inline]
    pub fn forced_continuation(&self) -> Option<Square> {
        self.forced_continuation
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn rules(&self) -> RuleSet {
        self.rules
    }

    #[inline]
    pub fn ply(&self) -> u32 {
        self.ply
    }

    #[inline]
    pub fn generator(&self) -> LegalMoveGenerator {
        LegalMoveGenerator::new(self.rules)
    }

    #[inline]
    pub fn winner(&self) -> Option<Player> {
        match self.status {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Per-piece legal moves, see `LegalMoveGenerator::legal_moves_for`.
    pub fn legal_moves_for(&self, square: Square) -> DestinationMap {
        self.generator().legal_moves_for(&self.board, square)
    }

    /// Everything the side to move may play right now. While a multi-jump is
    /// pending this is only the continuing piece's captures.
    pub fn legal_moves(&self) -> LegalMoveMap {
        let generator = self.generator();
        match self.forced_continuation {
            Some(square) => {
                let mut moves = LegalMoveMap::new();
                let captures = generator.capture_moves_for(&self.board, square);
                if !captures.is_empty() {
                    moves.insert(square, captures);
                }
                moves
            }
            None => generator.legal_moves_for_player(&self.board, self.turn),
        }
    }

    /// Terminal check for the current position. A side to move with no
    /// pieces loses; one with pieces but no legal move loses too, unless
    /// the opponent cannot move either, which is a draw.
    pub fn evaluate_status(&self) -> GameStatus {
        if self.forced_continuation.is_some() {
            return GameStatus::InProgress;
        }

        let generator = self.generator();
        let mover = self.turn;
        let opponent = mover.opposite();

        if self.board.count(mover) == 0 {
            return GameStatus::Won(opponent);
        }
        if !generator.legal_moves_for_player(&self.board, mover).is_empty() {
            return GameStatus::InProgress;
        }
        if generator
            .legal_moves_for_player(&self.board, opponent)
            .is_empty()
        {
            GameStatus::Drawn
        } else {
            GameStatus::Won(opponent)
        }
    }

    /// Move the piece on `origin` to `destination`.
    pub fn apply_move(&mut self, origin: Square, destination: Square) -> MoveResult<MoveOutcome> {
        legal_move_apply::apply_move(self, origin, destination)
    }

    /// Apply a full or partial path, as received from the wire.
    pub fn apply_path(&mut self, path: &[Square]) -> MoveResult<MoveOutcome> {
        legal_move_apply::apply_path(self, path)
    }
}

#[cfg(test)]
mod tests {
    use super::{GameState, GameStatus};
    use crate::game_state::board::Board;
    use crate::game_state::checkers_rules::RuleSet;
    use crate::game_state::checkers_types::{Piece, Player, Square};

    fn sq(row: i8, col: i8) -> Square {
        Square::new(row, col)
    }

    #[test]
    fn new_game_starts_with_red_to_move() {
        let game = GameState::new_game();
        assert_eq!(game.turn, Player::Red);
        assert_eq!(game.status, GameStatus::InProgress);
        assert_eq!(game.forced_continuation, None);
        assert_eq!(game.board.count(Player::Red), 12);
        assert_eq!(game.board.count(Player::Black), 12);
    }

    #[test]
    fn accessors_follow_the_turn_engine() {
        let mut game = GameState::new_game();
        game.apply_move(sq(5, 0), sq(4, 1))
            .expect("opening step should be legal");
        assert_eq!(game.turn(), Player::Black);
        assert_eq!(game.ply(), 1);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.forced_continuation(), None);
        assert_eq!(game.rules(), RuleSet::default());
        assert_eq!(game.board().get(sq(4, 1)), Some(Piece::man(Player::Red)));
        assert_eq!(game.board().get(sq(5, 0)), None);
    }

    #[test]
    fn side_without_pieces_has_lost() {
        let mut board = Board::new_empty();
        board.set(sq(5, 0), Piece::man(Player::Red));
        let game = GameState::from_board(board, Player::Black, RuleSet::default());
        assert_eq!(game.winner(), Some(Player::Red));
    }

    #[test]
    fn blocked_side_loses_when_opponent_can_move() {
        // Black man on (0,1) is blocked by two red men it cannot jump.
        let mut board = Board::new_empty();
        board.set(sq(0, 1), Piece::man(Player::Black));
        board.set(sq(1, 0), Piece::man(Player::Red));
        board.set(sq(1, 2), Piece::man(Player::Red));
        board.set(sq(2, 3), Piece::man(Player::Red));
        board.set(sq(7, 0), Piece::man(Player::Red));

        let game = GameState::from_board(board, Player::Black, RuleSet::default());
        assert!(game.legal_moves().is_empty());
        assert_eq!(game.status, GameStatus::Won(Player::Red));
        assert!(game.is_over());
    }

    #[test]
    fn both_sides_blocked_is_a_draw() {
        // Uncrowned men parked on their last rows have nowhere to go.
        let mut board = Board::new_empty();
        board.set(sq(7, 0), Piece::man(Player::Black));
        board.set(sq(0, 1), Piece::man(Player::Red));

        let game = GameState::from_board(board, Player::Black, RuleSet::default());
        assert_eq!(game.status, GameStatus::Drawn);
        assert_eq!(game.winner(), None);
        assert!(game.is_over());
    }
}
