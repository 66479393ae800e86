//! Legal move generation under mandatory-capture rules.
//!
//! Per piece: if the piece can jump, only its longest capture sequences are
//! legal; otherwise its simple steps are. Per side: once any piece can jump,
//! simple steps are dropped everywhere, and under `CapturePolicy::BoardWide`
//! only sequences of the board-wide maximum length survive.

use crate::game_state::board::Board;
use crate::game_state::checkers_rules::{CapturePolicy, RuleSet};
use crate::game_state::checkers_types::{Player, Square};
use crate::move_generation::capture_search::find_capture_sequences;
use crate::move_generation::move_generator::{CheckersMove, DestinationMap, LegalMoveMap};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LegalMoveGenerator {
    pub rules: RuleSet,
}

impl LegalMoveGenerator {
    pub const fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    /// Legal moves of the piece on `square`, keyed by final landing square.
    ///
    /// This looks at the single piece only: the side-wide mandatory capture
    /// rule is applied by `legal_moves_for_player`.
    pub fn legal_moves_for(&self, board: &Board, square: Square) -> DestinationMap {
        let Some(piece) = board.get(square) else {
            return DestinationMap::new();
        };

        let captures = self.capture_moves_for(board, square);
        if !captures.is_empty() {
            return captures;
        }

        let mut simple = DestinationMap::new();
        for &(d_row, d_col) in piece.step_directions() {
            let to = square.offset(d_row, d_col);
            if board.is_empty_square(to) {
                simple.insert(to, CheckersMove::simple(square, to));
            }
        }
        simple
    }

    /// Every longest capture sequence of the piece on `square`; empty if it
    /// cannot jump. Routes that end on the same square through different
    /// captured pieces are all kept.
    pub fn capture_sequences_for(&self, board: &Board, square: Square) -> Vec<CheckersMove> {
        let mut sequences = find_capture_sequences(board, square, self.rules.man_captures);
        let longest = sequences
            .iter()
            .map(CheckersMove::capture_count)
            .max()
            .unwrap_or(0);
        sequences.retain(|sequence| sequence.capture_count() == longest);
        sequences
    }

    /// `capture_sequences_for` keyed by landing square, one route per square.
    /// Validation goes through the unkeyed list instead.
    pub fn capture_moves_for(&self, board: &Board, square: Square) -> DestinationMap {
        let mut out = DestinationMap::new();
        for sequence in self.capture_sequences_for(board, square) {
            out.entry(sequence.destination()).or_insert(sequence);
        }
        out
    }

    /// Legal moves of every piece of `player`, keyed by origin. Origins with
    /// no legal move are omitted.
    pub fn legal_moves_for_player(&self, board: &Board, player: Player) -> LegalMoveMap {
        let mut all = LegalMoveMap::new();
        let mut any_capture = false;

        for (square, _) in board.pieces_of(player) {
            let moves = self.legal_moves_for(board, square);
            if moves.is_empty() {
                continue;
            }
            any_capture |= moves.values().any(CheckersMove::is_capture);
            all.insert(square, moves);
        }

        if !any_capture {
            return all;
        }

        // Mandatory capture: a piece's map is either all captures or all
        // simple steps, so whole origins can be dropped.
        all.retain(|_, moves| moves.values().any(CheckersMove::is_capture));

        if self.rules.capture_policy == CapturePolicy::BoardWide {
            let longest = all
                .values()
                .flat_map(|moves| moves.values())
                .map(CheckersMove::capture_count)
                .max()
                .unwrap_or(0);
            for moves in all.values_mut() {
                moves.retain(|_, mv| mv.capture_count() == longest);
            }
            all.retain(|_, moves| !moves.is_empty());
        }

        all
    }

    /// Moves `player` may make with the piece on `square` once the side-wide
    /// capture rules are applied, with every equal-length route kept.
    pub fn legal_sequences_for(
        &self,
        board: &Board,
        player: Player,
        square: Square,
    ) -> Vec<CheckersMove> {
        let mut all = self.legal_moves_for_player(board, player);
        let Some(moves) = all.remove(&square) else {
            return Vec::new();
        };
        if moves.values().any(CheckersMove::is_capture) {
            // Survivors of the board-wide filter are this piece's longest.
            self.capture_sequences_for(board, square)
        } else {
            moves.into_values().collect()
        }
    }
}
