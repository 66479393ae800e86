//! Move-tree node counting.
//!
//! Each tree edge is one complete turn (a full capture sequence counts as a
//! single move). Positions are branched by copying the board, the same way
//! capture search does.

use crate::game_state::board::Board;
use crate::game_state::checkers_rules::RuleSet;
use crate::game_state::checkers_types::Player;
use crate::move_generation::legal_move_apply::execute_path;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub promotions: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.promotions += rhs.promotions;
    }
}

pub fn perft(board: &Board, to_move: Player, rules: RuleSet, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }
    perft_recurse(&LegalMoveGenerator::new(rules), board, to_move, depth)
}

fn perft_recurse(
    generator: &LegalMoveGenerator,
    board: &Board,
    to_move: Player,
    depth: u8,
) -> PerftCounts {
    let mut total = PerftCounts::default();
    let moves = generator.legal_moves_for_player(board, to_move);

    for mv in moves.values().flat_map(|destinations| destinations.values()) {
        let mut next = *board;
        let Some(executed) = execute_path(&mut next, &mv.path) else {
            continue;
        };

        if depth == 1 {
            total.nodes += 1;
            total.captures += usize::from(!executed.captured.is_empty());
            total.promotions += usize::from(executed.promoted);
            continue;
        }

        total.merge(perft_recurse(generator, &next, to_move.opposite(), depth - 1));
    }

    total
}
