//! Recursive multi-jump exploration.
//!
//! Each jump is played on its own copy of the board, so sibling branches
//! never see each other's captures and nothing needs undoing. Depth is bounded
//! by the opposing piece count.

use crate::game_state::board::Board;
use crate::game_state::checkers_rules::ManCaptures;
use crate::game_state::checkers_types::{Piece, Rank, Square, ALL_DIAGONALS};
use crate::move_generation::move_generator::CheckersMove;

/// Every complete capture sequence for the piece on `origin`. A sequence is
/// complete when its last landing square offers no further jump. The piece is
/// never crowned mid-sequence.
pub fn find_capture_sequences(
    board: &Board,
    origin: Square,
    man_captures: ManCaptures,
) -> Vec<CheckersMove> {
    let Some(piece) = board.get(origin) else {
        return Vec::new();
    };

    let mut sequences = Vec::new();
    explore(
        board,
        piece,
        man_captures,
        vec![origin],
        Vec::new(),
        &mut sequences,
    );
    sequences
}

fn capture_directions(piece: Piece, man_captures: ManCaptures) -> &'static [(i8, i8)] {
    match (piece.rank, man_captures) {
        (Rank::Man, ManCaptures::ForwardOnly) => piece.step_directions(),
        _ => &ALL_DIAGONALS,
    }
}

/// Captured and landing squares of a jump from `at`, if one is possible.
fn jump_target(
    board: &Board,
    piece: Piece,
    at: Square,
    d_row: i8,
    d_col: i8,
) -> Option<(Square, Square)> {
    let over = at.offset(d_row, d_col);
    let landing = at.offset(2 * d_row, 2 * d_col);
    if !board.is_empty_square(landing) {
        return None;
    }
    match board.get(over) {
        Some(victim) if victim.owner != piece.owner => Some((over, landing)),
        _ => None,
    }
}

fn explore(
    board: &Board,
    piece: Piece,
    man_captures: ManCaptures,
    path: Vec<Square>,
    captured: Vec<Square>,
    out: &mut Vec<CheckersMove>,
) {
    let at = path[path.len() - 1];
    let mut extended = false;

    for &(d_row, d_col) in capture_directions(piece, man_captures) {
        let Some((over, landing)) = jump_target(board, piece, at, d_row, d_col) else {
            continue;
        };

        let mut branch = board.clone();
        branch.remove(over);
        branch.remove(at);
        branch.set(landing, piece);

        let mut next_path = path.clone();
        next_path.push(landing);
        let mut next_captured = captured.clone();
        next_captured.push(over);

        explore(&branch, piece, man_captures, next_path, next_captured, out);
        extended = true;
    }

    if !extended && path.len() > 1 {
        out.push(CheckersMove { path, captured });
    }
}
