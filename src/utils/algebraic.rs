//! Square and path conversions for the wire notation.
//!
//! Columns are letters `a`..`h` left to right; rows are digits counted from
//! the bottom edge, so rank 1 is grid row 7 (Red's back rank) and rank 8 is
//! grid row 0. Paths join squares with `-`, e.g. `c3-e5-g7`.

use crate::checkers_errors::{MoveError, MoveResult};
use crate::game_state::checkers_types::{Square, BOARD_SIZE};

/// Convert algebraic notation (for example: "b6") to a square.
#[inline]
pub fn algebraic_to_square(square: &str) -> MoveResult<Square> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(MoveError::MalformedMove(format!(
            "invalid algebraic square: {square}"
        )));
    }

    let column = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&column) {
        return Err(MoveError::MalformedMove(format!(
            "invalid algebraic column: {}",
            column as char
        )));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(MoveError::MalformedMove(format!(
            "invalid algebraic row: {}",
            rank as char
        )));
    }

    let col = (column - b'a') as i8;
    let row = BOARD_SIZE - 1 - (rank - b'1') as i8;
    Ok(Square::new(row, col))
}

/// Convert a square to algebraic notation (for example: "b6").
#[inline]
pub fn square_to_algebraic(square: Square) -> MoveResult<String> {
    if !square.in_bounds() {
        return Err(MoveError::MalformedMove(format!(
            "square ({}, {}) is off the board",
            square.row, square.col
        )));
    }

    let column_char = char::from(b'a' + square.col as u8);
    let rank_char = char::from(b'1' + (BOARD_SIZE - 1 - square.row) as u8);
    Ok(format!("{column_char}{rank_char}"))
}

/// Parse a hyphenated path such as "c3-e5-g7". At least two squares.
pub fn algebraic_to_path(path: &str) -> MoveResult<Vec<Square>> {
    let squares = path
        .trim()
        .split('-')
        .map(|token| algebraic_to_square(token.trim()))
        .collect::<MoveResult<Vec<Square>>>()?;
    if squares.len() < 2 {
        return Err(MoveError::MalformedMove(format!(
            "a move needs at least two squares: {path}"
        )));
    }
    Ok(squares)
}

pub fn path_to_algebraic(path: &[Square]) -> MoveResult<String> {
    let names = path
        .iter()
        .map(|&square| square_to_algebraic(square))
        .collect::<MoveResult<Vec<String>>>()?;
    Ok(names.join("-"))
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_path, algebraic_to_square, path_to_algebraic, square_to_algebraic};
    use crate::checkers_errors::MoveError;
    use crate::game_state::checkers_types::Square;

    #[test]
    fn corners_map_to_expected_grid_squares() {
        assert_eq!(algebraic_to_square("a1").expect("a1 should parse"), Square::new(7, 0));
        assert_eq!(algebraic_to_square("h8").expect("h8 should parse"), Square::new(0, 7));
        assert_eq!(square_to_algebraic(Square::new(7, 0)).expect("should convert"), "a1");
        assert_eq!(square_to_algebraic(Square::new(0, 7)).expect("should convert"), "h8");
        assert_eq!(algebraic_to_square("B6").expect("uppercase column should parse"), Square::new(2, 1));
    }

    #[test]
    fn every_square_round_trips() {
        for square in Square::all() {
            let name = square_to_algebraic(square).expect("on-board squares should convert");
            assert_eq!(algebraic_to_square(&name).expect("names should parse"), square);
        }
    }

    #[test]
    fn out_of_range_input_is_malformed() {
        for bad in ["i1", "a0", "a9", "", "a", "a10", "-1"] {
            assert!(
                matches!(algebraic_to_square(bad), Err(MoveError::MalformedMove(_))),
                "{bad} should be rejected"
            );
        }
        assert!(square_to_algebraic(Square::new(8, 0)).is_err());
    }

    #[test]
    fn paths_use_hyphens() {
        let path = algebraic_to_path("a3-c5-e7").expect("path should parse");
        assert_eq!(path, vec![Square::new(5, 0), Square::new(3, 2), Square::new(1, 4)]);
        assert_eq!(path_to_algebraic(&path).expect("path should format"), "a3-c5-e7");
        assert!(algebraic_to_path("a3").is_err());
        assert!(algebraic_to_path("a3-").is_err());
    }
}
