//! Terminal-oriented text board renderer.
//!
//! Creates a human-readable board view for the line session, tests and
//! debugging. Men are `r`/`b`, kings `R`/`B`, empty dark squares `.`.

use crate::game_state::board::Board;
use crate::game_state::checkers_types::{Square, BOARD_SIZE};

/// Render the board with rank digits on the sides and column letters above
/// and below. Row 0 (rank 8) is printed first.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in 0..BOARD_SIZE {
        let rank = char::from(b'1' + (BOARD_SIZE - 1 - row) as u8);
        out.push(rank);
        out.push(' ');

        for col in 0..BOARD_SIZE {
            let square = Square::new(row, col);
            let ch = match board.get(square) {
                Some(piece) => piece.symbol(),
                None if square.is_dark() => '.',
                None => ' ',
            };
            out.push(ch);

            if col < BOARD_SIZE - 1 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

#[cfg(test)]
mod tests {
    use super::render_board;
    use crate::game_state::board::Board;

    #[test]
    fn starting_position_renders_black_on_top() {
        let text = render_board(&Board::starting_position());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[1], "8   b   b   b   b 8");
        assert_eq!(lines[4], "5 .   .   .   .   5");
        assert_eq!(lines[8], "1 r   r   r   r   1");
    }
}
