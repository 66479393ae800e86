//! Piece placement on the 8x8 grid.
//!
//! `Board` is a plain `Copy` value so capture search can branch by copying
//! it. Writes to light squares or squares off the board are ignored, which
//! keeps the "light squares stay empty" invariant without a fallible API.

use crate::game_state::checkers_types::{Piece, Player, Square, BOARD_SIZE};

const SIDE: usize = BOARD_SIZE as usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    grid: [[Option<Piece>; SIDE]; SIDE],
}

impl Board {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Standard opening layout: Black on rows 0-2, Red on rows 5-7.
    pub fn starting_position() -> Self {
        let mut board = Self::new_empty();
        for square in Square::all_dark() {
            match square.row {
                0..=2 => {
                    board.set(square, Piece::man(Player::Black));
                }
                5..=7 => {
                    board.set(square, Piece::man(Player::Red));
                }
                _ => {}
            }
        }
        board
    }

    #[inline]
    pub fn in_bounds(&self, square: Square) -> bool {
        square.in_bounds()
    }

    #[inline]
    pub fn get(&self, square: Square) -> Option<Piece> {
        if !square.in_bounds() {
            return None;
        }
        self.grid[square.row as usize][square.col as usize]
    }

    /// Place `piece` on `square`. Returns false, leaving the board untouched,
    /// for out-of-range or light squares.
    pub fn set(&mut self, square: Square, piece: Piece) -> bool {
        if !square.in_bounds() || !square.is_dark() {
            return false;
        }
        self.grid[square.row as usize][square.col as usize] = Some(piece);
        true
    }

    /// Clear `square`, returning what was there. No-op off the board.
    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        if !square.in_bounds() {
            return None;
        }
        self.grid[square.row as usize][square.col as usize].take()
    }

    #[inline]
    pub fn is_empty_square(&self, square: Square) -> bool {
        square.in_bounds() && self.get(square).is_none()
    }

    /// Occupied squares with their pieces, row-major.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all_dark().filter_map(move |sq| self.get(sq).map(|piece| (sq, piece)))
    }

    pub fn pieces_of(&self, player: Player) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.owner == player)
    }

    pub fn count(&self, player: Player) -> usize {
        self.pieces_of(player).count()
    }

    pub fn count_kings(&self, player: Player) -> usize {
        self.pieces_of(player).filter(|(_, piece)| piece.is_king()).count()
    }
}
