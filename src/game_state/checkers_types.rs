/// Core value types shared by the board, move generation and turn handling.
///
/// Orientation: row 0 is the top edge as rendered. Black starts on rows 0-2
/// and advances toward row 7; Red starts on rows 5-7 and advances toward row 0.

pub use crate::game_state::board::Board;
pub use crate::game_state::game_state::GameState;

/// Board edge length.
pub const BOARD_SIZE: i8 = 8;

/// Side owning a piece or holding the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Player {
    Red,
    Black,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::Red, Player::Black];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Player::Red => 0,
            Player::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Player::Red => Player::Black,
            Player::Black => Player::Red,
        }
    }

    /// Row delta of a forward step for this side's men.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Player::Red => -1,
            Player::Black => 1,
        }
    }

    /// Row on which this side's men are crowned.
    #[inline]
    pub const fn promotion_row(self) -> i8 {
        match self {
            Player::Red => 0,
            Player::Black => BOARD_SIZE - 1,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Player::Red => "red",
            Player::Black => "black",
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    Man,
    King,
}

/// A piece has no identity beyond the square it sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub owner: Player,
    pub rank: Rank,
}

impl Piece {
    #[inline]
    pub const fn man(owner: Player) -> Self {
        Self {
            owner,
            rank: Rank::Man,
        }
    }

    #[inline]
    pub const fn king(owner: Player) -> Self {
        Self {
            owner,
            rank: Rank::King,
        }
    }

    #[inline]
    pub const fn is_king(self) -> bool {
        matches!(self.rank, Rank::King)
    }

    /// Men only ever become kings; kings stay kings.
    #[inline]
    pub const fn crowned(self) -> Self {
        Self::king(self.owner)
    }

    /// Diagonal directions this piece may step along.
    pub fn step_directions(self) -> &'static [(i8, i8)] {
        match (self.rank, self.owner) {
            (Rank::King, _) => &ALL_DIAGONALS,
            (Rank::Man, Player::Red) => &RED_FORWARD_DIAGONALS,
            (Rank::Man, Player::Black) => &BLACK_FORWARD_DIAGONALS,
        }
    }

    /// Character used by the text renderer: lowercase men, uppercase kings.
    pub const fn symbol(self) -> char {
        match (self.owner, self.rank) {
            (Player::Red, Rank::Man) => 'r',
            (Player::Red, Rank::King) => 'R',
            (Player::Black, Rank::Man) => 'b',
            (Player::Black, Rank::King) => 'B',
        }
    }
}

pub const ALL_DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
const RED_FORWARD_DIAGONALS: [(i8, i8); 2] = [(-1, -1), (-1, 1)];
const BLACK_FORWARD_DIAGONALS: [(i8, i8); 2] = [(1, -1), (1, 1)];

/// Grid coordinate. May lie off the board after an `offset`; check with
/// `in_bounds` before use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub row: i8,
    pub col: i8,
}

impl Square {
    #[inline]
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    #[inline]
    pub const fn in_bounds(self) -> bool {
        self.row >= 0 && self.row < BOARD_SIZE && self.col >= 0 && self.col < BOARD_SIZE
    }

    /// Playable square: `row + col` is odd.
    #[inline]
    pub const fn is_dark(self) -> bool {
        (self.row + self.col).rem_euclid(2) == 1
    }

    #[inline]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Self {
        Self::new(self.row + d_row, self.col + d_col)
    }

    /// Square halfway along a two-step diagonal hop, if `to` is one.
    #[inline]
    pub fn jumped_over(self, to: Square) -> Option<Square> {
        let d_row = to.row - self.row;
        let d_col = to.col - self.col;
        if d_row.abs() == 2 && d_col.abs() == 2 {
            Some(Self::new(self.row + d_row / 2, self.col + d_col / 2))
        } else {
            None
        }
    }

    /// Every square of the board in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Square::new(row, col)))
    }

    /// Playable squares in row-major order.
    pub fn all_dark() -> impl Iterator<Item = Square> {
        Self::all().filter(|sq| sq.is_dark())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn there_are_32_dark_squares() {
        assert_eq!(Square::all().count(), 64);
        assert_eq!(Square::all_dark().count(), 32);
        assert!(Square::new(0, 1).is_dark());
        assert!(!Square::new(0, 0).is_dark());
    }

    #[test]
    fn jumped_over_only_for_two_step_diagonals() {
        let from = Square::new(4, 3);
        assert_eq!(from.jumped_over(Square::new(2, 5)), Some(Square::new(3, 4)));
        assert_eq!(from.jumped_over(Square::new(3, 4)), None);
        assert_eq!(from.jumped_over(Square::new(4, 5)), None);
    }

    #[test]
    fn men_step_toward_their_promotion_row() {
        for player in Player::ALL {
            for (d_row, _) in Piece::man(player).step_directions() {
                assert_eq!(*d_row, player.forward());
            }
            assert_eq!(Piece::king(player).step_directions().len(), 4);
        }
        assert_eq!(Player::Red.promotion_row(), 0);
        assert_eq!(Player::Black.promotion_row(), 7);
    }
}
