//! Move representation shared by generation, application and notation.

use std::collections::BTreeMap;

use crate::game_state::checkers_types::Square;

/// A full move: origin followed by one landing square per step, plus the
/// squares of the pieces it captures (empty for a simple step).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckersMove {
    pub path: Vec<Square>,
    pub captured: Vec<Square>,
}

impl CheckersMove {
    pub fn simple(from: Square, to: Square) -> Self {
        Self {
            path: vec![from, to],
            captured: Vec::new(),
        }
    }

    #[inline]
    pub fn origin(&self) -> Square {
        self.path[0]
    }

    #[inline]
    pub fn destination(&self) -> Square {
        self.path[self.path.len() - 1]
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        !self.captured.is_empty()
    }

    #[inline]
    pub fn capture_count(&self) -> usize {
        self.captured.len()
    }

    /// The first `hops` steps of this move, or None if `hops` is out of range.
    pub fn prefix(&self, hops: usize) -> Option<CheckersMove> {
        if hops == 0 || hops >= self.path.len() {
            return None;
        }
        Some(CheckersMove {
            path: self.path[..=hops].to_vec(),
            captured: self.captured.iter().take(hops).copied().collect(),
        })
    }
}

/// Legal moves of one piece keyed by final landing square.
pub type DestinationMap = BTreeMap<Square, CheckersMove>;

/// Legal moves of a side keyed by origin square.
pub type LegalMoveMap = BTreeMap<Square, DestinationMap>;

/// Whether any move in the map captures.
pub fn has_capture(moves: &LegalMoveMap) -> bool {
    moves
        .values()
        .flat_map(|destinations| destinations.values())
        .any(CheckersMove::is_capture)
}

pub fn move_count(moves: &LegalMoveMap) -> usize {
    moves.values().map(BTreeMap::len).sum()
}

#[cfg(test)]
mod tests {
    use super::CheckersMove;
    use crate::game_state::checkers_types::Square;

    #[test]
    fn prefix_keeps_matching_captures() {
        let mv = CheckersMove {
            path: vec![Square::new(6, 1), Square::new(4, 3), Square::new(2, 5)],
            captured: vec![Square::new(5, 2), Square::new(3, 4)],
        };
        let first_hop = mv.prefix(1).expect("one hop should be a valid prefix");
        assert_eq!(first_hop.destination(), Square::new(4, 3));
        assert_eq!(first_hop.captured, vec![Square::new(5, 2)]);
        assert!(mv.prefix(2).is_none());
        assert!(mv.prefix(0).is_none());
    }
}
