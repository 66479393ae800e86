//! Rule-set configuration.
//!
//! The capture rules differ between casual and tournament play, and some
//! house rules let men capture backwards. Those choices live here as named
//! presets instead of being hard-coded in move generation.

use std::fmt;
use std::str::FromStr;

use crate::game_state::checkers_types::Player;

/// How the longest-capture requirement is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CapturePolicy {
    /// Capturing is mandatory; each piece must take its own longest sequence,
    /// but pieces are not compared with each other.
    #[default]
    PerPiece,
    /// Capturing is mandatory and only sequences of the board-wide maximum
    /// length are legal.
    BoardWide,
}

/// Directions in which an uncrowned man may jump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ManCaptures {
    #[default]
    ForwardOnly,
    AnyDirection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleSet {
    pub capture_policy: CapturePolicy,
    pub man_captures: ManCaptures,
    pub first_to_move: Player,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::american()
    }
}

impl RuleSet {
    /// Standard American checkers: forward-only men, per-piece longest capture.
    pub const fn american() -> Self {
        Self {
            capture_policy: CapturePolicy::PerPiece,
            man_captures: ManCaptures::ForwardOnly,
            first_to_move: Player::Red,
        }
    }

    pub const fn tournament() -> Self {
        Self {
            capture_policy: CapturePolicy::BoardWide,
            ..Self::american()
        }
    }

    /// Men may also capture backwards.
    pub const fn permissive() -> Self {
        Self {
            man_captures: ManCaptures::AnyDirection,
            ..Self::american()
        }
    }

    pub fn preset_name(&self) -> &'static str {
        match (self.capture_policy, self.man_captures) {
            (CapturePolicy::PerPiece, ManCaptures::ForwardOnly) => "american",
            (CapturePolicy::BoardWide, ManCaptures::ForwardOnly) => "tournament",
            (CapturePolicy::PerPiece, ManCaptures::AnyDirection) => "permissive",
            (CapturePolicy::BoardWide, ManCaptures::AnyDirection) => "custom",
        }
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.preset_name())
    }
}

impl FromStr for RuleSet {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "american" | "casual" | "default" => Ok(Self::american()),
            "tournament" => Ok(Self::tournament()),
            "permissive" => Ok(Self::permissive()),
            other => Err(format!(
                "unknown rule set '{other}' (expected american, casual, tournament or permissive)"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CapturePolicy, ManCaptures, RuleSet};

    #[test]
    fn default_is_standard_american() {
        let rules = RuleSet::default();
        assert_eq!(rules.capture_policy, CapturePolicy::PerPiece);
        assert_eq!(rules.man_captures, ManCaptures::ForwardOnly);
    }

    #[test]
    fn presets_parse_by_name() {
        assert_eq!("casual".parse::<RuleSet>(), Ok(RuleSet::american()));
        assert_eq!(
            " Tournament ".parse::<RuleSet>(),
            Ok(RuleSet::tournament())
        );
        for preset in [RuleSet::american(), RuleSet::tournament(), RuleSet::permissive()] {
            assert_eq!(preset.to_string().parse::<RuleSet>(), Ok(preset));
        }
        assert!("blitz".parse::<RuleSet>().is_err());
    }
}
