//! Seeded random-legal-move games for invariant checking and benchmarks.
//!
//! Each turn picks uniformly among the legal moves of the side to move and
//! plays it through `GameState::apply_path`. Multi-jumps are sometimes split
//! at random landing squares so forced continuations get exercised, and the
//! pieces taken over all the steps must match the chosen sequence. After
//! every applied request the board is checked for piece conservation,
//! capture bookkeeping and crowning monotonicity.

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::game_state::board::Board;
use crate::game_state::checkers_rules::RuleSet;
use crate::game_state::checkers_types::{Player, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::MoveOutcome;
use crate::move_generation::move_generator::{has_capture, CheckersMove};
use crate::utils::algebraic::path_to_algebraic;

#[derive(Debug, Clone)]
pub struct PlayoutConfig {
    pub rules: RuleSet,
    pub max_plies: u32,
    pub seed: u64,
    /// Chance of splitting a multi-jump into single-hop requests.
    pub stepwise_jump_probability: f64,
}

impl Default for PlayoutConfig {
    fn default() -> Self {
        Self {
            rules: RuleSet::default(),
            max_plies: 300,
            seed: 0,
            stepwise_jump_probability: 0.5,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlayoutReport {
    pub final_state: GameState,
    pub captures: usize,
    pub promotions: usize,
    pub continuations: usize,
    /// Applied paths in algebraic notation, one entry per request.
    pub played: Vec<String>,
}

pub fn random_playout(config: &PlayoutConfig) -> Result<PlayoutReport, String> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut state = GameState::with_rules(config.rules);
    let mut report = PlayoutReport {
        final_state: state.clone(),
        captures: 0,
        promotions: 0,
        continuations: 0,
        played: Vec::new(),
    };

    // Move being played step-wise: the chosen sequence, the index of the
    // square the piece stands on, and the captures made so far.
    let mut pending: Option<(CheckersMove, usize, Vec<Square>)> = None;

    while !state.is_over() && state.ply < config.max_plies {
        let (chosen, at, mut taken) = match pending.take() {
            Some(in_progress) => in_progress,
            None => (choose_move(&state, &mut rng)?, 0, Vec::new()),
        };

        let last = chosen.path.len() - 1;
        let stop = if last - at > 1 && rng.random_bool(config.stepwise_jump_probability) {
            rng.random_range(at + 1..last)
        } else {
            last
        };

        let before = state.board;
        let mover = state.turn;
        let outcome = state
            .apply_path(&chosen.path[at..=stop])
            .map_err(|err| format!("legal move rejected at ply {}: {err}", state.ply))?;
        check_move_invariants(&before, &state.board, mover, &outcome)?;
        taken.extend_from_slice(&outcome.captured);

        report.captures += outcome.captured.len();
        report.promotions += usize::from(outcome.promoted);
        report.continuations += usize::from(outcome.continuation.is_some());
        report
            .played
            .push(path_to_algebraic(&outcome.path).map_err(|err| err.to_string())?);

        if stop < last {
            if outcome.continuation != Some(chosen.path[stop]) {
                return Err(format!(
                    "partial capture at ply {} did not hold the turn",
                    state.ply
                ));
            }
            pending = Some((chosen, stop, taken));
            continue;
        }
        if outcome.continuation.is_some() {
            return Err(format!("completed move still continues at ply {}", state.ply));
        }
        if taken != chosen.captured {
            return Err(format!(
                "move captured {} pieces over its steps but {} were expected",
                taken.len(),
                chosen.capture_count()
            ));
        }
    }

    report.final_state = state;
    Ok(report)
}

/// Uniform pick among the legal moves of the side to move.
fn choose_move(state: &GameState, rng: &mut StdRng) -> Result<CheckersMove, String> {
    let legal = state.legal_moves();
    let mandatory = has_capture(&legal);
    let choices: Vec<&CheckersMove> = legal.values().flat_map(|m| m.values()).collect();
    if choices.is_empty() {
        return Err(format!("no legal moves at ply {} but game not over", state.ply));
    }
    if mandatory && choices.iter().any(|mv| !mv.is_capture()) {
        return Err(format!("simple move offered alongside a capture at ply {}", state.ply));
    }
    Ok(choices[rng.random_range(0..choices.len())].clone())
}

/// Conservation and crowning checks for one applied move.
pub fn check_move_invariants(
    before: &Board,
    after: &Board,
    mover: Player,
    outcome: &MoveOutcome,
) -> Result<(), String> {
    let opponent = mover.opposite();
    if before.count(mover) != after.count(mover) {
        return Err(format!("{mover} piece count changed by its own move"));
    }
    if before.count(opponent) != after.count(opponent) + outcome.captured.len() {
        return Err(format!(
            "{opponent} lost {} pieces but {} were reported captured",
            before.count(opponent).abs_diff(after.count(opponent)),
            outcome.captured.len()
        ));
    }
    let hops = outcome.path.len() - 1;
    if !outcome.captured.is_empty() && outcome.captured.len() != hops {
        return Err(format!(
            "capture path has {hops} hops but {} captures",
            outcome.captured.len()
        ));
    }
    if after.count_kings(mover) < before.count_kings(mover) {
        return Err(format!("{mover} lost a king without being captured"));
    }
    if after.pieces().any(|(square, _)| !square.is_dark()) {
        return Err("piece found on a light square".to_owned());
    }
    Ok(())
}
