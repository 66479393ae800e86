//! Turn handling: validate a requested move, play it, crown, and decide
//! whether the same piece must keep jumping or the turn passes.

use log::debug;

use crate::checkers_errors::{MoveError, MoveResult};
use crate::game_state::board::Board;
use crate::game_state::checkers_types::{Player, Square};
use crate::game_state::game_state::{GameState, GameStatus};
use crate::move_generation::move_generator::CheckersMove;

/// What an applied move did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub path: Vec<Square>,
    pub captured: Vec<Square>,
    pub promoted: bool,
    /// Set when the moved piece must jump again before the turn passes.
    pub continuation: Option<Square>,
    pub winner: Option<Player>,
    /// True for wins and draws alike.
    pub game_over: bool,
}

/// Board-level effect of playing a path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutedMove {
    pub captured: Vec<Square>,
    pub promoted: bool,
}

/// Play `path` on `board` without any legality check. Every hop spanning
/// two rows and two columns removes the piece on its midpoint. Crowning is
/// decided once, on the final square. Returns None if the origin is empty.
pub fn execute_path(board: &mut Board, path: &[Square]) -> Option<ExecutedMove> {
    play_path(board, path, true)
}

fn play_path(board: &mut Board, path: &[Square], crown: bool) -> Option<ExecutedMove> {
    let (&origin, rest) = path.split_first()?;
    let piece = board.remove(origin)?;

    let mut captured = Vec::new();
    let mut from = origin;
    for &to in rest {
        if let Some(over) = from.jumped_over(to) {
            board.remove(over);
            captured.push(over);
        }
        from = to;
    }

    let promoted = crown && !piece.is_king() && from.row == piece.owner.promotion_row();
    board.set(from, if promoted { piece.crowned() } else { piece });

    Some(ExecutedMove { captured, promoted })
}

/// Move the piece on `origin` to `destination`.
///
/// `destination` is either the final square of a legal move, or an
/// intermediate landing square of a legal capture sequence; in the latter
/// case only the hops up to it are played and the piece must continue.
/// A square that is the end of one route and the middle of another is
/// taken as the end.
pub fn apply_move(
    state: &mut GameState,
    origin: Square,
    destination: Square,
) -> MoveResult<MoveOutcome> {
    if !destination.in_bounds() {
        return Err(MoveError::MalformedMove(format!(
            "destination ({}, {}) is off the board",
            destination.row, destination.col
        )));
    }

    let candidates = candidate_moves(state, origin)?;
    if let Some(mv) = candidates.iter().find(|mv| mv.destination() == destination) {
        let mv = mv.clone();
        return Ok(commit_move(state, mv, true));
    }

    let partial = candidates.iter().filter(|mv| mv.is_capture()).find_map(|mv| {
        mv.path
            .iter()
            .skip(1)
            .position(|&sq| sq == destination)
            .and_then(|index| mv.prefix(index + 1))
    });

    match partial {
        Some(mv) => Ok(commit_move(state, mv, false)),
        None => Err(MoveError::IllegalDestination(format!(
            "({}, {}) is not reachable from ({}, {})",
            destination.row, destination.col, origin.row, origin.col
        ))),
    }
}

/// Apply a path as received from a peer. It must match a legal move, or
/// the start of a legal capture sequence, hop for hop.
pub fn apply_path(state: &mut GameState, path: &[Square]) -> MoveResult<MoveOutcome> {
    if path.len() < 2 {
        return Err(MoveError::MalformedMove(format!(
            "a move needs at least two squares, got {}",
            path.len()
        )));
    }
    if let Some(off_board) = path.iter().find(|sq| !sq.in_bounds()) {
        return Err(MoveError::MalformedMove(format!(
            "({}, {}) is off the board",
            off_board.row, off_board.col
        )));
    }

    let candidates = candidate_moves(state, path[0])?;
    let hops = path.len() - 1;
    let matched = candidates.into_iter().find_map(|mv| {
        if !mv.path.starts_with(path) {
            None
        } else if mv.path.len() == path.len() {
            Some((mv, true))
        } else {
            mv.prefix(hops).map(|prefix| (prefix, false))
        }
    });

    match matched {
        Some((mv, complete)) => Ok(commit_move(state, mv, complete)),
        None => Err(MoveError::IllegalDestination(format!(
            "no legal move from ({}, {}) follows the requested {} hop(s)",
            path[0].row, path[0].col, hops
        ))),
    }
}

/// Moves the side to move may make with the piece on `origin`, after turn
/// and continuation checks.
fn candidate_moves(state: &GameState, origin: Square) -> MoveResult<Vec<CheckersMove>> {
    if state.is_over() {
        return Err(MoveError::GameOver(match state.winner() {
            Some(player) => format!("{player} has already won"),
            None => "the game was drawn".to_owned(),
        }));
    }
    if !origin.in_bounds() {
        return Err(MoveError::MalformedMove(format!(
            "origin ({}, {}) is off the board",
            origin.row, origin.col
        )));
    }

    match state.board.get(origin) {
        None => {
            return Err(MoveError::WrongTurn(format!(
                "no piece on ({}, {})",
                origin.row, origin.col
            )))
        }
        Some(piece) if piece.owner != state.turn => {
            return Err(MoveError::WrongTurn(format!(
                "piece on ({}, {}) belongs to {}, {} to move",
                origin.row, origin.col, piece.owner, state.turn
            )))
        }
        Some(_) => {}
    }

    let generator = state.generator();
    match state.forced_continuation {
        Some(square) if square != origin => Err(MoveError::WrongTurn(format!(
            "the piece on ({}, {}) must continue jumping",
            square.row, square.col
        ))),
        Some(_) => Ok(generator.capture_sequences_for(&state.board, origin)),
        None => Ok(generator.legal_sequences_for(&state.board, state.turn, origin)),
    }
}

/// Play `mv` for the side to move. A `complete` move ends the turn and may
/// crown; a prefix of a longer sequence never crowns and always leaves the
/// piece to continue.
fn commit_move(state: &mut GameState, mv: CheckersMove, complete: bool) -> MoveOutcome {
    let mover = state.turn;
    let destination = mv.destination();
    let executed = play_path(&mut state.board, &mv.path, complete).unwrap_or_default();

    let continuation = if complete { None } else { Some(destination) };

    state.forced_continuation = continuation;
    if continuation.is_none() {
        state.turn = mover.opposite();
    }
    state.ply = state.ply.saturating_add(1);
    state.status = state.evaluate_status();

    debug!(
        "{} played {:?} capturing {} (promoted: {}, continue: {:?})",
        mover,
        mv.path,
        executed.captured.len(),
        executed.promoted,
        continuation
    );
    if state.is_over() {
        debug!("game finished after ply {}: {:?}", state.ply, state.status);
    }

    MoveOutcome {
        path: mv.path,
        captured: executed.captured,
        promoted: executed.promoted,
        continuation,
        winner: state.winner(),
        game_over: state.status != GameStatus::InProgress,
    }
}
