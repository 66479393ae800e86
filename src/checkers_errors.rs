//! Errors returned by turn handling and notation parsing.
//!
//! Every variant is recoverable: the game state is left untouched when an
//! error is returned, so callers (a UI, or a transport relaying a remote
//! peer's move) can report the message and carry on.

use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The origin holds no piece of the side to move, or differs from the
    /// square that must continue a multi-jump.
    WrongTurn(String),

    /// The destination is not legal for the selected piece. Includes simple
    /// moves attempted while a capture is mandatory.
    IllegalDestination(String),

    /// A path with fewer than two squares, a square off the board, or
    /// unparseable algebraic notation.
    MalformedMove(String),

    /// The game already has a result.
    GameOver(String),
}

impl MoveError {
    /// Short stable tag, used on the wire.
    pub const fn kind(&self) -> &'static str {
        match self {
            MoveError::WrongTurn(_) => "wrong-turn",
            MoveError::IllegalDestination(_) => "illegal-destination",
            MoveError::MalformedMove(_) => "malformed-move",
            MoveError::GameOver(_) => "game-over",
        }
    }
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::WrongTurn(msg) => write!(f, "wrong turn: {msg}"),
            MoveError::IllegalDestination(msg) => write!(f, "illegal destination: {msg}"),
            MoveError::MalformedMove(msg) => write!(f, "malformed move: {msg}"),
            MoveError::GameOver(msg) => write!(f, "game over: {msg}"),
        }
    }
}

impl Error for MoveError {}

pub type MoveResult<T> = Result<T, MoveError>;
