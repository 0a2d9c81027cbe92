//! Errors surfaced to callers driving a game.

use std::fmt;

use crate::board::{Color, InvariantViolation, MoveError, SquareError};

/// Reasons a game-level request was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// A coordinate did not name a board square
    InvalidSquare(SquareError),
    /// Coordinate move text was not of the form `e2e4` / `e7e8q`
    InvalidMoveText { text: String },
    /// The move is not permitted in the current position
    IllegalMove(MoveError),
    /// The requesting side is not the side to move
    NotYourTurn { side: Color },
    /// The game already has an outcome
    GameOver,
    /// A recorded move failed while rebuilding a game
    Replay { ply: usize, error: Box<GameError> },
    /// The position is malformed
    Invariant(InvariantViolation),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidSquare(e) => write!(f, "{e}"),
            GameError::InvalidMoveText { text } => {
                write!(f, "'{text}' is not a coordinate move")
            }
            GameError::IllegalMove(e) => write!(f, "{e}"),
            GameError::NotYourTurn { side } => write!(f, "It is not {side}'s turn"),
            GameError::GameOver => write!(f, "The game is over"),
            GameError::Replay { ply, error } => write!(f, "Move {} failed: {error}", ply + 1),
            GameError::Invariant(e) => write!(f, "Internal error: {e}"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::InvalidSquare(e) => Some(e),
            GameError::IllegalMove(e) => Some(e),
            GameError::Replay { error, .. } => Some(error.as_ref()),
            GameError::Invariant(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SquareError> for GameError {
    fn from(e: SquareError) -> Self {
        GameError::InvalidSquare(e)
    }
}

impl From<MoveError> for GameError {
    fn from(e: MoveError) -> Self {
        match e {
            MoveError::Invariant(v) => GameError::Invariant(v),
            other => GameError::IllegalMove(other),
        }
    }
}

impl From<InvariantViolation> for GameError {
    fn from(e: InvariantViolation) -> Self {
        GameError::Invariant(e)
    }
}
