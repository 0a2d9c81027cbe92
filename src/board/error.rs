//! Error types for chess board operations.

use std::fmt;

use super::types::{Color, Role, Square};

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN string has too few parts (needs at least 4)
    TooFewParts { found: usize },
    /// Invalid piece character in position string
    InvalidPiece { char: char },
    /// Invalid castling character
    InvalidCastling { char: char },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Invalid en passant square
    InvalidEnPassant { found: String },
    /// Wrong number of ranks in position string
    InvalidRank { rank: usize },
    /// Too many files in a rank
    TooManyFiles { rank: usize, files: usize },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::TooFewParts { found } => {
                write!(f, "FEN must have at least 4 parts, found {found}")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::InvalidCastling { char } => {
                write!(f, "Invalid castling character '{char}' in FEN")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "Invalid en passant square '{found}'")
            }
            FenError::InvalidRank { rank } => {
                write!(f, "Invalid rank index {rank} in FEN")
            }
            FenError::TooManyFiles { rank, files } => {
                write!(f, "Too many files ({files}) in rank {rank}")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: usize },
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "{notation} is not a valid square")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// A well-formed move that the current position does not permit.
///
/// The position is left untouched whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// Nothing stands on the origin square
    NoPieceAt { square: Square },
    /// The piece on the origin square belongs to the side not on move
    WrongSide { square: Square, side_to_move: Color },
    /// The destination is not reachable by the piece
    IllegalDestination { from: Square, to: Square },
    /// The move would leave the mover's own king in check
    LeavesKingInCheck { from: Square, to: Square },
    /// Promotion to a pawn or king
    InvalidPromotion { role: Role },
    /// Promotion requested for a move that does not promote
    UnexpectedPromotion { from: Square, to: Square },
    /// The position itself is malformed
    Invariant(InvariantViolation),
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::NoPieceAt { square } => write!(f, "There is no piece on {square}"),
            MoveError::WrongSide {
                square,
                side_to_move,
            } => {
                write!(f, "The piece on {square} cannot move, it is {side_to_move}'s turn")
            }
            MoveError::IllegalDestination { from, to } => {
                write!(f, "The piece on {from} cannot move to {to}")
            }
            MoveError::LeavesKingInCheck { from, to } => {
                write!(f, "Moving {from} to {to} would leave your king in check")
            }
            MoveError::InvalidPromotion { role } => {
                write!(f, "A pawn cannot promote to a {role}")
            }
            MoveError::UnexpectedPromotion { from, to } => {
                write!(f, "Moving {from} to {to} is not a promotion")
            }
            MoveError::Invariant(e) => write!(f, "Internal error: {e}"),
        }
    }
}

impl std::error::Error for MoveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoveError::Invariant(e) => Some(e),
            _ => None,
        }
    }
}

impl From<InvariantViolation> for MoveError {
    fn from(e: InvariantViolation) -> Self {
        MoveError::Invariant(e)
    }
}

/// A position reached a state the rules never produce.
///
/// These indicate a bug upstream (an unvalidated move, a hand-built position
/// without a king), not a user mistake, and are not recoverable by retrying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    /// A move was applied from an empty square
    EmptyOrigin { square: Square },
    /// No king of the given color is on the board
    MissingKing { color: Color },
    /// A castling move found no rook in the corner
    MissingCastlingRook { square: Square },
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantViolation::EmptyOrigin { square } => {
                write!(f, "Cannot apply a move from empty square {square}")
            }
            InvariantViolation::MissingKing { color } => {
                write!(f, "No {color} king on the board")
            }
            InvariantViolation::MissingCastlingRook { square } => {
                write!(f, "Castling expected a rook on {square}")
            }
        }
    }
}

impl std::error::Error for InvariantViolation {}
