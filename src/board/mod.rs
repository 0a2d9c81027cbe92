//! Chess position representation and rules.
//!
//! A `Position` is a mailbox of 64 optional pieces plus side to move,
//! castling rights and the en passant square. Move generation, check and
//! checkmate detection, and move application are all methods on it.
//!
//! # Example
//! ```
//! use chess_rules::board::{Color, Position, Square};
//!
//! let position = Position::new();
//! let pawn_moves = position.allowed_moves(Square(1, 4));
//! assert_eq!(pawn_moves.len(), 2);
//! assert!(!position.in_check(Color::White).unwrap());
//! ```

mod apply;
mod builder;
mod error;
mod fen;
mod movegen;
pub mod prelude;
mod state;
mod status;
mod types;

#[cfg(test)]
mod tests;

pub use builder::PositionBuilder;
pub use error::{FenError, InvariantViolation, MoveError, SquareError};
pub use state::Position;
pub use status::Status;
pub use types::{CastlingRights, Color, Move, Piece, Role, Square, SquareSet, SquareSetIter};
