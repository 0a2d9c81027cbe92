//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//!
//! let position = Position::new();
//! assert_eq!(position.status().unwrap(), Status::Ongoing);
//! ```

pub use super::{
    Color, InvariantViolation, Move, MoveError, Piece, Position, PositionBuilder, Role, Square,
    SquareSet, Status,
};
