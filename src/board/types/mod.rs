//! Core chess types.
//!
//! - `Role`, `Color` and `Piece`
//! - `Square` - a (rank, file) board coordinate
//! - `SquareSet` - a 64-bit set of squares
//! - `Move` - one ply
//! - `CastlingRights` - castling state

mod castling;
mod moves;
mod piece;
mod square;
mod square_set;

pub use castling::CastlingRights;
pub use moves::Move;
pub use piece::{Color, Piece, Role};
pub use square::Square;
pub use square_set::{SquareSet, SquareSetIter};
