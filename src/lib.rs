//! Chess position rules: move generation, move application, check and
//! checkmate detection, and turn-based games built on them.

pub mod board;
pub mod game;

pub use board::{Color, Move, Piece, Position, Role, Square, Status};
pub use game::{Game, GameError, GameOptions, MoveRequest, Outcome};
