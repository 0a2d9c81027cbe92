//! Fluent builder for constructing chess positions.
//!
//! Allows creating positions piece by piece rather than parsing FEN strings.
//!
//! # Example
//! ```
//! use chess_rules::board::{Color, Piece, PositionBuilder, Role, Square};
//!
//! let position = PositionBuilder::new()
//!     .piece(Square(0, 4), Piece::new(Color::White, Role::King))
//!     .piece(Square(7, 4), Piece::new(Color::Black, Role::King))
//!     .piece(Square(1, 0), Piece::new(Color::White, Role::Pawn))
//!     .side_to_move(Color::White)
//!     .build();
//! assert_eq!(position.piece_count(), 3);
//! ```

use super::{CastlingRights, Color, Piece, Position, Square};

/// A fluent builder for constructing `Position` values.
#[derive(Clone, Debug)]
pub struct PositionBuilder {
    pieces: Vec<(Square, Piece)>,
    side_to_move: Color,
    castling_rights: CastlingRights,
    en_passant_square: Option<Square>,
}

impl Default for PositionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionBuilder {
    /// Create a new empty position builder.
    #[must_use]
    pub fn new() -> Self {
        PositionBuilder {
            pieces: Vec::new(),
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant_square: None,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let start = Position::new();
        PositionBuilder {
            pieces: start.occupied().collect(),
            side_to_move: Color::White,
            castling_rights: CastlingRights::all(),
            en_passant_square: None,
        }
    }

    /// Place a piece, replacing whatever stood there.
    #[must_use]
    pub fn piece(mut self, square: Square, piece: Piece) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self.pieces.push((square, piece));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self
    }

    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Enable kingside castling for a color.
    #[must_use]
    pub fn castle_kingside(mut self, color: Color) -> Self {
        self.castling_rights.set(color, true);
        self
    }

    /// Enable queenside castling for a color.
    #[must_use]
    pub fn castle_queenside(mut self, color: Color) -> Self {
        self.castling_rights.set(color, false);
        self
    }

    /// Disable all castling rights.
    #[must_use]
    pub const fn no_castling_rights(mut self) -> Self {
        self.castling_rights = CastlingRights::none();
        self
    }

    /// Set the en passant target square.
    #[must_use]
    pub const fn en_passant(mut self, target: Square) -> Self {
        self.en_passant_square = Some(target);
        self
    }

    /// Build the position.
    #[must_use]
    pub fn build(self) -> Position {
        let mut position = Position::empty();
        for (square, piece) in self.pieces {
            position.set_piece(square, piece);
        }
        position.side_to_move = self.side_to_move;
        position.castling_rights = self.castling_rights;
        position.en_passant_square = self.en_passant_square;
        position
    }
}
