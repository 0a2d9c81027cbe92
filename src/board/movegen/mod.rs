//! Per-role move generation and move validation.
//!
//! `allowed_moves` yields pseudo-legal destinations: board edges, blocking
//! and captures are respected, but a move may still expose the mover's own
//! king. `legal_moves` and `validate_move` add that filter on top.

mod kings;
mod knights;
mod pawns;
mod sliders;

pub(crate) use kings::castling_rook_squares;

use std::collections::BTreeMap;

use super::{
    Color, InvariantViolation, Move, MoveError, Piece, Position, Role, Square, SquareSet,
};

impl Position {
    /// Pseudo-legal destinations for the piece on `from`; empty if `from` is empty.
    #[must_use]
    pub fn allowed_moves(&self, from: Square) -> SquareSet {
        let Some(piece) = self.piece_at(from) else {
            return SquareSet::EMPTY;
        };
        match piece.role {
            Role::Pawn => self.generate_pawn_moves(from, piece.color),
            Role::Knight => self.generate_knight_moves(from, piece.color),
            Role::Bishop => self.generate_sliding_moves(from, piece.color, &sliders::BISHOP_DIRS),
            Role::Rook => self.generate_sliding_moves(from, piece.color, &sliders::ROOK_DIRS),
            Role::Queen => self.generate_sliding_moves(from, piece.color, &sliders::QUEEN_DIRS),
            Role::King => self.generate_king_moves(from, piece.color),
        }
    }

    /// Pseudo-legal destinations of every piece on the board, keyed by square.
    #[must_use]
    pub fn all_allowed_moves(&self) -> BTreeMap<Square, SquareSet> {
        self.occupied()
            .map(|(sq, _)| (sq, self.allowed_moves(sq)))
            .collect()
    }

    /// Squares the piece on `from` attacks, whether empty or occupied by
    /// either side. Pawns attack diagonally only; kings never castle here.
    pub(crate) fn attacks_from(&self, from: Square, piece: Piece) -> SquareSet {
        match piece.role {
            Role::Pawn => pawns::pawn_attacks(from, piece.color),
            Role::Knight => knights::step_targets(from, &knights::KNIGHT_OFFSETS),
            Role::Bishop => self.ray_attacks(from, &sliders::BISHOP_DIRS),
            Role::Rook => self.ray_attacks(from, &sliders::ROOK_DIRS),
            Role::Queen => self.ray_attacks(from, &sliders::QUEEN_DIRS),
            Role::King => knights::step_targets(from, &kings::KING_OFFSETS),
        }
    }

    /// Returns true if any piece of `by` attacks `target`.
    #[must_use]
    pub fn is_attacked(&self, target: Square, by: Color) -> bool {
        self.pieces(by)
            .any(|(sq, piece)| self.attacks_from(sq, piece).contains(target))
    }

    /// Drop squares holding a piece of `color`.
    pub(crate) fn without_own(&self, targets: SquareSet, color: Color) -> SquareSet {
        targets
            .iter()
            .filter(|&sq| self.color_on(sq) != Some(color))
            .collect()
    }

    /// `allowed_moves` minus destinations that leave the mover's king in check.
    pub fn legal_moves(&self, from: Square) -> Result<SquareSet, InvariantViolation> {
        let Some(piece) = self.piece_at(from) else {
            return Ok(SquareSet::EMPTY);
        };
        let mut legal = SquareSet::EMPTY;
        for to in self.allowed_moves(from) {
            let mv = self.build_move(from, to, None);
            if !self.consider_move(&mv)?.in_check(piece.color)? {
                legal.insert(to);
            }
        }
        Ok(legal)
    }

    /// Build the `Move` for a coordinate pair against this position.
    ///
    /// A king moving two files is a castle; a pawn moving diagonally onto
    /// the en passant square captures the pawn beside it. The result is not
    /// checked for legality.
    #[must_use]
    pub fn build_move(&self, from: Square, to: Square, promotion: Option<Role>) -> Move {
        let mut mv = match self.piece_at(from) {
            Some(p) if p.role == Role::King && from.file().abs_diff(to.file()) == 2 => {
                Move::castle(from, to)
            }
            Some(p)
                if p.role == Role::Pawn
                    && from.file() != to.file()
                    && self.en_passant_square == Some(to)
                    && self.is_empty(to) =>
            {
                Move::en_passant(from, to, Square(from.rank(), to.file()))
            }
            _ => Move::new(from, to),
        };
        mv.promotion = promotion;
        mv
    }

    /// Check `mv` against the side to move without the self-check filter.
    pub fn validate_pseudo_legal(&self, mv: &Move) -> Result<Piece, MoveError> {
        let piece = self
            .piece_at(mv.from)
            .ok_or(MoveError::NoPieceAt { square: mv.from })?;
        if piece.color != self.side_to_move {
            return Err(MoveError::WrongSide {
                square: mv.from,
                side_to_move: self.side_to_move,
            });
        }
        if !self.allowed_moves(mv.from).contains(mv.to)
            || *mv != self.build_move(mv.from, mv.to, mv.promotion)
        {
            return Err(MoveError::IllegalDestination {
                from: mv.from,
                to: mv.to,
            });
        }
        if let Some(role) = mv.promotion {
            if !role.is_promotion_target() {
                return Err(MoveError::InvalidPromotion { role });
            }
            let promotes =
                piece.role == Role::Pawn && mv.to.rank() == piece.color.pawn_promotion_rank();
            if !promotes {
                return Err(MoveError::UnexpectedPromotion {
                    from: mv.from,
                    to: mv.to,
                });
            }
        }
        Ok(piece)
    }

    /// Full legality check for the side to move.
    pub fn validate_move(&self, mv: &Move) -> Result<(), MoveError> {
        let piece = self.validate_pseudo_legal(mv)?;
        if self.consider_move(mv)?.in_check(piece.color)? {
            return Err(MoveError::LeavesKingInCheck {
                from: mv.from,
                to: mv.to,
            });
        }
        Ok(())
    }

    /// Number of legal moves available to the side to move.
    pub fn legal_move_count(&self) -> Result<usize, InvariantViolation> {
        let mut count = 0;
        for (sq, _) in self.pieces(self.side_to_move) {
            count += self.legal_moves(sq)?.len();
        }
        Ok(count)
    }
}
