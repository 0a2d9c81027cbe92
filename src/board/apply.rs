use super::movegen::castling_rook_squares;
use super::{InvariantViolation, Move, Piece, Position, Role, Square};

impl Position {
    /// Play `mv` on this position in place and return the captured piece.
    ///
    /// The move is assumed legal; only the preconditions needed to keep the
    /// board well formed are checked, and on error nothing is changed.
    pub fn apply_move(&mut self, mv: &Move) -> Result<Option<Piece>, InvariantViolation> {
        let moved = self
            .piece_at(mv.from)
            .ok_or(InvariantViolation::EmptyOrigin { square: mv.from })?;

        let rook_hop = if mv.is_castle {
            let (rook_from, rook_to) = castling_rook_squares(mv.to);
            if self.piece_at(rook_from) != Some(Piece::new(moved.color, Role::Rook)) {
                return Err(InvariantViolation::MissingCastlingRook { square: rook_from });
            }
            Some((rook_from, rook_to))
        } else {
            None
        };

        let captured = self.remove_piece(mv.captured_square);
        if let Some(victim) = captured {
            self.graveyard.push(victim);
        }

        self.remove_piece(mv.from);
        self.set_piece(mv.to, moved);

        if let Some((rook_from, rook_to)) = rook_hop {
            if let Some(rook) = self.remove_piece(rook_from) {
                self.set_piece(rook_to, rook);
            }
        }

        self.update_en_passant_square(mv, moved);
        self.update_castling_rights(mv, moved, captured);

        if moved.role == Role::Pawn && mv.to.rank() == moved.color.pawn_promotion_rank() {
            let role = mv
                .promotion
                .filter(|r| r.is_promotion_target())
                .unwrap_or(Role::Queen);
            self.set_piece(mv.to, Piece::new(moved.color, role));
        }

        self.side_to_move = self.side_to_move.opponent();
        self.invalidate();
        Ok(captured)
    }

    /// A copy of this position with `mv` played; `self` is untouched.
    pub fn consider_move(&self, mv: &Move) -> Result<Position, InvariantViolation> {
        let mut considered = self.clone();
        considered.apply_move(mv)?;
        Ok(considered)
    }

    /// Set after a double pawn advance, cleared after anything else.
    fn update_en_passant_square(&mut self, mv: &Move, moved: Piece) {
        let color = moved.color;
        self.en_passant_square = if moved.role == Role::Pawn
            && mv.from.rank() == color.pawn_start_rank()
            && mv.to.rank() == color.pawn_double_rank()
        {
            Some(Square((mv.from.rank() + mv.to.rank()) / 2, mv.from.file()))
        } else {
            None
        };
    }

    fn update_castling_rights(&mut self, mv: &Move, moved: Piece, captured: Option<Piece>) {
        match moved.role {
            Role::King => self.castling_rights.remove_color(moved.color),
            Role::Rook => self.forfeit_rook_right(moved, mv.from),
            _ => {}
        }
        if let Some(victim) = captured {
            if victim.role == Role::Rook {
                self.forfeit_rook_right(victim, mv.captured_square);
            }
        }
    }

    /// A rook leaving (or taken on) its original corner ends that flank's right.
    fn forfeit_rook_right(&mut self, rook: Piece, square: Square) {
        let back_rank = rook.color.back_rank();
        if square == Square(back_rank, 0) {
            self.castling_rights.remove(rook.color, false);
        } else if square == Square(back_rank, 7) {
            self.castling_rights.remove(rook.color, true);
        }
    }
}
