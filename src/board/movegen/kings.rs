use super::knights::step_targets;
use super::super::{Color, Piece, Position, Role, Square, SquareSet};

pub(crate) const KING_OFFSETS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Rook origin and destination for a castle landing the king on `king_to`.
pub(crate) fn castling_rook_squares(king_to: Square) -> (Square, Square) {
    if king_to.file() == 6 {
        (Square(king_to.rank(), 7), Square(king_to.rank(), 5))
    } else {
        (Square(king_to.rank(), 0), Square(king_to.rank(), 3))
    }
}

impl Position {
    pub(crate) fn generate_king_moves(&self, from: Square, color: Color) -> SquareSet {
        let mut targets = self.without_own(step_targets(from, &KING_OFFSETS), color);

        let back_rank = color.back_rank();
        if from != Square(back_rank, 4) {
            return targets;
        }
        let enemy = color.opponent();
        let rook = Some(Piece::new(color, Role::Rook));

        // Kingside: f and g empty; e, f and g unattacked.
        if self.castling_rights.has(color, true)
            && self.piece_at(Square(back_rank, 7)) == rook
            && (5..=6).all(|f| self.is_empty(Square(back_rank, f)))
            && (4..=6).all(|f| !self.is_attacked(Square(back_rank, f), enemy))
        {
            targets.insert(Square(back_rank, 6));
        }

        // Queenside: b, c and d empty; c, d and e unattacked.
        if self.castling_rights.has(color, false)
            && self.piece_at(Square(back_rank, 0)) == rook
            && (1..=3).all(|f| self.is_empty(Square(back_rank, f)))
            && (2..=4).all(|f| !self.is_attacked(Square(back_rank, f), enemy))
        {
            targets.insert(Square(back_rank, 2));
        }

        targets
    }
}
