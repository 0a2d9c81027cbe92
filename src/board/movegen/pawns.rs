use super::super::{Color, Position, Role, Square, SquareSet};

/// The two forward diagonals of a pawn, clipped to the board.
pub(crate) fn pawn_attacks(from: Square, color: Color) -> SquareSet {
    let dir = color.pawn_direction();
    [-1, 1]
        .into_iter()
        .filter_map(|df| from.offset(dir, df))
        .collect()
}

impl Position {
    pub(crate) fn generate_pawn_moves(&self, from: Square, color: Color) -> SquareSet {
        let mut targets = SquareSet::EMPTY;
        let dir = color.pawn_direction();

        if let Some(one) = from.offset(dir, 0) {
            if self.is_empty(one) {
                targets.insert(one);
                if from.rank() == color.pawn_start_rank() {
                    if let Some(two) = one.offset(dir, 0) {
                        if self.is_empty(two) {
                            targets.insert(two);
                        }
                    }
                }
            }
        }

        for to in pawn_attacks(from, color) {
            match self.color_on(to) {
                Some(c) if c != color => targets.insert(to),
                None if self.en_passant_capturable(from, to, color) => targets.insert(to),
                _ => {}
            }
        }

        targets
    }

    /// `to` is the en passant square and an enemy pawn sits beside `from`
    /// on the rank it just double-advanced to.
    fn en_passant_capturable(&self, from: Square, to: Square, color: Color) -> bool {
        let enemy = color.opponent();
        self.en_passant_square == Some(to)
            && from.rank() == enemy.pawn_double_rank()
            && self
                .piece_at(Square(from.rank(), to.file()))
                .is_some_and(|p| p.color == enemy && p.role == Role::Pawn)
    }
}
