use super::super::{Color, Position, Square, SquareSet};

pub(crate) const BISHOP_DIRS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub(crate) const ROOK_DIRS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub(crate) const QUEEN_DIRS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

impl Position {
    /// Walk each ray until the edge or the first occupied square (included).
    pub(crate) fn ray_attacks(&self, from: Square, directions: &[(isize, isize)]) -> SquareSet {
        let mut targets = SquareSet::EMPTY;
        for &(dr, df) in directions {
            let mut current = from.offset(dr, df);
            while let Some(sq) = current {
                targets.insert(sq);
                if !self.is_empty(sq) {
                    break;
                }
                current = sq.offset(dr, df);
            }
        }
        targets
    }

    pub(crate) fn generate_sliding_moves(
        &self,
        from: Square,
        color: Color,
        directions: &[(isize, isize)],
    ) -> SquareSet {
        self.without_own(self.ray_attacks(from, directions), color)
    }
}
