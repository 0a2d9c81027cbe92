use super::super::{Color, Position, Square, SquareSet};

pub(crate) const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

/// Squares reached by a fixed set of (rank, file) offsets.
pub(crate) fn step_targets(from: Square, offsets: &[(isize, isize)]) -> SquareSet {
    offsets
        .iter()
        .filter_map(|&(dr, df)| from.offset(dr, df))
        .collect()
}

impl Position {
    pub(crate) fn generate_knight_moves(&self, from: Square, color: Color) -> SquareSet {
        self.without_own(step_targets(from, &KNIGHT_OFFSETS), color)
    }
}
