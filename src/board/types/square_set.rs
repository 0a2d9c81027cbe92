//! A set of squares stored as a 64-bit bitboard.

use std::fmt;

use super::square::Square;

/// A set of board squares, one bit per square (a1 = bit 0, h8 = bit 63).
///
/// Move generation returns destinations as a `SquareSet`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct SquareSet(pub u64);

impl SquareSet {
    pub const EMPTY: SquareSet = SquareSet(0);
    pub const ALL: SquareSet = SquareSet(!0);

    /// Create a set holding a single square
    #[inline]
    #[must_use]
    pub const fn from_square(sq: Square) -> Self {
        SquareSet(1 << sq.as_index())
    }

    /// Returns true if the set is empty
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of squares in the set
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns true if the given square is in the set
    #[inline]
    #[must_use]
    pub const fn contains(self, sq: Square) -> bool {
        self.0 & (1 << sq.as_index()) != 0
    }

    #[inline]
    pub fn insert(&mut self, sq: Square) {
        self.0 |= 1 << sq.as_index();
    }

    #[inline]
    pub fn remove(&mut self, sq: Square) {
        self.0 &= !(1 << sq.as_index());
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        SquareSet(self.0 | other.0)
    }

    #[inline]
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        SquareSet(self.0 & other.0)
    }

    /// Iterate squares in index order (a1 first)
    #[inline]
    #[must_use]
    pub fn iter(self) -> SquareSetIter {
        SquareSetIter(self.0)
    }
}

impl FromIterator<Square> for SquareSet {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        let mut set = SquareSet::EMPTY;
        for sq in iter {
            set.insert(sq);
        }
        set
    }
}

impl IntoIterator for SquareSet {
    type Item = Square;
    type IntoIter = SquareSetIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for SquareSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for sq in self.iter() {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{sq}")?;
            first = false;
        }
        Ok(())
    }
}

/// Iterator over the squares in a `SquareSet`
pub struct SquareSetIter(u64);

impl Iterator for SquareSetIter {
    type Item = Square;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            return None;
        }
        let idx = self.0.trailing_zeros() as usize;
        self.0 &= self.0 - 1;
        Some(Square::from_index(idx))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for SquareSetIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_contains_remove() {
        let mut set = SquareSet::EMPTY;
        assert!(set.is_empty());
        set.insert(Square(3, 4));
        set.insert(Square(0, 0));
        assert!(set.contains(Square(3, 4)));
        assert_eq!(set.len(), 2);
        set.remove(Square(3, 4));
        assert!(!set.contains(Square(3, 4)));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_iter_in_index_order() {
        let set: SquareSet = [Square(7, 7), Square(0, 1), Square(2, 0)].into_iter().collect();
        let squares: Vec<Square> = set.iter().collect();
        assert_eq!(squares, vec![Square(0, 1), Square(2, 0), Square(7, 7)]);
        assert_eq!(set.to_string(), "b1 a3 h8");
    }
}
