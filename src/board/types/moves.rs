//! Move value type.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Role;
use super::square::Square;

/// One ply, described without reference to any board state.
///
/// A `Move` is only meaningful relative to the position it was built for.
/// `captured_square` equals `to` except for en passant, where it names the
/// square of the pawn being taken.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub captured_square: Square,
    pub promotion: Option<Role>,
    pub is_castle: bool,
}

impl Move {
    /// An ordinary move or capture
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            captured_square: to,
            promotion: None,
            is_castle: false,
        }
    }

    /// A castling move, given as the king's origin and destination
    #[inline]
    #[must_use]
    pub const fn castle(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            captured_square: to,
            promotion: None,
            is_castle: true,
        }
    }

    /// An en passant capture removing the pawn on `captured`
    #[inline]
    #[must_use]
    pub const fn en_passant(from: Square, to: Square, captured: Square) -> Self {
        Move {
            from,
            to,
            captured_square: captured,
            promotion: None,
            is_castle: false,
        }
    }

    /// Attach a promotion choice
    #[inline]
    #[must_use]
    pub const fn with_promotion(mut self, role: Role) -> Self {
        self.promotion = Some(role);
        self
    }

    /// Returns true if the captured square differs from the destination
    #[inline]
    #[must_use]
    pub fn is_en_passant(self) -> bool {
        self.captured_square != self.to
    }

    /// Returns true if this is kingside castling (O-O)
    #[inline]
    #[must_use]
    pub const fn is_castle_kingside(self) -> bool {
        self.is_castle && self.to.1 == 6
    }

    /// Returns true if this is queenside castling (O-O-O)
    #[inline]
    #[must_use]
    pub const fn is_castle_queenside(self) -> bool {
        self.is_castle && self.to.1 == 2
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "={}", promo.to_char().to_ascii_uppercase())?;
        }
        if self.is_castle {
            write!(f, " castle")?;
        }
        if self.is_en_passant() {
            write!(f, " ep x{}", self.captured_square)?;
        }
        write!(f, ")")
    }
}

/// Long coordinate form, e.g. `e2e4` or `e7e8q`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "{}", promo.to_char())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_captured_square_defaults_to_destination() {
        let mv = Move::new(Square(1, 4), Square(3, 4));
        assert_eq!(mv.captured_square, mv.to);
        assert!(!mv.is_en_passant());
        assert!(!mv.is_castle);
    }

    #[test]
    fn test_en_passant_captured_square() {
        let mv = Move::en_passant(Square(4, 4), Square(5, 3), Square(4, 3));
        assert!(mv.is_en_passant());
        assert_eq!(mv.captured_square, Square(4, 3));
        assert_eq!(format!("{mv:?}"), "Move(e5d6 ep xd5)");
    }

    #[test]
    fn test_castle_flanks() {
        let short = Move::castle(Square(0, 4), Square(0, 6));
        let long = Move::castle(Square(7, 4), Square(7, 2));
        assert!(short.is_castle_kingside() && !short.is_castle_queenside());
        assert!(long.is_castle_queenside() && !long.is_castle_kingside());
    }

    #[test]
    fn test_display_with_promotion() {
        let mv = Move::new(Square(6, 0), Square(7, 0)).with_promotion(Role::Knight);
        assert_eq!(mv.to_string(), "a7a8n");
    }
}
