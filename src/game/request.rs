//! Coordinate move requests as they arrive from a player.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::GameError;
use crate::board::{Role, Square};

/// A move as asked for by a player: two squares and an optional promotion.
///
/// It carries no castling or en passant flags; those are inferred from the
/// position when the request is submitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveRequest {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<Role>,
}

impl MoveRequest {
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        MoveRequest {
            from,
            to,
            promotion: None,
        }
    }

    #[must_use]
    pub const fn with_promotion(mut self, role: Role) -> Self {
        self.promotion = Some(role);
        self
    }

    /// Build a request from two algebraic squares such as `"e2"` and `"e4"`.
    ///
    /// # Errors
    /// `GameError::InvalidSquare` naming the first token that is not a square.
    pub fn from_coords(from: &str, to: &str) -> Result<Self, GameError> {
        Ok(MoveRequest::new(from.parse()?, to.parse()?))
    }
}

/// Parses `e2e4` or `e7e8q`.
impl FromStr for MoveRequest {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || GameError::InvalidMoveText {
            text: s.to_string(),
        };
        if !s.is_ascii() || !(4..=5).contains(&s.len()) {
            return Err(invalid());
        }

        let mut request = MoveRequest::from_coords(&s[0..2], &s[2..4])?;
        if let Some(c) = s[4..].chars().next() {
            let role = Role::from_char(c).ok_or_else(invalid)?;
            request.promotion = Some(role);
        }
        Ok(request)
    }
}

impl fmt::Display for MoveRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(role) = self.promotion {
            write!(f, "{}", role.to_char())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::SquareError;

    #[test]
    fn test_parse_plain_move() {
        let request: MoveRequest = "e2e4".parse().unwrap();
        assert_eq!(request, MoveRequest::new(Square(1, 4), Square(3, 4)));
        assert_eq!(request.to_string(), "e2e4");
    }

    #[test]
    fn test_parse_promotion() {
        let request: MoveRequest = "a7a8n".parse().unwrap();
        assert_eq!(request.promotion, Some(Role::Knight));
        assert_eq!(request.to_string(), "a7a8n");
    }

    #[test]
    fn test_bad_square_is_named() {
        let err = MoveRequest::from_coords("x9", "e4").unwrap_err();
        assert_eq!(
            err,
            GameError::InvalidSquare(SquareError::InvalidNotation {
                notation: "x9".to_string()
            })
        );
        assert_eq!(err.to_string(), "x9 is not a valid square");

        let err = "e2z4".parse::<MoveRequest>().unwrap_err();
        assert_eq!(err.to_string(), "z4 is not a valid square");
    }

    #[test]
    fn test_rejects_malformed_text() {
        for text in ["", "e2", "e2e4qq", "e7e8x", "é2e4"] {
            assert!(
                matches!(
                    text.parse::<MoveRequest>(),
                    Err(GameError::InvalidMoveText { .. })
                ),
                "{text}"
            );
        }
    }
}
