//! Check and checkmate detection.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Color, InvariantViolation, Position, Square};

/// Where the side to move stands after a ply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Status {
    Ongoing,
    Check,
    Checkmate,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Ongoing => write!(f, "ongoing"),
            Status::Check => write!(f, "check"),
            Status::Checkmate => write!(f, "checkmate"),
        }
    }
}

impl Position {
    /// True if some piece of the other side attacks `side`'s king.
    ///
    /// Memoised on this instance until the next mutation.
    pub fn in_check(&self, side: Color) -> Result<bool, InvariantViolation> {
        self.cache.check[side.index()]
            .get_or_try_init(|| -> Result<bool, InvariantViolation> {
                let king = self.king_square(side)?;
                Ok(self.is_attacked(king, side.opponent()))
            })
            .copied()
    }

    /// True if `side` is in check and no move of any of its pieces gets out.
    ///
    /// Every pseudo-legal destination of every piece is tried on a throwaway
    /// copy; the search stops at the first move that leaves `side` safe.
    pub fn in_checkmate(&self, side: Color) -> Result<bool, InvariantViolation> {
        self.cache.checkmate[side.index()]
            .get_or_try_init(|| -> Result<bool, InvariantViolation> {
                if !self.in_check(side)? {
                    return Ok(false);
                }
                let own: Vec<Square> = self.pieces(side).map(|(sq, _)| sq).collect();
                for from in own {
                    for to in self.allowed_moves(from) {
                        let mv = self.build_move(from, to, None);
                        if !self.consider_move(&mv)?.in_check(side)? {
                            #[cfg(feature = "logging")]
                            log::trace!("{side} escapes check with {mv}");
                            return Ok(false);
                        }
                    }
                }
                #[cfg(feature = "logging")]
                log::trace!("{side} has no way out of check");
                Ok(true)
            })
            .copied()
    }

    /// Status of the side to move.
    pub fn status(&self) -> Result<Status, InvariantViolation> {
        let side = self.side_to_move;
        if self.in_checkmate(side)? {
            Ok(Status::Checkmate)
        } else if self.in_check(side)? {
            Ok(Status::Check)
        } else {
            Ok(Status::Ongoing)
        }
    }
}
