//! Turn-based play on top of [`Position`].
//!
//! A `Game` owns the current position, the list of moves played from the
//! standard setup, and the outcome once there is one. Requests come in as
//! plain coordinates; the game infers castling, en passant and default
//! promotion before validating.
//!
//! # Example
//! ```
//! use chess_rules::board::{Color, Status};
//! use chess_rules::game::{Game, GameOptions};
//!
//! let mut game = Game::new(GameOptions::default());
//! let status = game.submit(Color::White, "e2e4".parse().unwrap()).unwrap();
//! assert_eq!(status, Status::Ongoing);
//! assert_eq!(game.next_to_move(), Color::Black);
//! ```

mod error;
mod options;
mod request;

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Color, Move, Position, Role, Status};

pub use error::GameError;
pub use options::GameOptions;
pub use request::MoveRequest;

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Outcome {
    Checkmate { winner: Color },
    Resignation { winner: Color },
}

impl Outcome {
    #[must_use]
    pub const fn winner(self) -> Color {
        match self {
            Outcome::Checkmate { winner } | Outcome::Resignation { winner } => winner,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Checkmate { winner } => write!(f, "{winner} wins by checkmate"),
            Outcome::Resignation { winner } => write!(f, "{winner} wins by resignation"),
        }
    }
}

/// A game in progress from the standard initial setup.
#[derive(Clone, Debug)]
pub struct Game {
    position: Position,
    history: Vec<Move>,
    outcome: Option<Outcome>,
    options: GameOptions,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameOptions::default())
    }
}

impl Game {
    #[must_use]
    pub fn new(options: GameOptions) -> Self {
        Game {
            position: Position::new(),
            history: Vec::new(),
            outcome: None,
            options,
        }
    }

    /// Rebuild a game by playing `moves` in order from the initial setup.
    ///
    /// # Errors
    /// `GameError::Replay` with the zero-based index of the first move that
    /// does not apply.
    pub fn replay(moves: &[Move], options: GameOptions) -> Result<Self, GameError> {
        let mut game = Game::new(options);
        for (ply, mv) in moves.iter().enumerate() {
            game.play(*mv).map_err(|error| GameError::Replay {
                ply,
                error: Box::new(error),
            })?;
        }
        Ok(game)
    }

    #[must_use]
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Moves played so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    #[must_use]
    pub fn options(&self) -> &GameOptions {
        &self.options
    }

    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// White after an even number of plies, Black after an odd number.
    #[must_use]
    pub fn next_to_move(&self) -> Color {
        if self.history.len() % 2 == 0 {
            Color::White
        } else {
            Color::Black
        }
    }

    /// Play a coordinate move for `side`.
    ///
    /// Returns the status of the opponent afterwards. The game is unchanged
    /// when an error is returned.
    pub fn submit(&mut self, side: Color, request: MoveRequest) -> Result<Status, GameError> {
        if self.outcome.is_some() {
            return Err(self.reject(GameError::GameOver));
        }
        if side != self.next_to_move() {
            return Err(self.reject(GameError::NotYourTurn { side }));
        }

        let promotion = request.promotion.or_else(|| {
            self.promotes(request)
                .then_some(self.options.default_promotion)
        });
        let mv = self.position.build_move(request.from, request.to, promotion);
        self.play(mv)
    }

    /// Concede the game on behalf of `side`.
    pub fn resign(&mut self, side: Color) -> Result<Outcome, GameError> {
        if self.outcome.is_some() {
            return Err(self.reject(GameError::GameOver));
        }
        let outcome = Outcome::Resignation {
            winner: side.opponent(),
        };
        #[cfg(feature = "logging")]
        log::info!("{side} resigned after {} plies", self.history.len());
        self.outcome = Some(outcome);
        Ok(outcome)
    }

    fn promotes(&self, request: MoveRequest) -> bool {
        self.position.piece_at(request.from).is_some_and(|piece| {
            piece.role == Role::Pawn && request.to.rank() == piece.color.pawn_promotion_rank()
        })
    }

    fn play(&mut self, mv: Move) -> Result<Status, GameError> {
        if self.outcome.is_some() {
            return Err(self.reject(GameError::GameOver));
        }
        let mover = self.position.side_to_move();

        let checked = if self.options.allow_self_check {
            self.position.validate_pseudo_legal(&mv).map(|_| ())
        } else {
            self.position.validate_move(&mv)
        };
        if let Err(e) = checked {
            return Err(self.reject(e.into()));
        }

        // Commit only once the resulting status evaluates cleanly.
        let next = self.position.consider_move(&mv)?;
        let status = next.status()?;
        self.position = next;
        self.history.push(mv);

        #[cfg(feature = "logging")]
        log::debug!("ply {}: {mover} played {mv}, {status}", self.history.len());

        if status == Status::Checkmate {
            let outcome = Outcome::Checkmate { winner: mover };
            #[cfg(feature = "logging")]
            log::info!("{outcome} after {} plies", self.history.len());
            self.outcome = Some(outcome);
        }
        Ok(status)
    }

    #[cfg_attr(not(feature = "logging"), allow(clippy::unused_self))]
    fn reject(&self, error: GameError) -> GameError {
        #[cfg(feature = "logging")]
        log::warn!("rejected at ply {}: {error}", self.history.len());
        error
    }
}
