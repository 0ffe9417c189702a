//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. They record which mark
//! went where and can be checked independently of execution.

use super::{Mark, Position};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark that was placed.
    pub mark: Mark,
    /// Where it was placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, position: Position) -> Self {
        Self { mark, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}

/// Rejection of a move. The engine is unchanged when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// No round is being played (symbol not chosen yet, or the round is over).
    #[display("No round in progress")]
    NotInProgress,

    /// The index does not name a square.
    #[display("Position {} out of bounds (must be 0-8)", _0)]
    OutOfRange(#[error(not(source))] usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(#[error(not(source))] String),
}

impl MoveError {
    /// True for the ordinary invalid-move rejections caused by caller input.
    pub fn is_invalid_move(&self) -> bool {
        !matches!(self, MoveError::InvariantViolation(_))
    }
}

/// Rejection of a symbol choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SymbolError {
    /// Moves have already been played this round.
    #[display("Cannot choose a symbol while a round is underway")]
    RoundUnderway,
}
