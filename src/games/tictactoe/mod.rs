//! Tic-tac-toe: board, rules, engine and the minimax opponent.

mod action;
mod contracts;
mod engine;
mod invariants;
pub mod minimax;
mod phases;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveError, SymbolError};
pub use contracts::{Contract, MoveContract, RoundInProgress, SquareIsEmpty};
pub use engine::{GameEngine, MoveReport};
pub use invariants::{
    AlternatingTurnInvariant, BalancedMarksInvariant, EngineInvariants, Invariant, InvariantSet,
    InvariantViolation, MonotonicBoardInvariant,
};
pub use phases::{Outcome, Phase, Scores};
pub use position::Position;
pub use types::{Board, BoardError, Mark, Square, UnknownMark};
