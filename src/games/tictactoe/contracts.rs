//! Contract-based validation for engine moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} action {Q}

use super::action::MoveError;
use super::engine::GameEngine;
use super::invariants::{EngineInvariants, InvariantSet};
use super::{Phase, Position};
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Precondition: a round must be in progress.
pub struct RoundInProgress;

impl RoundInProgress {
    /// Rejects moves before a symbol is chosen and after the round ends.
    #[instrument(skip(engine))]
    pub fn check(engine: &GameEngine) -> Result<(), MoveError> {
        if engine.current_state() == Phase::InProgress {
            Ok(())
        } else {
            Err(MoveError::NotInProgress)
        }
    }
}

/// Precondition: the target square must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects moves onto a taken square.
    #[instrument(skip(engine))]
    pub fn check(pos: &Position, engine: &GameEngine) -> Result<(), MoveError> {
        if engine.board().is_empty(*pos) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(*pos))
        }
    }
}

/// Contract for placing the current player's mark.
///
/// Preconditions:
/// - Round in progress
/// - Square empty
///
/// Postconditions:
/// - Every [`EngineInvariants`] member holds
pub struct MoveContract;

impl Contract<GameEngine, Position> for MoveContract {
    fn pre(engine: &GameEngine, pos: &Position) -> Result<(), MoveError> {
        RoundInProgress::check(engine)?;
        SquareIsEmpty::check(pos, engine)
    }

    fn post(_before: &GameEngine, after: &GameEngine) -> Result<(), MoveError> {
        EngineInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Postcondition failed");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Mark;

    #[test]
    fn test_precondition_before_symbol_choice() {
        let engine = GameEngine::new();
        assert_eq!(
            MoveContract::pre(&engine, &Position::Center),
            Err(MoveError::NotInProgress)
        );
    }

    #[test]
    fn test_precondition_empty_square() {
        let mut engine = GameEngine::new();
        engine.choose_symbol(Mark::X).unwrap();
        assert!(MoveContract::pre(&engine, &Position::Center).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let mut engine = GameEngine::new();
        engine.choose_symbol(Mark::X).unwrap();
        engine.apply_move(4).unwrap();
        assert_eq!(
            MoveContract::pre(&engine, &Position::Center),
            Err(MoveError::SquareOccupied(Position::Center))
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let mut engine = GameEngine::new();
        engine.choose_symbol(Mark::X).unwrap();
        let before = engine.clone();
        engine.apply_move(4).unwrap();
        assert!(MoveContract::post(&before, &engine).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let mut engine = GameEngine::new();
        engine.choose_symbol(Mark::X).unwrap();
        let before = engine.clone();
        engine.apply_move(4).unwrap();

        engine.board.set(Position::TopLeft, Mark::O).unwrap();

        assert!(matches!(
            MoveContract::post(&before, &engine),
            Err(MoveError::InvariantViolation(_))
        ));
    }
}
