//! Monotonic board invariant: squares never change once set.

use super::super::{Board, GameEngine};
use super::Invariant;

/// Invariant: the board is exactly the replay of this round's history.
///
/// Each recorded move must land on an empty square, so no square was
/// overwritten, and nothing is on the board that history does not explain.
pub struct MonotonicBoardInvariant;

impl Invariant<GameEngine> for MonotonicBoardInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let mut reconstructed = Board::new();

        for mov in engine.history() {
            if reconstructed.set(mov.position, mov.mark).is_err() {
                return false;
            }
        }

        reconstructed == *engine.board()
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Mark, Move, Position};

    #[test]
    fn test_empty_engine_holds() {
        let engine = GameEngine::new();
        assert!(MonotonicBoardInvariant::holds(&engine));
    }

    #[test]
    fn test_multiple_moves_hold() {
        let mut engine = GameEngine::new();
        engine.choose_symbol(Mark::X).unwrap();
        for index in [0, 4, 2, 6] {
            engine.apply_move(index).unwrap();
        }
        assert!(MonotonicBoardInvariant::holds(&engine));
    }

    #[test]
    fn test_duplicate_history_violates() {
        let mut engine = GameEngine::new();
        engine.choose_symbol(Mark::X).unwrap();
        engine.apply_move(4).unwrap();
        engine.history.push(Move::new(Mark::O, Position::Center));
        assert!(!MonotonicBoardInvariant::holds(&engine));
    }
}
