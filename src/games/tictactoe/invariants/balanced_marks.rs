//! Balanced marks invariant: X and O counts never drift apart.

use super::super::{GameEngine, Mark};
use super::Invariant;

/// Invariant: the number of X and O marks differs by at most one.
pub struct BalancedMarksInvariant;

impl Invariant<GameEngine> for BalancedMarksInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let board = engine.board();
        board.count(Mark::X).abs_diff(board.count(Mark::O)) <= 1
    }

    fn description() -> &'static str {
        "Mark counts differ by at most one"
    }
}
