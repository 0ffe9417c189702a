//! Alternating turn invariant: marks alternate X, O, X, ... or O, X, O, ...

use super::super::{GameEngine, Phase};
use super::Invariant;

/// Invariant: marks alternate and the player to move follows the last mover.
///
/// The first mark of a round is the human's symbol, so either mark may
/// open. While a round is in progress the player to move is the opponent
/// of the last mover, or the human's symbol before any move.
pub struct AlternatingTurnInvariant;

impl Invariant<GameEngine> for AlternatingTurnInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let history = engine.history();

        if history.windows(2).any(|pair| pair[0].mark == pair[1].mark) {
            return false;
        }

        if engine.current_state() != Phase::InProgress {
            return true;
        }

        match history.last() {
            Some(last) => engine.current_player() == last.mark.opponent(),
            None => engine.player_symbol() == Some(engine.current_player()),
        }
    }

    fn description() -> &'static str {
        "Players alternate turns"
    }
}
