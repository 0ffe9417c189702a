//! The game engine: turn order, symbol choice, scoring and the computer opponent.
//!
//! The engine moves through three phases:
//!
//! - `AwaitingSymbolChoice` until the human picks X or O
//! - `InProgress` while moves are accepted
//! - `RoundOver(outcome)` after a line or a full board, until play again
//!
//! Every rejected operation leaves the engine exactly as it was.

use super::action::{Move, MoveError, SymbolError};
use super::contracts::{Contract, MoveContract, RoundInProgress};
use super::minimax;
use super::phases::{Outcome, Phase, Scores};
use super::{Board, Mark, Position};
use crate::config::EngineConfig;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Result of an accepted move, including any computer reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveReport {
    board: Board,
    outcome: Option<Outcome>,
    winning_line: Option<[Position; 3]>,
    computer_move: Option<Position>,
}

impl MoveReport {
    /// Always true; rejected moves are the `Err` arm of
    /// [`GameEngine::apply_move`].
    pub fn accepted(&self) -> bool {
        true
    }

    /// Board after the move and any computer reply.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Set when the round ended during this call.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// The completed line when the round ended in a win.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        self.winning_line
    }

    /// Where the computer played, if it replied.
    pub fn computer_move(&self) -> Option<Position> {
        self.computer_move
    }
}

/// Result of placing one mark.
struct Placed {
    outcome: Option<Outcome>,
    winning_line: Option<[Position; 3]>,
}

/// Tic-tac-toe engine for one game session.
#[derive(Debug, Clone)]
pub struct GameEngine {
    pub(super) board: Board,
    pub(super) current_player: Mark,
    pub(super) player_symbol: Option<Mark>,
    pub(super) computer_mode: bool,
    pub(super) phase: Phase,
    pub(super) scores: Scores,
    pub(super) history: Vec<Move>,
    pub(super) symbol_choice_open: bool,
}

impl GameEngine {
    /// Creates an engine waiting for a symbol choice, in two-player mode.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Mark::X,
            player_symbol: None,
            computer_mode: false,
            phase: Phase::AwaitingSymbolChoice,
            scores: Scores::default(),
            history: Vec::new(),
            symbol_choice_open: true,
        }
    }

    /// Creates an engine from configuration.
    ///
    /// A configured human symbol is chosen immediately, so the engine
    /// starts in progress.
    #[instrument(skip(config))]
    pub fn with_config(config: &EngineConfig) -> Self {
        let mut engine = Self::new();
        engine.computer_mode = *config.computer_mode();
        if let Some(symbol) = *config.human_symbol() {
            engine.start_round(symbol);
        }
        engine
    }

    /// Chooses the human's mark and starts a fresh round with it.
    ///
    /// # Errors
    ///
    /// Returns [`SymbolError::RoundUnderway`] once a symbol has been chosen
    /// for the current round. The choice reopens when the round ends or after
    /// [`play_again`](Self::play_again) or [`full_reset`](Self::full_reset),
    /// and closes again with the next move.
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn choose_symbol(&mut self, symbol: Mark) -> Result<(), SymbolError> {
        if !self.symbol_choice_open {
            warn!(moves = self.history.len(), "Symbol choice rejected mid-round");
            return Err(SymbolError::RoundUnderway);
        }
        self.start_round(symbol);
        Ok(())
    }

    fn start_round(&mut self, symbol: Mark) {
        self.player_symbol = Some(symbol);
        self.current_player = symbol;
        self.board.clear();
        self.history.clear();
        self.phase = Phase::InProgress;
        self.symbol_choice_open = false;
        info!(symbol = %symbol, computer_mode = self.computer_mode, "Round started");
    }

    /// Places the current player's mark at `index` (0-8, row-major).
    ///
    /// When the round continues and the computer is to move, its reply is
    /// played before returning and is itself checked for a win or draw.
    ///
    /// # Errors
    ///
    /// Rejects the move, with no change to the engine, when no round is in
    /// progress, the index is out of range or the square is taken. A failed
    /// invariant check on either mark rolls back both.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn apply_move(&mut self, index: usize) -> Result<MoveReport, MoveError> {
        RoundInProgress::check(self)
            .inspect_err(|e| warn!(index, error = %e, "Move rejected"))?;
        let pos = Position::from_index(index).ok_or_else(|| {
            warn!(index, "Move rejected: out of range");
            MoveError::OutOfRange(index)
        })?;

        let snapshot = self.clone();
        self.play_turn(pos).inspect_err(|e| {
            warn!(index, error = %e, "Turn rolled back");
            *self = snapshot;
        })
    }

    /// Plays the human's mark and, when due, the computer's reply.
    fn play_turn(&mut self, pos: Position) -> Result<MoveReport, MoveError> {
        let mut placed = self.play(pos)?;
        let mut computer_move = None;

        if placed.outcome.is_none() && self.is_computer_turn() {
            match minimax::best_move(&mut self.board, self.current_player) {
                Some(reply) => {
                    placed = self.play(reply)?;
                    computer_move = Some(reply);
                }
                None => warn!("Computer to move on a full board"),
            }
        }

        Ok(MoveReport {
            board: self.board.clone(),
            outcome: placed.outcome,
            winning_line: placed.winning_line,
            computer_move,
        })
    }

    /// Writes the current player's mark and settles the round.
    fn play(&mut self, pos: Position) -> Result<Placed, MoveError> {
        MoveContract::pre(self, &pos)
            .inspect_err(|e| warn!(error = %e, "Move rejected"))?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let mark = self.current_player;
        self.board
            .set(pos, mark)
            .map_err(|_| MoveError::SquareOccupied(pos))?;
        self.history.push(Move::new(mark, pos));
        self.symbol_choice_open = false;
        debug!(mark = %mark, position = %pos, "Mark placed");

        let mut placed = Placed {
            outcome: None,
            winning_line: None,
        };

        if let Some(line) = self.board.winning_line(mark) {
            self.scores.record_win(mark);
            placed.outcome = Some(Outcome::Win(mark));
            placed.winning_line = Some(line);
        } else if self.board.is_full() {
            placed.outcome = Some(Outcome::Draw);
        } else {
            self.current_player = mark.opponent();
        }

        if let Some(outcome) = placed.outcome {
            self.phase = Phase::RoundOver(outcome);
            self.symbol_choice_open = true;
            info!(%outcome, scores = %self.scores, "Round over");
        }

        #[cfg(debug_assertions)]
        MoveContract::post(&before, self)?;

        Ok(placed)
    }

    /// Starts the next round, keeping scores and the chosen symbol.
    ///
    /// Without a chosen symbol the engine goes back to waiting for one.
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn play_again(&mut self) {
        match self.player_symbol {
            Some(symbol) => self.start_round(symbol),
            None => {
                self.board.clear();
                self.history.clear();
                self.phase = Phase::AwaitingSymbolChoice;
                debug!("Play again without a symbol; awaiting choice");
            }
        }
        self.symbol_choice_open = true;
    }

    /// Clears the board, zeroes both scores and forgets the chosen symbol.
    ///
    /// Computer mode is kept.
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn full_reset(&mut self) {
        self.board.clear();
        self.history.clear();
        self.scores = Scores::default();
        self.player_symbol = None;
        self.current_player = Mark::X;
        self.phase = Phase::AwaitingSymbolChoice;
        self.symbol_choice_open = true;
        info!("Engine fully reset");
    }

    /// Enables or disables the computer opponent.
    #[instrument(skip(self))]
    pub fn set_computer_mode(&mut self, enabled: bool) {
        self.computer_mode = enabled;
        info!(enabled, "Computer mode set");
    }

    /// Flips computer mode and returns the new setting.
    pub fn toggle_computer_mode(&mut self) -> bool {
        self.set_computer_mode(!self.computer_mode);
        self.computer_mode
    }

    /// Wins per mark across rounds.
    pub fn scores(&self) -> Scores {
        self.scores
    }

    /// Current phase.
    pub fn current_state(&self) -> Phase {
        self.phase
    }

    /// True while moves are accepted.
    pub fn game_started(&self) -> bool {
        self.phase == Phase::InProgress
    }

    /// The board of the current round.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The mark placed by the next accepted move.
    pub fn current_player(&self) -> Mark {
        self.current_player
    }

    /// The human's mark, once chosen.
    pub fn player_symbol(&self) -> Option<Mark> {
        self.player_symbol
    }

    /// The computer's mark: the opponent of the human's.
    pub fn computer_symbol(&self) -> Option<Mark> {
        self.player_symbol.map(Mark::opponent)
    }

    /// Whether the computer opponent is enabled.
    pub fn computer_mode(&self) -> bool {
        self.computer_mode
    }

    /// Moves of the current round, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// True when the next move belongs to the computer.
    pub fn is_computer_turn(&self) -> bool {
        self.computer_mode
            && self.phase == Phase::InProgress
            && self.player_symbol.is_some_and(|s| s != self.current_player)
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
