//! Exhaustive minimax move selection for the computer opponent.
//!
//! Scores are relative to the human's symbol: a line for the human is
//! `-WIN_SCORE`, a line for the computer is `+WIN_SCORE`, a full board is 0.
//! Depth does not enter the score, so a slow win ranks the same as a fast one.

use super::{Board, Mark, Position};
use std::ops::{Deref, DerefMut};
use tracing::{debug, instrument};

/// Score of a position won by the computer.
pub const WIN_SCORE: i32 = 10;

/// A mark placed for the duration of one search branch.
///
/// The square is emptied again when the guard drops, on every exit path.
struct Placement<'a> {
    board: &'a mut Board,
    pos: Position,
}

impl<'a> Placement<'a> {
    /// Returns `None` if the square is already taken.
    fn new(board: &'a mut Board, pos: Position, mark: Mark) -> Option<Self> {
        board.set(pos, mark).ok()?;
        Some(Self { board, pos })
    }
}

impl Deref for Placement<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Placement<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Placement<'_> {
    fn drop(&mut self) {
        self.board.vacate(self.pos);
    }
}

/// Terminal score of `board`, or `None` while the game can continue.
fn terminal_score(board: &Board, computer: Mark) -> Option<i32> {
    match board.winner() {
        Some(mark) if mark == computer => Some(WIN_SCORE),
        Some(_) => Some(-WIN_SCORE),
        None if board.is_full() => Some(0),
        None => None,
    }
}

/// Minimax value of `board`. The computer moves on maximizing plies.
fn minimax(board: &mut Board, computer: Mark, maximizing: bool) -> i32 {
    if let Some(score) = terminal_score(board, computer) {
        return score;
    }

    let mover = if maximizing { computer } else { computer.opponent() };
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for pos in Position::ALL {
        let Some(mut placed) = Placement::new(board, pos, mover) else {
            continue;
        };
        let score = minimax(&mut placed, computer, !maximizing);
        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}

/// Picks the best square for `computer` to play on `board`.
///
/// Every empty square is tried in row-major order and the first one with
/// the strictly highest score wins. The board is searched in place and is
/// identical to its input when this returns.
///
/// Returns `None` only when the board has no empty square.
#[instrument(skip(board), fields(computer = %computer))]
pub fn best_move(board: &mut Board, computer: Mark) -> Option<Position> {
    let mut best: Option<(Position, i32)> = None;

    for pos in Position::ALL {
        let Some(mut placed) = Placement::new(board, pos, computer) else {
            continue;
        };
        let score = minimax(&mut placed, computer, false);
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((pos, score));
        }
    }

    if let Some((pos, score)) = best {
        debug!(position = %pos, score, "Selected computer move");
    }
    best.map(|(pos, _)| pos)
}
