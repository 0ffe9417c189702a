//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Square};
use super::win::check_winner;

/// Checks if the board is full (no empty squares).
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// Checks if the game is a draw (board full with no winner).
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}
