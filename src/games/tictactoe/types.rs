//! Core domain types for tic-tac-toe.

use super::position::Position;
use super::rules;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A player's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Mark {
    /// Mark X.
    X,
    /// Mark O.
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// Error parsing a mark from text.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unknown mark {:?}, expected X or O", _0)]
pub struct UnknownMark(#[error(not(source))] pub String);

impl FromStr for Mark {
    type Err = UnknownMark;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "X" | "x" => Ok(Mark::X),
            "O" | "o" => Ok(Mark::O),
            other => Err(UnknownMark(other.to_string())),
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

impl Square {
    /// Returns the mark in this square, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }
}

/// Error writing to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// The target cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(#[error(not(source))] Position),
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Places a mark at the given position.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::CellOccupied`] if the square already holds a mark.
    /// The board is left unchanged in that case.
    pub fn set(&mut self, pos: Position, mark: Mark) -> Result<(), BoardError> {
        let square = &mut self.squares[pos.to_index()];
        if *square != Square::Empty {
            return Err(BoardError::CellOccupied(pos));
        }
        *square = Square::Occupied(mark);
        Ok(())
    }

    /// Empties a square. Only the search's scoped placements undo marks.
    pub(super) fn vacate(&mut self, pos: Position) {
        self.squares[pos.to_index()] = Square::Empty;
    }

    /// Resets all nine squares to empty.
    #[instrument(skip(self))]
    pub fn clear(&mut self) {
        self.squares = [Square::Empty; 9];
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Returns true when no square is empty.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Returns the first line (in scan order) fully held by `mark`.
    pub fn winning_line(&self, mark: Mark) -> Option<[Position; 3]> {
        rules::winning_line(self, mark)
    }

    /// Returns the mark holding a complete line, checking X before O.
    pub fn winner(&self) -> Option<Mark> {
        rules::check_winner(self)
    }

    /// Counts the squares held by `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(mark))
            .count()
    }

    /// Empty positions in row-major order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL.into_iter().filter(|pos| self.is_empty(*pos))
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.squares[pos] {
                    Square::Empty => write!(f, "{}", pos + 1)?,
                    Square::Occupied(mark) => write!(f, "{}", mark)?,
                }
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}
