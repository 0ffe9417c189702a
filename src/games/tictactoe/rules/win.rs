//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark, Position, Square};

/// The eight winning lines, in scan order: rows, columns, diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first line in [`LINES`] order whose three squares all hold `mark`.
pub fn winning_line(board: &Board, mark: Mark) -> Option<[Position; 3]> {
    let held = Square::Occupied(mark);
    LINES
        .into_iter()
        .find(|line| line.iter().all(|pos| board.get(*pos) == held))
}

/// Checks if there is a winner on the board.
///
/// X is checked before O. On a board reached through legal play at most
/// one of them can hold a line.
pub fn check_winner(board: &Board) -> Option<Mark> {
    [Mark::X, Mark::O]
        .into_iter()
        .find(|mark| winning_line(board, *mark).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(cells: [Option<Mark>; 9]) -> Board {
        let mut board = Board::new();
        for (pos, cell) in Position::ALL.into_iter().zip(cells) {
            if let Some(mark) = cell {
                board.set(pos, mark).unwrap();
            }
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
        assert_eq!(winning_line(&board, Mark::X), None);
    }

    #[test]
    fn test_every_line_detected() {
        for line in LINES {
            let mut board = Board::new();
            for pos in line {
                board.set(pos, Mark::O).unwrap();
            }
            assert_eq!(winning_line(&board, Mark::O), Some(line));
            assert_eq!(winning_line(&board, Mark::X), None);
            assert_eq!(check_winner(&board), Some(Mark::O));
        }
    }

    #[test]
    fn test_first_line_in_scan_order() {
        // X holds the top row and the left column; the row comes first.
        let x = Some(Mark::X);
        let o = Some(Mark::O);
        let board = board_from([x, x, x, x, o, o, x, o, None]);
        assert_eq!(
            winning_line(&board, Mark::X),
            Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
        );
    }

    #[test]
    fn test_no_winner_incomplete() {
        let x = Some(Mark::X);
        let board = board_from([x, x, None, None, None, None, None, None, None]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_full_board_without_triple() {
        let x = Some(Mark::X);
        let o = Some(Mark::O);
        let board = board_from([x, o, x, x, o, o, o, x, x]);
        assert_eq!(winning_line(&board, Mark::X), None);
        assert_eq!(winning_line(&board, Mark::O), None);
    }
}
