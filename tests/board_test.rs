//! Tests for board storage and terminal detection.

use tictactoe_engine::rules::{is_draw, LINES};
use tictactoe_engine::{Board, BoardError, Mark, Position, Square};

#[test]
fn test_position_to_index() {
    assert_eq!(Position::TopLeft.to_index(), 0);
    assert_eq!(Position::Center.to_index(), 4);
    assert_eq!(Position::BottomRight.to_index(), 8);
}

#[test]
fn test_position_from_index() {
    assert_eq!(Position::from_index(0), Some(Position::TopLeft));
    assert_eq!(Position::from_index(4), Some(Position::Center));
    assert_eq!(Position::from_index(8), Some(Position::BottomRight));
    assert_eq!(Position::from_index(9), None);
}

#[test]
fn test_empty_positions_filters_occupied() {
    let mut board = Board::new();
    board.set(Position::TopLeft, Mark::X).unwrap();
    board.set(Position::Center, Mark::O).unwrap();

    let valid: Vec<_> = board.empty_positions().collect();
    assert_eq!(valid.len(), 7);
    assert!(!valid.contains(&Position::TopLeft));
    assert!(!valid.contains(&Position::Center));
    assert!(valid.contains(&Position::BottomRight));
}

#[test]
fn test_get_is_idempotent() {
    let mut board = Board::new();
    board.set(Position::MiddleRight, Mark::O).unwrap();
    for pos in Position::ALL {
        assert_eq!(board.get(pos), board.get(pos));
    }
}

#[test]
fn test_set_occupied_reports_and_keeps_board() {
    let mut board = Board::new();
    board.set(Position::BottomLeft, Mark::O).unwrap();
    let before = board.clone();

    assert_eq!(
        board.set(Position::BottomLeft, Mark::X),
        Err(BoardError::CellOccupied(Position::BottomLeft))
    );
    assert_eq!(board, before);
    assert_eq!(board.get(Position::BottomLeft), Square::Occupied(Mark::O));
}

#[test]
fn test_winning_line_only_for_complete_lines() {
    // Every placement of three X marks: a line is reported exactly when
    // the three squares form one of the eight lines.
    for a in 0..9 {
        for b in (a + 1)..9 {
            for c in (b + 1)..9 {
                let cells = [a, b, c].map(|i| Position::from_index(i).unwrap());
                let mut board = Board::new();
                for pos in cells {
                    board.set(pos, Mark::X).unwrap();
                }
                let expected = LINES.iter().find(|line| **line == cells).copied();
                assert_eq!(board.winning_line(Mark::X), expected);
                assert_eq!(board.winning_line(Mark::O), None);
            }
        }
    }
}

#[test]
fn test_full_board_without_line_is_draw() {
    use Mark::{O, X};
    let mut board = Board::new();
    for (pos, mark) in Position::ALL.into_iter().zip([X, O, X, X, O, O, O, X, X]) {
        board.set(pos, mark).unwrap();
    }
    assert!(board.is_full());
    assert_eq!(board.winner(), None);
    assert!(is_draw(&board));
}
