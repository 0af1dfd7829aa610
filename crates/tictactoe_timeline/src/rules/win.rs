//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The 8 winning lines, in the order they are checked.
///
/// When several lines are complete at once the first one listed wins.
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

/// A completed line and the player who owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    /// Owner of all three cells.
    pub player: Player,
    /// The three positions, in line order.
    pub positions: [Position; 3],
}

impl Line {
    /// Returns true if `pos` is part of this line.
    pub fn contains(&self, pos: Position) -> bool {
        self.positions.contains(&pos)
    }
}

/// Returns the first completed line on the board, if any.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<Line> {
    LINES.iter().find_map(|&[a, b, c]| {
        let cell = board.get(a);
        match cell {
            Cell::Occupied(player) if cell == board.get(b) && cell == board.get(c) => Some(Line {
                player,
                positions: [a, b, c],
            }),
            _ => None,
        }
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row, `None`
/// otherwise. A full board without a line and a board still in play
/// both return `None`.
pub fn check_winner(board: &Board) -> Option<Player> {
    winning_line(board).map(|line| line.player)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(Position, Player)]) -> Board {
        let mut board = Board::new();
        for &(pos, player) in marks {
            board.set(pos, Cell::Occupied(player));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_every_line_is_detected() {
        for line in LINES {
            for player in [Player::X, Player::O] {
                let board = board_with(&line.map(|pos| (pos, player)));
                assert_eq!(check_winner(&board), Some(player), "line {line:?}");
            }
        }
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
            (Position::TopRight, Player::O),
        ]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_first_line_in_order_wins() {
        // Top row (X) and bottom row (O) can't both be complete in legal
        // play, but the result must still be deterministic.
        let board = board_with(&[
            (Position::BottomLeft, Player::O),
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
            (Position::TopRight, Player::X),
            (Position::BottomCenter, Player::O),
            (Position::BottomRight, Player::O),
        ]);
        let line = winning_line(&board).expect("two lines complete");
        assert_eq!(line.player, Player::X);
        assert_eq!(line.positions, LINES[0]);
    }

    #[test]
    fn test_line_contains() {
        let board = board_with(&[
            (Position::TopRight, Player::O),
            (Position::Center, Player::O),
            (Position::BottomLeft, Player::O),
        ]);
        let line = winning_line(&board).expect("anti-diagonal");
        assert!(line.contains(Position::Center));
        assert!(!line.contains(Position::TopLeft));
    }
}
