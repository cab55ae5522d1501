//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The 8 winning lines, in scan order.
///
/// Rows come before columns, columns before diagonals. When several lines
/// are complete at once, the earliest one in this table is reported.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed line: who holds it and which three squares form it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinResult {
    /// The player holding all three squares.
    pub winner: Player,
    /// The winning squares, in line order.
    pub line: [Position; 3],
}

impl WinResult {
    /// Winning squares as board indices.
    pub fn indices(&self) -> [usize; 3] {
        self.line.map(Position::to_index)
    }

    /// Returns true if `pos` is part of the winning line.
    pub fn contains(&self, pos: Position) -> bool {
        self.line.contains(&pos)
    }
}

/// Finds the first completed line on the board.
///
/// Returns `None` if no line holds three equal, non-empty squares.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Option<WinResult> {
    LINES.iter().find_map(|&[a, b, c]| {
        let sq = board.get(a);
        match sq {
            Square::Occupied(winner) if sq == board.get(b) && sq == board.get(c) => {
                Some(WinResult {
                    winner,
                    line: [a, b, c],
                })
            }
            _ => None,
        }
    })
}

/// Checks if there is a winner on the board.
pub fn check_winner(board: &Board) -> Option<Player> {
    evaluate(board).map(|win| win.winner)
}
