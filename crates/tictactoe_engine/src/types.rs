//! Core domain types for tic-tac-toe.

use super::position::Position;
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// 3x3 tic-tac-toe board.
///
/// Squares are stored in row-major order (0-8). A board is only changed by
/// [`Board::with_mark`], which returns a new board and leaves the original
/// untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Builds a board from squares in row-major order.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Gets the square at a raw index, or `None` if the index is off the board.
    pub fn get_index(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Returns a copy of this board with `player`'s mark at `pos`.
    ///
    /// Does not check occupancy; legality is decided by the rules module.
    pub fn with_mark(&self, pos: Position, player: Player) -> Self {
        let mut next = *self;
        next.squares[pos.to_index()] = Square::Occupied(player);
        next
    }

    /// Number of occupied squares.
    pub fn filled(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }
}

impl std::fmt::Display for Board {
    /// Three rows separated by `-+-+-`; empty squares show their index.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.squares[pos] {
                    Square::Empty => write!(f, "{}", pos)?,
                    Square::Occupied(player) => write!(f, "{}", player)?,
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

/// Current status of the game, always derived from the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Returns true for the terminal states.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(*player),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_flips() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent(), Player::X);
    }

    #[test]
    fn test_with_mark_leaves_original() {
        let board = Board::new();
        let next = board.with_mark(Position::Center, Player::X);
        assert_eq!(board, Board::new());
        assert_eq!(next.get(Position::Center), Square::Occupied(Player::X));
        assert_eq!(next.filled(), 1);
    }

    #[test]
    fn test_get_index_out_of_range() {
        let board = Board::new();
        assert_eq!(board.get_index(8), Some(Square::Empty));
        assert_eq!(board.get_index(9), None);
    }

    #[test]
    fn test_display() {
        let board = Board::new()
            .with_mark(Position::TopLeft, Player::X)
            .with_mark(Position::Center, Player::O);
        assert_eq!(board.to_string(), "X|1|2\n-+-+-\n3|O|5\n-+-+-\n6|7|8");
    }
}
