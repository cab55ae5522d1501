//! Owned game value: board plus turn.

use super::rules::{self, WinResult};
use super::{Board, GameStatus, MoveError, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A game of tic-tac-toe.
///
/// Holds only the board and the player to move. Status and winning line are
/// recomputed from the board on every query, so they cannot drift out of
/// sync with it. The value is `Copy`; the caller owns it and threads it
/// through [`Game::apply_move`] or [`Game::play`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    to_move: Player,
}

impl Game {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        let (board, to_move) = rules::restart();
        Self { board, to_move }
    }

    /// Returns the initial game, discarding whatever came before.
    pub fn restart() -> Self {
        Self::new()
    }

    /// Rebuilds a game from a board and turn, e.g. after deserializing a view.
    pub fn from_parts(board: Board, to_move: Player) -> Self {
        Self { board, to_move }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move next.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the derived game status.
    pub fn status(&self) -> GameStatus {
        rules::status(&self.board)
    }

    /// Returns the completed line, if any.
    pub fn win(&self) -> Option<WinResult> {
        rules::evaluate(&self.board)
    }

    /// Returns the three winning positions when the game is won.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        self.win().map(|win| win.line)
    }

    /// Returns true once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.status().is_over()
    }

    /// Empty squares in index order. Empty once the game is over.
    pub fn open_positions(&self) -> Vec<Position> {
        if self.is_over() {
            Vec::new()
        } else {
            Position::valid_moves(&self.board)
        }
    }

    /// Returns the game after the current player marks `index`.
    ///
    /// # Errors
    ///
    /// Returns the rejection reason if the move is illegal; `self` is unchanged.
    pub fn apply_move(&self, index: usize) -> Result<Game, MoveError> {
        let (board, to_move) = rules::apply_move(&self.board, self.to_move, index)?;
        Ok(Self { board, to_move })
    }

    /// Plays `index` in place and returns the resulting status.
    ///
    /// The game is replaced only when the move is accepted.
    ///
    /// # Errors
    ///
    /// Returns the rejection reason if the move is illegal.
    pub fn play(&mut self, index: usize) -> Result<GameStatus, MoveError> {
        *self = self.apply_move(index)?;
        Ok(self.status())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
