//! Draw detection logic for tic-tac-toe.

use super::win::evaluate;
use crate::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// A full board with no completed line.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && evaluate(board).is_none()
}
