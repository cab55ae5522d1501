//! Game rules for tic-tac-toe.
//!
//! Pure functions over a board and a turn. Nothing here holds state: the
//! caller passes the current board and player in and gets new values back.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, WinResult, check_winner, evaluate};

use crate::{Board, GameStatus, MoveError, Player, Position};
use tracing::{debug, info, instrument};

/// Derives the game status from the board alone.
#[instrument(skip(board))]
pub fn status(board: &Board) -> GameStatus {
    if let Some(win) = evaluate(board) {
        GameStatus::Won(win.winner)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

/// Applies `to_move`'s mark at `index`.
///
/// On success returns the new board and the next player. On rejection the
/// inputs are untouched and the reason is returned.
///
/// # Errors
///
/// - [`MoveError::GameOver`] if the board is already won or full
/// - [`MoveError::OutOfRange`] if `index` is not in `0..=8`
/// - [`MoveError::SquareOccupied`] if the square is taken
#[instrument(skip(board), fields(filled = board.filled()))]
pub fn apply_move(board: &Board, to_move: Player, index: usize) -> Result<(Board, Player), MoveError> {
    if status(board).is_over() {
        debug!("Rejected: game is over");
        return Err(MoveError::GameOver);
    }

    let Some(pos) = Position::from_index(index) else {
        debug!("Rejected: index off the board");
        return Err(MoveError::OutOfRange(index));
    };

    if !board.is_empty(pos) {
        debug!(position = %pos, "Rejected: square occupied");
        return Err(MoveError::SquareOccupied(pos));
    }

    let next = board.with_mark(pos, to_move);
    debug!(position = %pos, "Move applied");

    match status(&next) {
        GameStatus::Won(winner) => info!(%winner, "Game won"),
        GameStatus::Draw => info!("Game drawn"),
        GameStatus::InProgress => {}
    }

    Ok((next, to_move.opponent()))
}

/// The initial board and turn: empty squares, X to move.
pub fn restart() -> (Board, Player) {
    (Board::new(), Player::X)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    #[test]
    fn test_status_in_progress() {
        assert_eq!(status(&Board::new()), GameStatus::InProgress);
    }

    #[test]
    fn test_apply_move_center() {
        let (board, turn) = restart();
        let (next, turn) = apply_move(&board, turn, 4).expect("center is open");
        assert_eq!(next.get(Position::Center), Square::Occupied(Player::X));
        assert_eq!(turn, Player::O);
    }

    #[test]
    fn test_apply_move_occupied() {
        let board = Board::new().with_mark(Position::Center, Player::O);
        assert_eq!(
            apply_move(&board, Player::X, 4),
            Err(MoveError::SquareOccupied(Position::Center))
        );
    }

    #[test]
    fn test_apply_move_out_of_range() {
        let (board, turn) = restart();
        assert_eq!(apply_move(&board, turn, 9), Err(MoveError::OutOfRange(9)));
        assert_eq!(
            apply_move(&board, turn, usize::MAX),
            Err(MoveError::OutOfRange(usize::MAX))
        );
    }

    #[test]
    fn test_game_over_checked_first() {
        let board = Board::new()
            .with_mark(Position::TopLeft, Player::X)
            .with_mark(Position::TopCenter, Player::X)
            .with_mark(Position::TopRight, Player::X);
        // Occupied and out-of-range moves on a won board both report GameOver.
        assert_eq!(apply_move(&board, Player::O, 0), Err(MoveError::GameOver));
        assert_eq!(apply_move(&board, Player::O, 42), Err(MoveError::GameOver));
        assert_eq!(apply_move(&board, Player::O, 8), Err(MoveError::GameOver));
    }

    #[test]
    fn test_restart() {
        let (board, turn) = restart();
        assert_eq!(board, Board::new());
        assert_eq!(turn, Player::X);
    }
}
