//! Move rejection reasons.

use super::Position;

/// Why a move was refused.
///
/// A rejected move never changes the board or the turn. Checks run in the
/// order the variants are listed, so a move on a finished game reports
/// `GameOver` even if the square is also taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The game has already been won or drawn.
    #[display("Game is already over")]
    GameOver,

    /// The index is not on the board.
    #[display("Position {} out of bounds (must be 0-8)", _0)]
    OutOfRange(usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),
}

impl std::error::Error for MoveError {}
