//! Tic-tac-toe rules engine.
//!
//! Two local players alternate marks on a 3x3 board. The engine validates
//! and applies moves, detects wins and draws, and restarts. All operations
//! are pure functions over an explicit board and turn; nothing is global.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Game, GameStatus, Player};
//!
//! let mut game = Game::new();
//! for index in [0, 3, 1, 4, 2] {
//!     game.play(index).unwrap();
//! }
//! assert_eq!(game.status(), GameStatus::Won(Player::X));
//! assert_eq!(game.win().unwrap().indices(), [0, 1, 2]);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
mod position;
pub mod rules;
mod types;

pub use action::MoveError;
pub use game::Game;
pub use position::Position;
pub use rules::{WinResult, apply_move, evaluate, is_full as is_board_full, restart};
pub use types::{Board, GameStatus, Player, Square};
