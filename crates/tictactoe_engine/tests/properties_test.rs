//! Property tests over arbitrary boards.

use proptest::prelude::*;
use tictactoe_engine::{
    Board, Game, GameStatus, MoveError, Player, Square, apply_move, evaluate, is_board_full,
};

/// Winning lines written out as plain indices, independent of the engine's table.
const TRIPLES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

fn square() -> impl Strategy<Value = Square> {
    prop_oneof![
        Just(Square::Empty),
        Just(Square::Occupied(Player::X)),
        Just(Square::Occupied(Player::O)),
    ]
}

fn board() -> impl Strategy<Value = Board> {
    proptest::array::uniform9(square()).prop_map(Board::from_squares)
}

fn player() -> impl Strategy<Value = Player> {
    prop_oneof![Just(Player::X), Just(Player::O)]
}

fn first_complete(board: &Board) -> Option<[usize; 3]> {
    let sq = board.squares();
    TRIPLES
        .iter()
        .copied()
        .find(|&[a, b, c]| sq[a] != Square::Empty && sq[a] == sq[b] && sq[a] == sq[c])
}

proptest! {
    #[test]
    fn evaluate_reports_first_complete_line(board in board()) {
        let expected = first_complete(&board);
        let actual = evaluate(&board);
        prop_assert_eq!(actual.map(|w| w.indices()), expected);
        if let (Some(win), Some([a, _, _])) = (actual, expected) {
            prop_assert_eq!(Square::Occupied(win.winner), board.squares()[a]);
        }
    }

    #[test]
    fn status_is_consistent(board in board()) {
        let status = Game::from_parts(board, Player::X).status();
        let won = evaluate(&board).is_some();
        let full = is_board_full(&board);
        match status {
            GameStatus::Won(_) => prop_assert!(won),
            GameStatus::Draw => prop_assert!(full && !won),
            GameStatus::InProgress => prop_assert!(!full && !won),
        }
    }

    #[test]
    fn accepted_move_sets_one_square_and_flips_turn(
        board in board(),
        turn in player(),
        index in 0usize..9,
    ) {
        match apply_move(&board, turn, index) {
            Ok((next, next_turn)) => {
                prop_assert_eq!(next_turn, turn.opponent());
                prop_assert_eq!(next.squares()[index], Square::Occupied(turn));
                for i in (0..9).filter(|i| *i != index) {
                    prop_assert_eq!(next.squares()[i], board.squares()[i]);
                }
            }
            Err(MoveError::GameOver) => {
                prop_assert!(evaluate(&board).is_some() || is_board_full(&board));
            }
            Err(MoveError::SquareOccupied(pos)) => {
                prop_assert_eq!(pos.to_index(), index);
                prop_assert_ne!(board.squares()[index], Square::Empty);
            }
            Err(MoveError::OutOfRange(_)) => prop_assert!(false, "index was in range"),
        }
    }

    #[test]
    fn rejected_play_leaves_game_unchanged(
        board in board(),
        turn in player(),
        index in 0usize..20,
    ) {
        let mut game = Game::from_parts(board, turn);
        let before = game;
        if game.play(index).is_err() {
            prop_assert_eq!(game, before);
        } else {
            prop_assert_eq!(game.to_move(), turn.opponent());
        }
    }

    #[test]
    fn restart_is_always_initial(moves in proptest::collection::vec(0usize..12, 0..15)) {
        let mut game = Game::new();
        for index in moves {
            let _ = game.play(index);
        }
        let game = Game::restart();
        prop_assert!(game.board().squares().iter().all(|s| *s == Square::Empty));
        prop_assert_eq!(game.to_move(), Player::X);
        prop_assert_eq!(game.status(), GameStatus::InProgress);
    }
}
