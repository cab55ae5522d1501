//! Line-oriented game session.
//!
//! Owns the single [`Game`] value and threads it through engine calls in
//! response to one input line at a time.

use std::io::{BufRead, Write};
use std::str::FromStr;
use tictactoe_engine::{Game, GameStatus, MoveError, Position};
use tracing::{debug, info, instrument, warn};

const HELP: &str = "Enter a cell number (0-8) or a name like `center` or `top-left`.\n\
                    `r` restarts, `h` shows this help, `q` quits.";

/// One parsed line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Mark the cell at this index. Not range-checked; the engine decides.
    Move(usize),
    /// Start over with an empty board.
    Restart,
    /// Show the command summary.
    Help,
    /// Leave the session.
    Quit,
}

/// Input that could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ParseError {
    /// Blank line.
    #[display("Empty input")]
    Empty,
    /// Anything else.
    #[display("Unrecognized input: {}", _0)]
    Unknown(String),
}

impl std::error::Error for ParseError {}

impl FromStr for Input {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseError::Empty);
        }
        if let Ok(index) = s.parse::<usize>() {
            return Ok(Input::Move(index));
        }
        match s.to_lowercase().as_str() {
            "r" | "restart" => Ok(Input::Restart),
            "h" | "help" | "?" => Ok(Input::Help),
            "q" | "quit" | "exit" => Ok(Input::Quit),
            _ => Position::from_label(s)
                .map(|pos| Input::Move(pos.to_index()))
                .ok_or_else(|| ParseError::Unknown(s.to_string())),
        }
    }
}

/// What happened in response to an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    /// The move was accepted; the status after it.
    Moved(GameStatus),
    /// The move was refused; the game is unchanged.
    Rejected(MoveError),
    /// The board was cleared.
    Restarted,
    /// Help was requested.
    Help,
    /// The session should end.
    Quit,
}

/// A running game plus the commands that drive it.
#[derive(Debug, Default)]
pub struct Session {
    game: Game,
}

impl Session {
    /// Starts a session on a fresh game.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Applies one input to the game.
    #[instrument(skip(self))]
    pub fn handle(&mut self, input: Input) -> Reply {
        match input {
            Input::Move(index) => match self.game.play(index) {
                Ok(status) => Reply::Moved(status),
                Err(e) => {
                    debug!(error = %e, "Move ignored");
                    Reply::Rejected(e)
                }
            },
            Input::Restart => {
                info!("Restarting game");
                self.game = Game::restart();
                Reply::Restarted
            }
            Input::Help => Reply::Help,
            Input::Quit => Reply::Quit,
        }
    }

    /// Writes the board followed by the status line.
    pub fn render<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "{}", self.game.board())?;
        writeln!(out, "{}", status_text(&self.game))
    }
}

/// Status line: whose turn it is, the winner, or a draw.
pub fn status_text(game: &Game) -> String {
    match game.status() {
        GameStatus::Won(winner) => {
            let cells = game
                .win()
                .map(|win| {
                    win.indices()
                        .iter()
                        .map(|i| i.to_string())
                        .collect::<Vec<_>>()
                        .join(", ")
                })
                .unwrap_or_default();
            format!("Winner: {} (cells {})", winner, cells)
        }
        GameStatus::Draw => "Draw game".to_string(),
        GameStatus::InProgress => format!("Next player: {}", game.to_move()),
    }
}

/// Runs an interactive session until `q` or end of input.
#[instrument(skip_all)]
pub fn run_interactive<R: BufRead, W: Write>(input: R, out: &mut W) -> std::io::Result<()> {
    let mut session = Session::new();
    writeln!(out, "{}\n", HELP)?;
    session.render(out)?;

    for line in input.lines() {
        let line = line?;
        let parsed = match line.parse::<Input>() {
            Ok(parsed) => parsed,
            Err(ParseError::Empty) => continue,
            Err(e) => {
                warn!(error = %e, "Bad input");
                writeln!(out, "{}. Type `h` for help.", e)?;
                continue;
            }
        };

        match session.handle(parsed) {
            Reply::Quit => break,
            Reply::Help => writeln!(out, "{}", HELP)?,
            Reply::Rejected(e) => writeln!(out, "{}", e)?,
            Reply::Moved(_) | Reply::Restarted => session.render(out)?,
        }
    }

    Ok(())
}

/// Applies `moves` in order, reporting each rejection, then prints the result.
#[instrument(skip(out))]
pub fn replay<W: Write>(moves: &[usize], out: &mut W) -> std::io::Result<Session> {
    let mut session = Session::new();
    for &index in moves {
        if let Reply::Rejected(e) = session.handle(Input::Move(index)) {
            writeln!(out, "Move {} ignored: {}", index, e)?;
        }
    }
    session.render(out)?;
    Ok(session)
}
