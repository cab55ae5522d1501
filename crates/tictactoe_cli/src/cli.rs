//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};

/// Two-player local tic-tac-toe
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Take turns on the same terminal. First to get three in a row wins.", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Tracing filter (overrides RUST_LOG, defaults to "warn")
    #[arg(long, global = true)]
    pub log: Option<String>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively on stdin/stdout
    Play,

    /// Apply a fixed sequence of moves and print the result
    Replay {
        /// Comma-separated cell indices (0-8), e.g. 4,0,8
        #[arg(long, value_delimiter = ',', required = true)]
        moves: Vec<usize>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_no_subcommand() {
        let cli = Cli::try_parse_from(["tictactoe"]).expect("parses");
        assert_eq!(cli.command, None);
        assert_eq!(cli.log, None);
    }

    #[test]
    fn test_replay_moves() {
        let cli = Cli::try_parse_from(["tictactoe", "replay", "--moves", "4,0,8"]).expect("parses");
        assert_eq!(
            cli.command,
            Some(Command::Replay {
                moves: vec![4, 0, 8]
            })
        );
    }

    #[test]
    fn test_log_flag_is_global() {
        let cli = Cli::try_parse_from(["tictactoe", "play", "--log", "debug"]).expect("parses");
        assert_eq!(cli.command, Some(Command::Play));
        assert_eq!(cli.log.as_deref(), Some("debug"));
    }

    #[test]
    fn test_replay_rejects_non_numeric() {
        assert!(Cli::try_parse_from(["tictactoe", "replay", "--moves", "a,b"]).is_err());
    }
}
