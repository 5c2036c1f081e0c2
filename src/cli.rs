//! Command-line interface for tictactoe.

use crate::config::Overrides;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_engine::{Board, Player, Seat, SeatConfig, StrategyKind};

/// Tic-tac-toe in the terminal, against people or a negamax search
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe with heuristic and exhaustive computer players", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run; `play` when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game in the terminal
    Play(PlayArgs),

    /// Print the move a strategy would choose for a board
    Suggest {
        /// Nine cells row-major: X, O, and . or _ for empty (`/` and spaces ignored)
        board: Board,

        /// Strategy to consult
        #[arg(short, long, default_value = "exhaustive")]
        strategy: StrategyKind,

        /// Player to move; inferred from the mark counts if omitted
        #[arg(short, long)]
        player: Option<Player>,

        /// Seed for the heuristic's random fallback
        #[arg(long)]
        seed: Option<u64>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

/// Options for a terminal game.
#[derive(Args, Debug, Clone)]
pub struct PlayArgs {
    /// Path to a TOML config file
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Classic pairing: 1 human/human, 2 human/computer, 3 computer/human, 4 computer/computer
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=4))]
    pub preset: Option<u8>,

    /// Player one (X): human, heuristic or exhaustive
    #[arg(long)]
    pub one: Option<Seat>,

    /// Player two (O): human, heuristic or exhaustive
    #[arg(long)]
    pub two: Option<Seat>,

    /// Milliseconds to wait before each computer move when no human plays
    #[arg(long)]
    pub pacing_ms: Option<u64>,

    /// Seed for the heuristic's random fallback
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Default for PlayArgs {
    fn default() -> Self {
        Self {
            config: PathBuf::from("tictactoe.toml"),
            preset: None,
            one: None,
            two: None,
            pacing_ms: None,
            seed: None,
        }
    }
}

impl PlayArgs {
    /// Values that override the config file.
    pub fn overrides(&self) -> Overrides {
        Overrides {
            preset: self.preset.and_then(SeatConfig::preset),
            one: self.one,
            two: self.two,
            pacing_ms: self.pacing_ms,
            seed: self.seed,
        }
    }
}
